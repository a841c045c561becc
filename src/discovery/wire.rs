//! Payload shapes for the discovery feeds.
//!
//! Both feeds arrive either as a bare array or wrapped in a named field. Each is
//! parsed as an untagged enum so anything else fails closed.

use serde::Deserialize;

use crate::core::wire::de_opt_number;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SectorRow {
    #[serde(default)]
    pub(crate) sector: Option<String>,
    #[serde(default, deserialize_with = "de_opt_number")]
    pub(crate) changes_percentage: Option<f64>,
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub(crate) enum SectorFeed {
    Bare(Vec<SectorRow>),
    Wrapped {
        #[serde(rename = "sectorPerformance")]
        sector_performance: Vec<SectorRow>,
    },
}

impl SectorFeed {
    pub(crate) fn into_rows(self) -> Vec<SectorRow> {
        match self {
            Self::Bare(rows) | Self::Wrapped { sector_performance: rows } => rows,
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ActiveRow {
    #[serde(default, alias = "symbol")]
    pub(crate) ticker: Option<String>,
    #[serde(default, alias = "name")]
    pub(crate) company_name: Option<String>,
    #[serde(default, deserialize_with = "de_opt_number")]
    pub(crate) changes_percentage: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_number")]
    pub(crate) volume: Option<f64>,
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub(crate) enum ActivesFeed {
    Bare(Vec<ActiveRow>),
    Wrapped {
        #[serde(rename = "mostActiveStock")]
        most_active_stock: Vec<ActiveRow>,
    },
}

impl ActivesFeed {
    pub(crate) fn into_rows(self) -> Vec<ActiveRow> {
        match self {
            Self::Bare(rows) | Self::Wrapped { most_active_stock: rows } => rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sector_feed_accepts_both_shapes() {
        let bare: SectorFeed =
            serde_json::from_str(r#"[{"sector":"Energy","changesPercentage":"-1.2%"}]"#).unwrap();
        let rows = bare.into_rows();
        assert_eq!(rows[0].changes_percentage, Some(-1.2));

        let wrapped: SectorFeed = serde_json::from_str(
            r#"{"sectorPerformance":[{"sector":"Technology","changesPercentage":0.8}]}"#,
        )
        .unwrap();
        assert_eq!(wrapped.into_rows()[0].sector.as_deref(), Some("Technology"));
    }

    #[test]
    fn sector_feed_rejects_other_shapes() {
        assert!(serde_json::from_str::<SectorFeed>(r#"{"Error Message":"Invalid API KEY"}"#).is_err());
        assert!(serde_json::from_str::<SectorFeed>(r#"{"sectorPerformance":null}"#).is_err());
    }

    #[test]
    fn actives_feed_accepts_aliases() {
        let feed: ActivesFeed = serde_json::from_str(
            r#"{"mostActiveStock":[{"symbol":"NVDA","name":"NVIDIA","changesPercentage":"2.5","volume":1000}]}"#,
        )
        .unwrap();
        let row = &feed.into_rows()[0];
        assert_eq!(row.ticker.as_deref(), Some("NVDA"));
        assert_eq!(row.company_name.as_deref(), Some("NVIDIA"));
        assert_eq!(row.volume, Some(1000.0));
    }
}
