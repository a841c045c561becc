use serde::Deserialize;

use crate::core::wire::de_opt_number;

/// First element of `GET profile/{ticker}`.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProfileRow {
    #[serde(default)]
    pub(crate) symbol: Option<String>,
    #[serde(default)]
    pub(crate) company_name: Option<String>,
    #[serde(default)]
    pub(crate) industry: Option<String>,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(default)]
    pub(crate) image: Option<String>,
    #[serde(default)]
    pub(crate) city: Option<String>,
    #[serde(default)]
    pub(crate) country: Option<String>,
}

/// First element of `GET quote/{ticker}`.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuoteRow {
    #[serde(default, deserialize_with = "de_opt_number")]
    pub(crate) market_cap: Option<f64>,
}
