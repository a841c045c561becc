//! Live path for company details: profile + quote, fetched concurrently.

use crate::core::wire::clean_text;
use crate::core::{CacheMode, Company, CompanyDetails, EpClient, EpError, net};
use crate::synthetic::logo_url_for;

use super::wire::{ProfileRow, QuoteRow};

const DEFAULT_DESCRIPTION: &str = "No description available.";
const UNKNOWN_INDUSTRY: &str = "Unknown";

pub(super) async fn load_from_provider(
    client: &EpClient,
    ticker: &str,
    cache_mode: CacheMode,
) -> Result<CompanyDetails, EpError> {
    let profile_path = ["profile", ticker];
    let quote_path = ["quote", ticker];
    let (profile_res, quote_res) = tokio::join!(
        net::fetch_json::<Vec<ProfileRow>>(
            client,
            &profile_path,
            &[],
            "profile",
            ticker,
            cache_mode
        ),
        net::fetch_json::<Vec<QuoteRow>>(client, &quote_path, &[], "quote", ticker, cache_mode),
    );

    let profile = profile_res?
        .into_iter()
        .next()
        .ok_or_else(|| EpError::MissingData(format!("no profile for {ticker}")))?;
    let quote = quote_res?.into_iter().next().unwrap_or_default();

    assemble(client, ticker, profile, quote)
}

fn assemble(
    client: &EpClient,
    ticker: &str,
    profile: ProfileRow,
    quote: QuoteRow,
) -> Result<CompanyDetails, EpError> {
    let name = clean_text(profile.company_name)
        .ok_or_else(|| EpError::MissingData(format!("profile for {ticker} has no company name")))?;
    let symbol = clean_text(profile.symbol).unwrap_or_else(|| ticker.to_uppercase());

    let headquarters = match (clean_text(profile.city), clean_text(profile.country)) {
        (Some(city), Some(country)) => Some(format!("{city}, {country}")),
        (city, country) => city.or(country),
    };

    Ok(CompanyDetails {
        company: Company {
            id: symbol.clone(),
            logo_url: clean_text(profile.image).or_else(|| Some(logo_url_for(&name))),
            ticker: symbol,
            industry: clean_text(profile.industry).unwrap_or_else(|| UNKNOWN_INDUSTRY.to_string()),
            name: name.clone(),
        },
        // The provider has no ESG scores; they are generated from the company name.
        esg_score: client.synthetic().esg_score(&name),
        description: clean_text(profile.description)
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        market_cap: quote.market_cap.filter(|v| *v > 0.0),
        headquarters,
    })
}
