use serde::{Deserialize, Deserializer};

/// A numeric field the provider sends either as a JSON number or as a string
/// such as `"1.23"`, `"-0.5%"` or `"+2.10%"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

fn parse_text_number(s: &str) -> Option<f64> {
    let t = s.trim().trim_end_matches('%').trim();
    let t = t.strip_prefix('+').unwrap_or(t);
    t.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Deserializes an optional percentage/number that may be encoded as text.
///
/// Unparseable text is an error so a malformed payload fails closed.
pub(crate) fn de_opt_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        Some(NumberOrText::Number(n)) => Ok(Some(n)),
        Some(NumberOrText::Text(s)) => parse_text_number(&s).map(Some).ok_or_else(|| {
            serde::de::Error::custom(format!("cannot parse number from {s:?}"))
        }),
        None => Ok(None),
    }
}

/// Non-empty, trimmed text or `None`.
pub(crate) fn clean_text(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
