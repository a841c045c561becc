use serde::de::DeserializeOwned;
use url::Url;

use crate::core::{CacheMode, EpClient, EpError};

/// Read the response body as text.
/// In `test-mode`, if `EP_RECORD=1`, the body is saved as a fixture.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    _endpoint: &str,
    _key: &str,
    _ext: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        if std::env::var("EP_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_endpoint, _key, _ext, &text)
        {
            eprintln!("EP_RECORD: failed to write fixture for {_key}: {e}");
        }
    }

    Ok(text)
}

/// Builds `{base}/{segments..}?{params}&apikey={key}` for the provider.
///
/// Each segment is percent-encoded on its own, so a ticker holding `/`, `?` or
/// `#` stays inside its segment. Empty, `.` and `..` segments are refused.
pub(crate) fn endpoint_url(
    client: &EpClient,
    segments: &[&str],
    params: &[(&str, &str)],
) -> Result<Url, EpError> {
    let key = client
        .api_key()
        .ok_or_else(|| EpError::Config("no API key configured for live request".into()))?;
    if let Some(bad) = segments
        .iter()
        .find(|s| s.is_empty() || **s == "." || **s == "..")
    {
        return Err(EpError::Data(format!("invalid path segment {bad:?}")));
    }
    let mut url = client.base_url().clone();
    url.path_segments_mut()
        .map_err(|()| {
            EpError::Config(format!("base URL cannot take a path: {}", client.base_url()))
        })?
        .pop_if_empty()
        .extend(segments);
    {
        let mut qp = url.query_pairs_mut();
        for (k, v) in params {
            qp.append_pair(k, v);
        }
        qp.append_pair("apikey", key);
    }
    Ok(url)
}

/// Issues a single GET against the provider and returns the raw body.
///
/// No retries: a transport error or non-success status is returned so the
/// caller can fall back. Errors never carry the request URL with its credential.
pub(crate) async fn fetch_body(
    client: &EpClient,
    url: &Url,
    endpoint: &str,
    key: &str,
    cache_mode: CacheMode,
) -> Result<String, EpError> {
    if cache_mode == CacheMode::Use
        && let Some(body) = client.cache_get(url).await
    {
        return Ok(body);
    }

    let resp = client
        .http()
        .get(url.clone())
        .header("accept", "application/json")
        .send()
        .await
        .map_err(|e| EpError::Http(e.without_url()))?;

    if !resp.status().is_success() {
        return Err(EpError::from_status(
            resp.status().as_u16(),
            redact(url),
        ));
    }

    let body = get_text(resp, endpoint, key, "json")
        .await
        .map_err(|e| EpError::Http(e.without_url()))?;
    if cache_mode != CacheMode::Bypass {
        client.cache_put(url, &body, None).await;
    }
    Ok(body)
}

/// GET + JSON decode in one step.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    client: &EpClient,
    segments: &[&str],
    params: &[(&str, &str)],
    endpoint: &str,
    key: &str,
    cache_mode: CacheMode,
) -> Result<T, EpError> {
    let url = endpoint_url(client, segments, params)?;
    let body = fetch_body(client, &url, endpoint, key, cache_mode).await?;
    serde_json::from_str(&body).map_err(EpError::Json)
}

/// The URL without its `apikey` parameter, for error messages and logs.
pub(crate) fn redact(url: &Url) -> String {
    let mut clean = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != "apikey")
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    if pairs.is_empty() {
        clean.set_query(None);
    } else {
        clean.query_pairs_mut().clear().extend_pairs(pairs);
    }
    clean.to_string()
}
