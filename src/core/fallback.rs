//! The try-live / fall-back-to-synthetic discipline shared by every operation.

use std::fmt;

use crate::core::EpError;

/// Prints a diagnostic line when `EP_DEBUG=1`.
pub(crate) fn debug_log(args: fmt::Arguments<'_>) {
    if std::env::var("EP_DEBUG").ok().as_deref() == Some("1") {
        eprintln!("EP_DEBUG: {args}");
    }
}

/// Converts a live result into an `Option`, logging the discarded error.
///
/// `None` means the caller must answer from the synthetic generator. The error
/// is never propagated.
pub(crate) fn live_or_fallback<T>(res: Result<T, EpError>, op: &str, key: &str) -> Option<T> {
    match res {
        Ok(data) => Some(data),
        Err(e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(op, key, error = %e, "live provider failed; serving synthetic data");
            debug_log(format_args!(
                "{op} for '{key}' failed ({e}), falling back to synthetic data"
            ));
            None
        }
    }
}

/// Rejects an empty row set where the provider is expected to return rows.
pub(crate) fn non_empty<T>(rows: Vec<T>, what: &str) -> Result<Vec<T>, EpError> {
    if rows.is_empty() {
        Err(EpError::MissingData(format!("{what} returned no rows")))
    } else {
        Ok(rows)
    }
}
