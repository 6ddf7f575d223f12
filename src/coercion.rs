//! Best-effort conversion of submitted form text into integer amounts.
//!
//! Malformed numbers are never reported back to the client. Each caller
//! picks one of the two policies below instead of catching errors ad hoc:
//!
//! - [skip_on_failure]: drop the whole submission (used for new expenses).
//! - [zero_on_failure]: substitute `0` for the field (used for settings).

/// A form value that could not be read as an integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("could not read {field} value {raw:?} as an integer")]
pub struct CoercionFailure {
    /// The name of the form field.
    pub field: &'static str,
    /// The submitted text, if the field was present at all.
    pub raw: Option<String>,
}

/// Read `raw` as a base 10 integer, ignoring surrounding whitespace.
///
/// # Errors
///
/// Returns a [CoercionFailure] if the field is missing, empty or not an
/// integer that fits in an `i64`.
pub fn coerce_integer(field: &'static str, raw: Option<&str>) -> Result<i64, CoercionFailure> {
    raw.and_then(|text| text.trim().parse::<i64>().ok())
        .ok_or_else(|| CoercionFailure {
            field,
            raw: raw.map(str::to_owned),
        })
}

/// Coerce `raw`, logging and discarding the submission on failure.
///
/// Returns `None` when the caller should skip the operation and leave the
/// stored state untouched.
pub fn skip_on_failure(field: &'static str, raw: Option<&str>) -> Option<i64> {
    coerce_integer(field, raw)
        .inspect_err(|failure| tracing::warn!("skipping submission: {failure}"))
        .ok()
}

/// Coerce `raw`, falling back to `0` on failure.
pub fn zero_on_failure(field: &'static str, raw: Option<&str>) -> i64 {
    coerce_integer(field, raw).unwrap_or_else(|failure| {
        tracing::debug!("using 0 in place of invalid input: {failure}");
        0
    })
}
