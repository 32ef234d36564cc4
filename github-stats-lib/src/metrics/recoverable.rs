use crate::client::ApiError;
use core::fmt::{Display, Formatter};

/// A fetch failure a collector absorbed by falling back to its zero state.
///
/// The collector still produces a result; the error is kept so callers can tell a
/// genuine zero apart from "the data source was unavailable".
#[derive(Debug)]
pub enum RecoverableError {
    /// The search endpoint failed for `query`.
    SearchUnavailable { query: String, source: ApiError },
}

impl Display for RecoverableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::SearchUnavailable { query, source } => write!(f, "search '{query}' unavailable: {source}"),
        }
    }
}

impl core::error::Error for RecoverableError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::SearchUnavailable { source, .. } => Some(source),
        }
    }
}
