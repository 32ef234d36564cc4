use super::RateLimitInfo;
use core::fmt::{Display, Formatter};
use ohno::{AppError, EnrichableExt, app_err};

pub type ApiResult<T> = Result<T, ApiError>;

/// Classified failure of a single hosting API call.
#[derive(Debug)]
pub enum ApiError {
    /// Credentials are missing or were rejected (401).
    Unauthorized,

    /// The resource exists but is not accessible with these credentials (403).
    Forbidden,

    /// The requested resource was not found (404).
    NotFound,

    /// The repository has no commits yet (409).
    EmptyRepository,

    /// The quota is exhausted until the given reset time.
    RateLimited(RateLimitInfo),

    /// Transport failure, unexpected status, or a malformed body.
    Failed(AppError),
}

impl ApiError {
    /// Whether the error denies access to a single resource rather than signaling an outage.
    #[must_use]
    pub const fn is_access_error(&self) -> bool {
        matches!(self, Self::Forbidden | Self::NotFound | Self::EmptyRepository)
    }

    /// Convert into an application error, adding `context` to the message.
    pub fn into_app_err(self, context: impl Into<String>) -> AppError {
        let context = context.into();
        match self {
            Self::Failed(e) => e.enrich(context),
            other => app_err!("{context}: {other}"),
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Unauthorized => write!(f, "bad credentials"),
            Self::Forbidden => write!(f, "access forbidden"),
            Self::NotFound => write!(f, "not found"),
            Self::EmptyRepository => write!(f, "repository is empty"),
            Self::RateLimited(info) => write!(
                f,
                "API rate limit exceeded, resets at {}",
                info.reset_at.with_timezone(&chrono::Local).format("%T")
            ),
            Self::Failed(e) => write!(f, "{e:#}"),
        }
    }
}

impl core::error::Error for ApiError {}
