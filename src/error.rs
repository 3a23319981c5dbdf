//! Error types for the yescaptcha library.

use std::time::Duration;

use thiserror::Error;

/// Main error type for the yescaptcha library.
#[derive(Error, Debug)]
pub enum YesCaptchaError {
    /// HTTP request failed (network error or non-2xx status)
    #[error("HTTP request failed: {0}")]
    Http(#[from] rquest::Error),

    /// Response body was not valid JSON
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// The service rejected the request with an errorId != 0
    #[error("API error [{code}]: {description}")]
    Service {
        /// `errorCode` string from the API response.
        code: String,
        /// `errorDescription` from the API response.
        description: String,
    },

    /// Response shape violates the API contract
    #[error("Protocol violation: {0}")]
    Protocol(String),

    /// Polling exceeded the configured budget while the task was still processing
    #[error("task {task_id} timed out after {elapsed:?}")]
    Timeout {
        /// The task that never reached a ready state.
        task_id: String,
        /// Wall-clock time spent polling.
        elapsed: Duration,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for yescaptcha operations.
pub type Result<T> = std::result::Result<T, YesCaptchaError>;

/// Classification of the documented `errorCode` strings.
///
/// The API reports errors as free-form code strings; this maps the ones the
/// service documents so callers can branch without string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceErrorKind {
    /// ERROR_KEY_DOES_NOT_EXIST
    InvalidKey,
    /// ERROR_ZERO_BALANCE
    ZeroBalance,
    /// ERROR_CAPTCHA_UNSOLVABLE (not billed)
    Unsolvable,
    /// ERROR_IP_BLOCKED_5MIN / ERROR_IP_BANNED
    IpBlocked,
    /// ERROR_NO_SLOT_AVAILABLE / ERROR_NO_SLOT_AVAILABLE_BLOCK
    NoSlot,
    /// ERROR_TASK_NOT_SUPPORTED
    TaskNotSupported,
    /// ERROR_TASKID_INVALID / ERROR_NO_SUCH_CAPCHA_ID
    InvalidTaskId,
    /// ERROR_BAD_REQUEST
    BadRequest,
    /// ERROR_SERVICE_UNAVALIABLE (sic, as spelled by the API)
    ServiceUnavailable,
    /// ERROR_TASK_TIMEOUT
    TaskTimeout,
    /// Any code the service does not document
    Other,
}

impl ServiceErrorKind {
    /// Map an `errorCode` string to its kind.
    pub fn from_code(code: &str) -> Self {
        match code {
            "ERROR_KEY_DOES_NOT_EXIST" => Self::InvalidKey,
            "ERROR_ZERO_BALANCE" => Self::ZeroBalance,
            "ERROR_CAPTCHA_UNSOLVABLE" => Self::Unsolvable,
            "ERROR_IP_BLOCKED_5MIN" | "ERROR_IP_BANNED" => Self::IpBlocked,
            "ERROR_NO_SLOT_AVAILABLE" | "ERROR_NO_SLOT_AVAILABLE_BLOCK" => Self::NoSlot,
            "ERROR_TASK_NOT_SUPPORTED" => Self::TaskNotSupported,
            "ERROR_TASKID_INVALID" | "ERROR_NO_SUCH_CAPCHA_ID" => Self::InvalidTaskId,
            "ERROR_BAD_REQUEST" => Self::BadRequest,
            "ERROR_SERVICE_UNAVALIABLE" => Self::ServiceUnavailable,
            "ERROR_TASK_TIMEOUT" => Self::TaskTimeout,
            _ => Self::Other,
        }
    }
}

impl YesCaptchaError {
    /// Returns the kind of a `Service` error, `None` for every other variant.
    pub fn service_kind(&self) -> Option<ServiceErrorKind> {
        match self {
            Self::Service { code, .. } => Some(ServiceErrorKind::from_code(code)),
            _ => None,
        }
    }

    /// Whether this error is the client-side polling timeout.
    ///
    /// Worth distinguishing from `Service` errors: a fresh `solve` may
    /// succeed after a timeout, while resubmitting the same task after a
    /// service rejection will not.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
