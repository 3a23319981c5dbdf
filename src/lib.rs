//! # yescaptcha
//!
//! A Rust client for the [YesCaptcha](https://yescaptcha.com) captcha-solving API.
//!
//! ## Features
//!
//! - **Single-call solving**: `solve` submits a task and polls `getTaskResult`
//!   until the service produces an answer, fails, or the budget runs out.
//! - **Multiple Captcha Types**: reCAPTCHA v2/v3 (incl. Enterprise), hCaptcha,
//!   Turnstile, FunCaptcha classification, image-to-text OCR, CloudFlare.
//! - **Async and Blocking**: the async client runs on Tokio; `YesCaptchaSync`
//!   wraps it for callers without a runtime.
//! - **Typed Errors**: service rejections, protocol violations, transport
//!   failures, and polling timeouts are distinct error variants.
//! - **Proxy Support**: HTTP and SOCKS5 proxy support with authentication.
//!
//! ## Quick Start
//!
//! ```ignore
//! use yescaptcha::{Task, YesCaptcha};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = YesCaptcha::builder("your-client-key").build()?;
//!
//!     let task = Task::NoCaptchaProxyless {
//!         website_url: "https://example.com".into(),
//!         website_key: "6Le-wvkSAAAAAPBMRTvw0Q4Muexq...".into(),
//!         is_invisible: false,
//!     };
//!
//!     let solution = client.solve(&task).await?;
//!     println!("token: {}", solution.token().unwrap_or_default());
//!     Ok(())
//! }
//! ```
//!
//! ## Blocking Usage
//!
//! ```ignore
//! use yescaptcha::YesCaptchaSync;
//!
//! let client = YesCaptchaSync::builder("your-client-key").build_blocking()?;
//! let balance = client.get_balance()?;
//! println!("balance: {}", balance.balance);
//! ```
//!
//! ## Error Handling
//!
//! Every failure mode is inspectable: `YesCaptchaError::Service` carries the
//! service's `errorCode`/`errorDescription` (with a [`ServiceErrorKind`]
//! classification of the documented codes), while `Timeout` signals that a
//! fresh `solve` may still succeed. A "still processing" poll is never an
//! error - it just keeps the loop going.

pub mod blocking;
pub mod client;
pub mod error;
pub mod models;
pub mod transport;

// Re-exports for convenience
pub use blocking::YesCaptchaSync;
pub use client::{YesCaptcha, YesCaptchaBuilder};
pub use error::{Result, ServiceErrorKind, YesCaptchaError};
pub use models::{Balance, Solution, Task, TaskStatus};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_type_names() {
        let task = Task::HCaptchaProxyless {
            website_url: "https://example.com".into(),
            website_key: "key".into(),
        };
        assert_eq!(task.type_name(), "HCaptchaTaskProxyless");

        let task = Task::RecaptchaV2Classification {
            image: "aGVsbG8=".into(),
            question: "/m/0k4j".into(),
        };
        assert_eq!(task.type_name(), "ReCaptchaV2Classification");
    }
}
