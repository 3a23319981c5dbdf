//! Blocking wrapper around the async client.
//!
//! For callers without an async runtime. The wrapper owns a private
//! current-thread tokio runtime and drives the async client on it, so both
//! clients run the exact same protocol and polling logic - the only
//! difference is that waiting blocks the calling thread instead of
//! suspending a task.

use crate::client::{YesCaptcha, YesCaptchaBuilder};
use crate::error::Result;
use crate::models::{Balance, Solution, Task, TaskStatus};

/// Blocking YesCaptcha API client.
///
/// # Example
/// ```ignore
/// use yescaptcha::{Task, YesCaptchaSync};
///
/// fn main() -> anyhow::Result<()> {
///     let client = YesCaptchaSync::builder("your-client-key").build_blocking()?;
///     let balance = client.get_balance()?;
///     println!("balance: {}", balance.balance);
///     Ok(())
/// }
/// ```
pub struct YesCaptchaSync {
    inner: YesCaptcha,
    runtime: tokio::runtime::Runtime,
}

impl YesCaptchaSync {
    /// Create a builder for the blocking client. Identical to
    /// [`YesCaptcha::builder`]; finish with
    /// [`build_blocking`](YesCaptchaBuilder::build_blocking).
    pub fn builder(client_key: impl Into<String>) -> YesCaptchaBuilder {
        YesCaptcha::builder(client_key)
    }

    pub(crate) fn new(inner: YesCaptcha) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self { inner, runtime })
    }

    /// Query the account balance. See [`YesCaptcha::get_balance`].
    pub fn get_balance(&self) -> Result<Balance> {
        self.runtime.block_on(self.inner.get_balance())
    }

    /// Submit a task and return its ID. See [`YesCaptcha::create_task`].
    pub fn create_task(&self, task: &Task) -> Result<String> {
        self.runtime.block_on(self.inner.create_task(task))
    }

    /// Fetch the current result of a task. See [`YesCaptcha::get_task_result`].
    pub fn get_task_result(&self, task_id: &str) -> Result<TaskStatus> {
        self.runtime.block_on(self.inner.get_task_result(task_id))
    }

    /// Submit a task and block until it is solved, fails, or times out.
    /// See [`YesCaptcha::solve`].
    pub fn solve(&self, task: &Task) -> Result<Solution> {
        self.runtime.block_on(self.inner.solve(task))
    }
}

impl YesCaptchaBuilder {
    /// Build a blocking client with its own runtime.
    pub fn build_blocking(self) -> Result<YesCaptchaSync> {
        YesCaptchaSync::new(self.build()?)
    }
}
