//! Example: solving a Cloudflare Turnstile challenge.
//!
//! Run with: cargo run --example solve_turnstile

use yescaptcha::{Task, YesCaptcha};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing for debug output (optional)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let client_key = std::env::var("YESCAPTCHA_CLIENT_KEY")
        .expect("set YESCAPTCHA_CLIENT_KEY to your API key");

    let client = YesCaptcha::builder(client_key)
        // Optionally use the regional endpoint:
        // .base_url(YesCaptcha::CHINA_API)
        // Optionally add proxy:
        // .proxy("http://127.0.0.1:8080")
        .build()?;

    let task = Task::TurnstileProxyless {
        website_url: "https://example.com".into(),
        website_key: "0x4AAAAAAAB...".into(),
    };

    match client.solve(&task).await {
        Ok(solution) => {
            println!("Success!");
            println!("  token: {}", solution.token().unwrap_or_default());
        }
        Err(e) => {
            println!("Failed: {}", e);
        }
    }

    Ok(())
}
