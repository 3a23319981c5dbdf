//! Example: checking the account balance with the blocking client.
//!
//! Run with: cargo run --example check_balance

use yescaptcha::YesCaptchaSync;

fn main() -> anyhow::Result<()> {
    let client_key = std::env::var("YESCAPTCHA_CLIENT_KEY")
        .expect("set YESCAPTCHA_CLIENT_KEY to your API key");

    let client = YesCaptchaSync::builder(client_key).build_blocking()?;
    let balance = client.get_balance()?;

    println!("balance: {} points", balance.balance);
    if let Some(soft) = balance.soft_balance {
        println!("developer share: {} points", soft);
    }

    Ok(())
}
