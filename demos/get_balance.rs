use std::io;

use cecula::{ApiKey, CeculaClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("CECULA_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "CECULA_API_KEY environment variable is required",
        )
    })?;

    let client = CeculaClient::new(ApiKey::new(api_key)?);
    let balance = client.get_balance().await.into_result()?;
    println!("balance: {balance}");

    Ok(())
}
