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
    let response = client.get_sender_names().await;
    if let Some(message) = response.message() {
        eprintln!("request failed ({}): {message}", response.status());
        return Ok(());
    }
    println!("{}", response.to_json());

    Ok(())
}
