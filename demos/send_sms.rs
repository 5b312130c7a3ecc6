use std::io;

use cecula::{
    ApiKey, BroadcastTime, CeculaClient, Flash, JsonLinesLogger, MessageText, Recipients,
    SendOptions, SendSms, SenderName,
};

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

fn optional_flash() -> Result<Option<Flash>, io::Error> {
    let Ok(value) = std::env::var("CECULA_FLASH") else {
        return Ok(None);
    };
    value.trim().parse::<u8>().map(|flag| Some(Flash::new(flag))).map_err(|err| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("CECULA_FLASH must be an integer 0-255: {err}"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = required_env("CECULA_API_KEY")?;
    let recipients = required_env("CECULA_RECIPIENTS")?;
    let sender = required_env("CECULA_SENDER")?;
    let message = std::env::var("CECULA_MESSAGE")
        .unwrap_or_else(|_| "Hello from the cecula demo.".to_owned());

    let client = CeculaClient::builder(ApiKey::new(api_key)?)
        .logger(JsonLinesLogger::new(io::stderr()))
        .build()?;

    let options = SendOptions {
        broadcast_time: std::env::var("CECULA_BROADCAST_TIME")
            .ok()
            .map(BroadcastTime::new),
        flash: optional_flash()?,
    };
    let request = SendSms::new(
        Recipients::many(recipients.split(',').map(str::trim)),
        MessageText::new(message),
        SenderName::new(sender),
        options,
    );

    let response = client.send_sms(request).await;
    println!("{}", response.to_json());

    Ok(())
}
