use std::io;

use cecula::{
    ApiKey, CeculaClient, JsonLinesLogger, Recipients, SendTemplateSms, SenderName, TemplateId,
    TemplateOptions,
};

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = required_env("CECULA_API_KEY")?;
    let template = required_env("CECULA_TEMPLATE")?;
    let recipients = required_env("CECULA_RECIPIENTS")?;
    let sender = required_env("CECULA_SENDER")?;

    let client = CeculaClient::builder(ApiKey::new(api_key)?)
        .logger(JsonLinesLogger::new(io::stderr()))
        .build()?;

    let request = SendTemplateSms::new(
        TemplateId::new(template),
        Recipients::many(recipients.split(',').map(str::trim)),
        SenderName::new(sender),
        TemplateOptions::default(),
    );

    let response = client.send_template_sms(request).await;
    println!("{}", response.to_json());

    Ok(())
}
