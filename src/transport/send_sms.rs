use serde::Serialize;
use serde_json::Value;

use crate::domain::{Flash, Recipient, Recipients, SendSms, SendTemplateSms};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON request body: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum TransportRecipients<'a> {
    One(&'a str),
    Many(Vec<&'a str>),
}

impl<'a> From<&'a Recipients> for TransportRecipients<'a> {
    fn from(value: &'a Recipients) -> Self {
        match value {
            Recipients::One(recipient) => Self::One(recipient.raw()),
            Recipients::Many(recipients) => {
                Self::Many(recipients.iter().map(Recipient::raw).collect())
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct SendSmsJsonBody<'a> {
    recipients: TransportRecipients<'a>,
    #[serde(rename = "broadcastTime")]
    broadcast_time: Option<&'a str>,
    text: &'a str,
    sender: &'a str,
    flash: u8,
}

#[derive(Debug, Serialize)]
struct SendTemplateSmsJsonBody<'a> {
    template: &'a str,
    recipients: TransportRecipients<'a>,
    sender: &'a str,
    flash: u8,
}

/// Resolve an optional `flash` to the value Cecula assumes when it is omitted.
fn resolve_flash(flash: Option<Flash>) -> u8 {
    flash.unwrap_or(Flash::OFF).value()
}

pub fn encode_send_sms_body(request: &SendSms) -> Result<Value, TransportError> {
    let options = request.options();
    let body = SendSmsJsonBody {
        recipients: request.recipients().into(),
        broadcast_time: options.broadcast_time.as_ref().map(|time| time.as_str()),
        text: request.text().as_str(),
        sender: request.sender().as_str(),
        flash: resolve_flash(options.flash),
    };
    Ok(serde_json::to_value(body)?)
}

pub fn encode_send_template_sms_body(request: &SendTemplateSms) -> Result<Value, TransportError> {
    let body = SendTemplateSmsJsonBody {
        template: request.template().as_str(),
        recipients: request.recipients().into(),
        sender: request.sender().as_str(),
        flash: resolve_flash(request.options().flash),
    };
    Ok(serde_json::to_value(body)?)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::domain::{
        BroadcastTime, MessageText, SendOptions, SenderName, TemplateId, TemplateOptions,
    };

    use super::*;

    #[test]
    fn send_sms_fills_defaults_for_unset_options() {
        let request = SendSms::new(
            "+100",
            MessageText::new("hi"),
            SenderName::new("X"),
            SendOptions::default(),
        );

        let body = encode_send_sms_body(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "recipients": "+100",
                "broadcastTime": null,
                "text": "hi",
                "sender": "X",
                "flash": 0
            })
        );
    }

    #[test]
    fn send_sms_passes_supplied_options_through() {
        let request = SendSms::new(
            Recipients::many(["+100", "+200"]),
            MessageText::new("hi"),
            SenderName::new("X"),
            SendOptions {
                broadcast_time: Some(BroadcastTime::new("2026-10-18 09:30:00")),
                flash: Some(Flash::ON),
            },
        );

        let body = encode_send_sms_body(&request).unwrap();
        assert_eq!(body["recipients"], json!(["+100", "+200"]));
        assert_eq!(body["broadcastTime"], json!("2026-10-18 09:30:00"));
        assert_eq!(body["flash"], json!(1));
    }

    #[test]
    fn send_template_sms_defaults_flash_to_zero() {
        let request = SendTemplateSms::new(
            TemplateId::new("welcome"),
            "+100",
            SenderName::new("X"),
            TemplateOptions::default(),
        );

        let body = encode_send_template_sms_body(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "template": "welcome",
                "recipients": "+100",
                "sender": "X",
                "flash": 0
            })
        );
    }

    #[test]
    fn send_template_sms_keeps_explicit_flash() {
        let request = SendTemplateSms::new(
            TemplateId::new("welcome"),
            Recipients::many(["+100"]),
            SenderName::new("X"),
            TemplateOptions {
                flash: Some(Flash::new(1)),
            },
        );

        let body = encode_send_template_sms_body(&request).unwrap();
        assert_eq!(body["flash"], json!(1));
        assert_eq!(body["recipients"], json!(["+100"]));
        assert!(body.get("broadcastTime").is_none());
    }
}
