use crate::domain::value::{BroadcastTime, Flash, MessageText, Recipients, SenderName, TemplateId};

/// Optional fields of [`SendSms`].
///
/// Unset fields are filled with Cecula's defaults when the request is encoded:
/// `broadcastTime` becomes `null` and `flash` becomes `0`.
#[derive(Debug, Clone, Default)]
pub struct SendOptions {
    pub broadcast_time: Option<BroadcastTime>,
    pub flash: Option<Flash>,
}

/// Optional fields of [`SendTemplateSms`].
#[derive(Debug, Clone, Default)]
pub struct TemplateOptions {
    pub flash: Option<Flash>,
}

/// `POST sms/a2p/send` request.
#[derive(Debug, Clone)]
pub struct SendSms {
    recipients: Recipients,
    text: MessageText,
    sender: SenderName,
    options: SendOptions,
}

impl SendSms {
    pub fn new(
        recipients: impl Into<Recipients>,
        text: MessageText,
        sender: SenderName,
        options: SendOptions,
    ) -> Self {
        Self {
            recipients: recipients.into(),
            text,
            sender,
            options,
        }
    }

    pub fn recipients(&self) -> &Recipients {
        &self.recipients
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }

    pub fn sender(&self) -> &SenderName {
        &self.sender
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}

/// `POST sms/a2p/template/send` request.
#[derive(Debug, Clone)]
pub struct SendTemplateSms {
    template: TemplateId,
    recipients: Recipients,
    sender: SenderName,
    options: TemplateOptions,
}

impl SendTemplateSms {
    pub fn new(
        template: TemplateId,
        recipients: impl Into<Recipients>,
        sender: SenderName,
        options: TemplateOptions,
    ) -> Self {
        Self {
            template,
            recipients: recipients.into(),
            sender,
            options,
        }
    }

    pub fn template(&self) -> &TemplateId {
        &self.template
    }

    pub fn recipients(&self) -> &Recipients {
        &self.recipients
    }

    pub fn sender(&self) -> &SenderName {
        &self.sender
    }

    pub fn options(&self) -> &TemplateOptions {
        &self.options
    }
}
