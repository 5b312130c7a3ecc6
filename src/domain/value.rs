use crate::domain::validation::ValidationError;

use phonenumber::country;
use secrecy::{ExposeSecret, SecretString};

#[derive(Debug, Clone)]
/// Cecula API key, sent as a bearer credential.
///
/// Invariant: non-empty after trimming. The value is kept in a [`SecretString`] so it never
/// shows up in `Debug` output.
pub struct ApiKey(SecretString);

impl ApiKey {
    /// Configuration key name used by Cecula (`apiKey`).
    pub const FIELD: &'static str = "apiKey";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(SecretString::from(trimmed.to_owned())))
    }

    pub(crate) fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Message body (`text`). Sent exactly as provided.
pub struct MessageText(String);

impl MessageText {
    /// JSON field name used by Cecula (`text`).
    pub const FIELD: &'static str = "text";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender identity (`sender`).
///
/// The value must be registered on the Cecula account; see
/// [`CeculaClient::get_sender_names`](crate::CeculaClient::get_sender_names).
pub struct SenderName(String);

impl SenderName {
    /// JSON field name used by Cecula (`sender`).
    pub const FIELD: &'static str = "sender";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Identifier of a message template stored on the Cecula platform (`template`).
pub struct TemplateId(String);

impl TemplateId {
    /// JSON field name used by Cecula (`template`).
    pub const FIELD: &'static str = "template";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Scheduled broadcast time (`broadcastTime`), passed to Cecula verbatim.
pub struct BroadcastTime(String);

impl BroadcastTime {
    /// JSON field name used by Cecula (`broadcastTime`).
    pub const FIELD: &'static str = "broadcastTime";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Flash-message flag (`flash`).
///
/// Cecula expects `0` for a regular SMS and `1` for a flash SMS. Other values are forwarded
/// unchanged and left for the API to judge.
pub struct Flash(u8);

impl Flash {
    /// JSON field name used by Cecula (`flash`).
    pub const FIELD: &'static str = "flash";

    /// Regular SMS (`0`), the value used when a request does not set one.
    pub const OFF: Self = Self(0);

    /// Flash SMS (`1`).
    pub const ON: Self = Self(1);

    pub fn new(value: u8) -> Self {
        Self(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Recipient identifier as sent to Cecula.
///
/// This type does not normalize; if you want E.164 normalization, parse into
/// [`PhoneNumber`] and convert it into [`Recipient`].
pub struct Recipient(String);

impl Recipient {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Raw value as sent to Cecula.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Recipient {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Recipient {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<PhoneNumber> for Recipient {
    /// Convert an already-parsed phone number to its E.164 form.
    fn from(value: PhoneNumber) -> Self {
        Self(value.e164)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Recipients of a message (`recipients`).
///
/// Cecula accepts either a single identifier or a list. The shape chosen here is the shape
/// sent on the wire: [`Recipients::One`] becomes a JSON string, [`Recipients::Many`] a JSON
/// array in the given order.
pub enum Recipients {
    One(Recipient),
    Many(Vec<Recipient>),
}

impl Recipients {
    /// JSON field name used by Cecula (`recipients`).
    pub const FIELD: &'static str = "recipients";

    pub fn one(recipient: impl Into<Recipient>) -> Self {
        Self::One(recipient.into())
    }

    pub fn many<I, R>(recipients: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Recipient>,
    {
        Self::Many(recipients.into_iter().map(Into::into).collect())
    }
}

impl From<Recipient> for Recipients {
    fn from(value: Recipient) -> Self {
        Self::One(value)
    }
}

impl From<&str> for Recipients {
    fn from(value: &str) -> Self {
        Self::one(value)
    }
}

impl From<String> for Recipients {
    fn from(value: String) -> Self {
        Self::one(value)
    }
}

impl From<PhoneNumber> for Recipients {
    fn from(value: PhoneNumber) -> Self {
        Self::one(value)
    }
}

impl From<Vec<Recipient>> for Recipients {
    fn from(value: Vec<Recipient>) -> Self {
        Self::Many(value)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality, ordering, and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// JSON field name used by Cecula (`recipients`).
    pub const FIELD: &'static str = "recipients";

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl std::cmp::PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.e164.cmp(&other.e164)
    }
}
