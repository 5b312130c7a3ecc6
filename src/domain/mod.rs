//! Domain layer: request/response types with their invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{SendOptions, SendSms, SendTemplateSms, TemplateOptions};
pub use response::{ApiResponse, RemoteFailure};
pub use validation::ValidationError;
pub use value::{
    ApiKey, BroadcastTime, Flash, MessageText, PhoneNumber, Recipient, Recipients, SenderName,
    TemplateId,
};
