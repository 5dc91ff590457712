//! Uniform response envelope shared by every service reply.
//!
//! Services return either a payload or a [`MessageResponse`]; failures are
//! mapped to a [`MessageResponse`] through [`ClientFacingError`] so callers
//! always see the same `{"message": "..."}` wire shape.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::warn;

/// Message shown to callers when an infrastructure failure is hidden.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error.";

/// Single-field envelope carrying a human-readable or serialised payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    message: String,
}

impl MessageResponse {
    /// Creates an envelope with the given message text.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Creates an envelope whose message is the JSON serialisation of
    /// `payload`.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] when the payload cannot be serialised.
    pub fn serialized<T>(payload: &T) -> Result<Self, serde_json::Error>
    where
        T: Serialize + ?Sized,
    {
        Ok(Self::new(serde_json::to_string(payload)?))
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Parses the message text back into a payload.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] when the message is not valid JSON for
    /// `T`.
    pub fn parse_payload<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.message)
    }
}

/// Outcome class of a reply, mirroring the HTTP status it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    /// The request succeeded.
    Ok,
    /// The request referenced missing data or carried invalid input.
    BadRequest,
    /// An infrastructure failure prevented the request from completing.
    InternalServerError,
}

impl ResponseStatus {
    /// Returns the HTTP status code for this outcome.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::BadRequest => 400,
            Self::InternalServerError => 500,
        }
    }

    /// Returns `true` for successful outcomes.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Ok)
    }
}

/// Service error that knows how it should be presented to a caller.
pub trait ClientFacingError: std::error::Error {
    /// Returns the reply status for this error.
    fn status(&self) -> ResponseStatus;

    /// Returns the message placed in the envelope.
    fn client_message(&self) -> String;
}

/// Body of an [`ApiReply`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReplyBody<T> {
    /// Successful payload.
    Payload(T),
    /// Failure envelope.
    Message(MessageResponse),
}

/// Status plus body, ready for an inbound adapter to write out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiReply<T> {
    status: ResponseStatus,
    body: ReplyBody<T>,
}

impl<T> ApiReply<T> {
    /// Creates a successful reply.
    #[must_use]
    pub const fn ok(payload: T) -> Self {
        Self {
            status: ResponseStatus::Ok,
            body: ReplyBody::Payload(payload),
        }
    }

    /// Creates a failure reply carrying a message envelope.
    #[must_use]
    pub fn failure(status: ResponseStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ReplyBody::Message(MessageResponse::new(message)),
        }
    }

    /// Maps a service result into a reply.
    ///
    /// Errors are logged at `warn` with their full display text; only the
    /// client message reaches the envelope.
    pub fn from_result<E: ClientFacingError>(result: Result<T, E>) -> Self {
        match result {
            Ok(payload) => Self::ok(payload),
            Err(err) => {
                let status = err.status();
                warn!(status = status.code(), error = %err, "request failed");
                Self::failure(status, err.client_message())
            }
        }
    }

    /// Returns the reply status.
    #[must_use]
    pub const fn status(&self) -> ResponseStatus {
        self.status
    }

    /// Returns the reply body.
    #[must_use]
    pub const fn body(&self) -> &ReplyBody<T> {
        &self.body
    }

    /// Consumes the reply, returning the body.
    #[must_use]
    pub fn into_body(self) -> ReplyBody<T> {
        self.body
    }
}

impl<T: Serialize> ApiReply<T> {
    /// Serialises the body as it would appear on the wire.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] when the payload cannot be serialised.
    pub fn body_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.body)
    }
}
