use crate::transport::TransportError;
use thiserror::Error;

/// Where a locally detected failure came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Offending field or setting, e.g. `code` or `proxy_url`.
    pub field_path: Option<String>,
    /// The rejected value or the underlying parse error.
    pub details: Option<String>,
    /// Resource or component that raised it, e.g. `families`.
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Classified failure of an API call.
///
/// Every variant is constructed where the failure is detected and handed back
/// to the caller untouched. Only [`Error::Status`] carries an HTTP status.
#[derive(Debug, Error)]
pub enum Error {
    /// No response was obtained (DNS, connect, TLS, body read...).
    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    /// A response arrived with a failing status. `message` is the raw body, verbatim.
    #[error("API error: HTTP {status}: {message}")]
    Status {
        code: u16,
        status: String,
        message: String,
    },

    /// The body of a successful response did not match the expected JSON shape.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The request payload could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Validation error: {message}{}", format_context(.context))]
    Validation {
        message: String,
        context: ErrorContext,
    },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },
}

fn format_context(ctx: &ErrorContext) -> String {
    let parts: Vec<String> = [
        ("field", &ctx.field_path),
        ("details", &ctx.details),
        ("source", &ctx.source),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.as_ref().map(|v| format!("{label}: {v}")))
    .collect();

    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    pub fn status(code: u16, status: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Status {
            code,
            status: status.into(),
            message: message.into(),
        }
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Error::Decode(msg.into())
    }

    pub fn validation_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Validation {
            message: msg.into(),
            context,
        }
    }

    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// HTTP status code, present only for status errors.
    pub fn code(&self) -> Option<u16> {
        match self {
            Error::Status { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// HTTP status line text (e.g. `"404 Not Found"`), present only for status errors.
    pub fn status_text(&self) -> Option<&str> {
        match self {
            Error::Status { status, .. } => Some(status.as_str()),
            _ => None,
        }
    }

    /// Human-readable message. For status errors this is the raw response body.
    pub fn message(&self) -> String {
        match self {
            Error::Status { message, .. } => message.clone(),
            Error::Transport(e) => e.to_string(),
            Error::Decode(msg) => msg.clone(),
            Error::Serialization(e) => e.to_string(),
            Error::Validation { message, .. } | Error::Configuration { message, .. } => {
                message.clone()
            }
        }
    }

    /// Context of validation and configuration errors.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Validation { context, .. } | Error::Configuration { context, .. } => {
                Some(context)
            }
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.code() == Some(404)
    }
}
