use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured error body returned by the gateway on non-2xx responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub details: Option<String>,
    pub status_code: u16,
    pub correlation_id: Option<String>,
    pub error_code: Option<String>,
    pub source: Option<String>,
    pub exception_type: Option<String>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapperError {
    #[error("Missing required field: {field} in {entity}")]
    MissingField { field: String, entity: String },
}

impl MapperError {
    pub fn missing_field(field: &str, entity: &str) -> Self {
        MapperError::MissingField {
            field: field.to_string(),
            entity: entity.to_string(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("BadRequest Error: {message}")]
    BadRequest {
        message: String,
        info: Option<ErrorInfo>,
    },

    #[error("Authentication Required: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {message}")]
    Forbidden {
        message: String,
        info: Option<ErrorInfo>,
    },

    #[error("NotFound Error: {message}")]
    NotFound {
        message: String,
        info: Option<ErrorInfo>,
    },

    #[error("Server Error: {message}")]
    ServerError {
        message: String,
        info: Option<ErrorInfo>,
    },

    #[error("Unknown Error: {message}")]
    Unknown {
        message: String,
        info: Option<ErrorInfo>,
    },

    #[error("Invalid Response: {0}")]
    InvalidResponse(String),

    #[error("Network Error: {0}")]
    Network(String),
}

impl ApiError {
    /// Builds the error for an HTTP status, composing the message from the
    /// parsed body when one is available.
    pub fn from_status(status: u16, info: Option<ErrorInfo>, default_message: Option<&str>) -> Self {
        let message = match &info {
            Some(info) => {
                let mut parts = Vec::new();
                match (&info.details, &info.exception_type) {
                    (Some(details), _) if !details.is_empty() => parts.push(details.clone()),
                    (_, Some(exception_type)) => parts.push(exception_type.clone()),
                    _ => parts.push(format!("Server returned error status {}", status)),
                }
                if let Some(correlation_id) = &info.correlation_id {
                    parts.push(format!("(Correlation ID: {})", correlation_id));
                }
                if let Some(error_code) = &info.error_code {
                    parts.push(format!("(Error Code: {})", error_code));
                }
                parts.join(" ")
            }
            None => default_message
                .map(str::to_string)
                .unwrap_or_else(|| format!("Server returned error status {}", status)),
        };

        match status {
            400 => ApiError::BadRequest { message, info },
            401 => ApiError::Unauthorized(message),
            403 => ApiError::Forbidden { message, info },
            404 => ApiError::NotFound { message, info },
            500..=599 => ApiError::ServerError { message, info },
            _ => ApiError::Unknown { message, info },
        }
    }

    pub fn error_info(&self) -> Option<&ErrorInfo> {
        match self {
            ApiError::BadRequest { info, .. }
            | ApiError::Forbidden { info, .. }
            | ApiError::NotFound { info, .. }
            | ApiError::ServerError { info, .. }
            | ApiError::Unknown { info, .. } => info.as_ref(),
            ApiError::Unauthorized(_) | ApiError::InvalidResponse(_) | ApiError::Network(_) => None,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ApiError::BadRequest { .. } => "Please verify the request parameters and try again.",
            ApiError::Unauthorized(_) => {
                "Please call `authenticate()` to obtain a valid access token."
            }
            ApiError::Forbidden { .. } => {
                "You do not have permission to perform this action. Please check your access rights."
            }
            ApiError::NotFound { .. } => {
                "The requested resource does not exist. Please verify the resource identifier."
            }
            ApiError::ServerError { .. } => {
                "The server encountered an error. Please try again after a short delay."
            }
            ApiError::Unknown { .. } => {
                "An unexpected error occurred. Please try again or contact support if the issue persists."
            }
            ApiError::InvalidResponse(_) => {
                "The server returned an unexpected response. This may indicate an API change or a temporary server issue."
            }
            ApiError::Network(_) => "Check your internet connection and try again.",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid client credentials")]
    InvalidCredentials,

    #[error("Invalid response from authentication server")]
    InvalidResponse,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Missing client credentials")]
    MissingCredentials,

    #[error("Missing refresh token")]
    MissingRefreshToken,
}

fn code_suffix(code: &Option<String>) -> String {
    match code {
        Some(code) => format!(" (Code: {})", code),
        None => String::new(),
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TtpError {
    #[error("Tap to Pay is not active: {0}")]
    NotActive(String),

    #[error("Tap to Pay SDK not initialized")]
    SdkNotInitialized,

    #[error("Device is not compatible with Tap to Pay: {}", .0.join("; "))]
    NotCompatible(Vec<String>),

    #[error("Configuration failed: {message}{}", code_suffix(.code))]
    ConfigurationFailed { message: String, code: Option<String> },

    #[error("Activation failed: {message}{}", code_suffix(.code))]
    ActivationFailed { message: String, code: Option<String> },

    #[error("Transaction failed: {message}{}", code_suffix(.code))]
    TransactionFailed { message: String, code: Option<String> },

    #[error("Cannot abort transaction: {message}{}", code_suffix(.code))]
    FailedToAbortTransaction { message: String, code: Option<String> },

    #[error("Unknown error: {message}{}", code_suffix(.code))]
    Unknown { message: String, code: Option<String> },
}

impl TtpError {
    pub fn configuration(message: impl Into<String>) -> Self {
        TtpError::ConfigurationFailed {
            message: message.into(),
            code: None,
        }
    }

    pub fn transaction(message: impl Into<String>) -> Self {
        TtpError::TransactionFailed {
            message: message.into(),
            code: None,
        }
    }

    pub fn error_code(&self) -> Option<&str> {
        match self {
            TtpError::ConfigurationFailed { code, .. }
            | TtpError::ActivationFailed { code, .. }
            | TtpError::TransactionFailed { code, .. }
            | TtpError::FailedToAbortTransaction { code, .. }
            | TtpError::Unknown { code, .. } => code.as_deref(),
            TtpError::NotActive(_) | TtpError::SdkNotInitialized | TtpError::NotCompatible(_) => None,
        }
    }
}

/// Failure reported by the host card reader implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ReaderError {
    pub message: String,
    pub code: Option<String>,
}

impl ReaderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    pub fn with_code(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: Some(code.into()),
        }
    }
}

#[derive(Error, Debug)]
pub enum SdkError {
    #[error(transparent)]
    Mapper(#[from] MapperError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Authentication failed: {0}")]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Ttp(#[from] TtpError),

    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Mapping,
    Api,
    Authentication,
    TapToPay,
    Configuration,
    System,
}

impl SdkError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SdkError::Mapper(_) => ErrorCategory::Mapping,
            SdkError::Api(ApiError::Unauthorized(_)) | SdkError::Auth(_) => {
                ErrorCategory::Authentication
            }
            SdkError::Api(_) | SdkError::HttpClientError(_) => ErrorCategory::Api,
            SdkError::Ttp(_) => ErrorCategory::TapToPay,
            SdkError::ConfigError { .. }
            | SdkError::ConfigValidationError { .. }
            | SdkError::InvalidConfigValueError { .. }
            | SdkError::MissingConfigError { .. }
            | SdkError::ValidationError { .. } => ErrorCategory::Configuration,
            SdkError::IoError(_) | SdkError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SdkError::Api(ApiError::Network(_)) | SdkError::Api(ApiError::ServerError { .. }) => {
                ErrorSeverity::Medium
            }
            SdkError::Auth(AuthError::Network(_)) => ErrorSeverity::Medium,
            SdkError::IoError(_) => ErrorSeverity::Critical,
            SdkError::ValidationError { .. } => ErrorSeverity::Low,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SdkError::Api(api) => api.recovery_suggestion().to_string(),
            SdkError::Auth(AuthError::InvalidCredentials) => {
                "Verify the client id and client secret for the selected environment.".to_string()
            }
            SdkError::Auth(AuthError::MissingCredentials)
            | SdkError::Auth(AuthError::MissingRefreshToken) => {
                "Call `authenticate()` again to start a new session.".to_string()
            }
            SdkError::Auth(_) => "Check your internet connection and try again.".to_string(),
            SdkError::Mapper(_) => {
                "The server response is missing required data. Please contact support.".to_string()
            }
            SdkError::Ttp(TtpError::NotActive(_)) => {
                "Activate Tap to Pay on this device before preparing the reader.".to_string()
            }
            SdkError::Ttp(TtpError::SdkNotInitialized) => {
                "Provide a card reader implementation when building the SDK.".to_string()
            }
            SdkError::Ttp(TtpError::NotCompatible(_)) => {
                "Use a supported device with location permission granted.".to_string()
            }
            SdkError::Ttp(_) => "Retry the Tap to Pay operation; re-run prepare() if it keeps failing.".to_string(),
            SdkError::ConfigError { .. }
            | SdkError::ConfigValidationError { .. }
            | SdkError::InvalidConfigValueError { .. }
            | SdkError::MissingConfigError { .. } => {
                "Check the configuration file and command line flags.".to_string()
            }
            SdkError::ValidationError { .. } => "Correct the request parameters and try again.".to_string(),
            SdkError::HttpClientError(_) => "Check the network configuration and base URLs.".to_string(),
            SdkError::IoError(_) => "Check file permissions and available disk space.".to_string(),
            SdkError::SerializationError(_) => "The data could not be (de)serialized; verify its format.".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Authentication => format!("Authentication problem: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::TapToPay => format!("Tap to Pay problem: {}", self),
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SdkError>;
