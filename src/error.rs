use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Cannot encode global ID: {0}")]
    Encoding(String),

    #[error("Malformed global ID: {0}")]
    MalformedId(String),

    #[error("Expected an ID of type {expected}, got one of type {actual}")]
    TypeMismatch { expected: String, actual: String },

    #[error("Unknown node type: {0}")]
    UnknownType(String),

    #[error("Invalid type name: {0}")]
    InvalidTypeName(String),

    #[error("Node type already registered: {0}")]
    DuplicateType(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Project not initialized. Run 'relay-node init' first.")]
    NotInitialized,

    #[error("Project already initialized at {0}")]
    AlreadyInitialized(String),
}

impl RelayError {
    /// Stable machine-readable code, exposed to GraphQL clients as `extensions.code`.
    pub fn code(&self) -> &'static str {
        match self {
            RelayError::Encoding(_) => "ENCODING_ERROR",
            RelayError::MalformedId(_) => "MALFORMED_ID",
            RelayError::TypeMismatch { .. } => "TYPE_MISMATCH",
            RelayError::UnknownType(_) => "UNKNOWN_TYPE",
            RelayError::InvalidTypeName(_) => "INVALID_TYPE_NAME",
            RelayError::DuplicateType(_) => "DUPLICATE_TYPE",
            RelayError::NotFound(_) => "NOT_FOUND",
            RelayError::Storage(_) => "STORAGE_ERROR",
            RelayError::Validation(_) => "VALIDATION_ERROR",
            RelayError::Config(_) => "CONFIG_ERROR",
            RelayError::Io(_) | RelayError::Yaml(_) | RelayError::Json(_) => "INTERNAL_ERROR",
            RelayError::NotInitialized | RelayError::AlreadyInitialized(_) => "CONFIG_ERROR",
        }
    }

    /// Whether the error was caused by a token the client supplied.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            RelayError::MalformedId(_)
                | RelayError::TypeMismatch { .. }
                | RelayError::UnknownType(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;
