use thiserror::Error;

#[derive(Error, Debug)]
pub enum FarmError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Unknown farmer: {name}")]
    UnknownFarmer { name: String },

    #[error("Unknown fruit type: {fruit_type}")]
    UnknownFruit { fruit_type: String },

    #[error("Unit total overflowed while adding {fruit_type}")]
    UnitOverflow { fruit_type: String },

    #[error("Lookup failed: {url} returned status {status}")]
    LookupError { url: String, status: u16 },

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
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FarmError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FarmError::ApiError(_) | FarmError::LookupError { .. } => ErrorSeverity::Medium,
            FarmError::UnknownFarmer { .. }
            | FarmError::UnknownFruit { .. }
            | FarmError::UnitOverflow { .. }
            | FarmError::SerializationError(_) => ErrorSeverity::High,
            FarmError::ConfigError { .. }
            | FarmError::ConfigValidationError { .. }
            | FarmError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            FarmError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FarmError::ApiError(_) => "Check that the farm data service is reachable",
            FarmError::LookupError { .. } => "Check the data service logs for the failing endpoint",
            FarmError::UnknownFarmer { .. } => "Make sure every listed farmer has a crop record",
            FarmError::UnknownFruit { .. } => "Add a unit price for the missing fruit type",
            FarmError::UnitOverflow { .. } => "Check the crop records for implausible unit counts",
            FarmError::SerializationError(_) => {
                "Check that farmer, crop and price records use the expected JSON shape"
            }
            FarmError::IoError(_) => "Check that the data file exists and is readable",
            FarmError::ConfigError { .. }
            | FarmError::ConfigValidationError { .. }
            | FarmError::InvalidConfigValueError { .. } => "Review the configuration values",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FarmError::ApiError(_) | FarmError::LookupError { .. } => {
                format!("Could not fetch farm data: {}", self)
            }
            FarmError::UnknownFarmer { name } => format!("No crop data for farmer '{}'", name),
            FarmError::UnknownFruit { fruit_type } => {
                format!("No unit price for fruit '{}'", fruit_type)
            }
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FarmError>;
