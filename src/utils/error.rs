use thiserror::Error;

#[derive(Error, Debug)]
pub enum VcmError {
    #[error("Unknown option '{value}' for question {question_id}")]
    UnrecognizedOption { question_id: String, value: String },

    #[error("Missing answer for question {question_id}")]
    MissingAnswer { question_id: String },

    #[error("No {table} entry for pillar {pillar_id}")]
    UnknownPillar { pillar_id: String, table: String },

    #[error("Invalid catalog: {message}")]
    InvalidCatalog { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("TOML parsing error in {source_name}: {message}")]
    TomlParseError { source_name: String, message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Assessment,
    Content,
    Configuration,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl VcmError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            VcmError::UnrecognizedOption { .. }
            | VcmError::MissingAnswer { .. }
            | VcmError::UnknownPillar { .. } => ErrorCategory::Assessment,
            VcmError::InvalidCatalog { .. } => ErrorCategory::Content,
            VcmError::TomlParseError { .. }
            | VcmError::ConfigValidationError { .. }
            | VcmError::InvalidConfigValueError { .. }
            | VcmError::MissingConfigError { .. } => ErrorCategory::Configuration,
            VcmError::IoError(_) | VcmError::SerializationError(_) | VcmError::CsvError(_) => {
                ErrorCategory::Io
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            VcmError::MissingAnswer { .. } => ErrorSeverity::Medium,
            VcmError::UnrecognizedOption { .. }
            | VcmError::InvalidCatalog { .. }
            | VcmError::TomlParseError { .. }
            | VcmError::ConfigValidationError { .. }
            | VcmError::InvalidConfigValueError { .. }
            | VcmError::MissingConfigError { .. } => ErrorSeverity::High,
            // Contract violations between catalog and report tables.
            VcmError::UnknownPillar { .. } => ErrorSeverity::Critical,
            VcmError::IoError(_) | VcmError::SerializationError(_) | VcmError::CsvError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            VcmError::UnrecognizedOption { question_id, .. } => format!(
                "Use one of the listed option labels for '{}' (run with --list-questions)",
                question_id
            ),
            VcmError::MissingAnswer { question_id } => format!(
                "Add an answer for '{}' to the [answers] table",
                question_id
            ),
            VcmError::UnknownPillar { .. } => {
                "Make sure scores and initiatives were computed from the same catalog".to_string()
            }
            VcmError::InvalidCatalog { .. } => {
                "Check the catalog file: every pillar needs questions and ids must be unique"
                    .to_string()
            }
            VcmError::IoError(_) => "Check that the file exists and the path is writable".to_string(),
            VcmError::SerializationError(_) | VcmError::CsvError(_) => {
                "Retry with a different output format".to_string()
            }
            VcmError::TomlParseError { .. } => "Make sure the file is valid TOML".to_string(),
            VcmError::ConfigValidationError { field, .. }
            | VcmError::InvalidConfigValueError { field, .. }
            | VcmError::MissingConfigError { field } => {
                format!("Review the '{}' setting", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Assessment => format!("The assessment could not be scored: {}", self),
            ErrorCategory::Content => format!("The question catalog is not usable: {}", self),
            ErrorCategory::Configuration => format!("The configuration is invalid: {}", self),
            ErrorCategory::Io => format!("Reading or writing files failed: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, VcmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_option_message_names_question_and_value() {
        let err = VcmError::UnrecognizedOption {
            question_id: "data_quality".to_string(),
            value: "Sometimes".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("data_quality"));
        assert!(message.contains("Sometimes"));
        assert_eq!(err.category(), ErrorCategory::Assessment);
    }

    #[test]
    fn test_severity_ordering() {
        let missing = VcmError::MissingAnswer {
            question_id: "culture_training".to_string(),
        };
        let io = VcmError::IoError(std::io::Error::other("disk"));
        assert!(missing.severity() < io.severity());
        assert!(missing.recovery_suggestion().contains("culture_training"));
    }
}
