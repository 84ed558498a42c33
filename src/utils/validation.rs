use crate::utils::error::{Result, VcmError};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(VcmError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(VcmError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(VcmError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_file_extension(field_name: &str, file: &str, allowed_extensions: &[&str]) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    match std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed_set.contains(extension) => Ok(()),
        Some(extension) => Err(VcmError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(VcmError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_one_of(field_name: &str, values: &[String], allowed: &[&str]) -> Result<()> {
    for value in values {
        if !allowed.contains(&value.as_str()) {
            return Err(VcmError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.clone(),
                reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
            });
        }
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| VcmError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(VcmError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(VcmError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number of at least 0".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output.output_path", "./output").is_ok());
        assert!(validate_path("output.output_path", "").is_err());
        assert!(validate_path("output.output_path", "out\0put").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("recommendations.limit", 3, 1).is_ok());
        assert!(validate_positive_number("recommendations.limit", 0, 1).is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("answers", "answers.toml", &["toml"]).is_ok());
        assert!(validate_file_extension("answers", "answers.json", &["toml"]).is_err());
        assert!(validate_file_extension("answers", "answers", &["toml"]).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        let formats = vec!["md".to_string(), "csv".to_string()];
        assert!(validate_one_of("output.output_formats", &formats, &["md", "json", "csv"]).is_ok());

        let invalid = vec!["pdf".to_string()];
        assert!(validate_one_of("output.output_formats", &invalid, &["md", "json", "csv"]).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("value_at_stake", 0.0).is_ok());
        assert!(validate_non_negative("value_at_stake", 1_500_000.0).is_ok());
        assert!(validate_non_negative("value_at_stake", -1.0).is_err());
        assert!(validate_non_negative("value_at_stake", f64::NAN).is_err());
    }
}
