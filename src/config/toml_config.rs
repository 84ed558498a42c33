use crate::core::initiatives::DEFAULT_INITIATIVE_LIMIT;
use crate::core::ConfigProvider;
use crate::utils::error::{Result, VcmError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const OUTPUT_FORMATS: [&str; 3] = ["md", "json", "csv"];
pub const DEFAULT_FILE_STEM: &str = "vcm_assessment";
const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentConfig {
    #[serde(default)]
    pub assessment: AssessmentSection,
    #[serde(default)]
    pub recommendations: RecommendationsConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub catalog: Option<CatalogConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSection {
    #[serde(default = "default_name")]
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationsConfig {
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub output_path: String,
    #[serde(default = "default_output_formats")]
    pub output_formats: Vec<String>,
    pub file_stem: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

fn default_name() -> String {
    "vcm-assessment".to_string()
}

fn default_output_path() -> String {
    "./output".to_string()
}

fn default_output_formats() -> Vec<String> {
    vec!["md".to_string()]
}

impl Default for AssessmentSection {
    fn default() -> Self {
        Self {
            name: default_name(),
            description: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            output_formats: default_output_formats(),
            file_stem: None,
        }
    }
}

impl AssessmentConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(VcmError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| VcmError::TomlParseError {
            source_name: "configuration".to_string(),
            message: e.to_string(),
        })
    }

    /// Replace `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| VcmError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("assessment.name", &self.assessment.name)?;
        validation::validate_path("output.output_path", &self.output.output_path)?;
        validation::validate_positive_number("recommendations.limit", self.initiative_limit(), 1)?;

        if self.output.output_formats.is_empty() {
            return Err(VcmError::MissingConfigError {
                field: "output.output_formats".to_string(),
            });
        }
        validation::validate_one_of(
            "output.output_formats",
            &self.output.output_formats,
            &OUTPUT_FORMATS,
        )?;

        if let Some(stem) = &self.output.file_stem {
            validation::validate_non_empty_string("output.file_stem", stem)?;
            validation::validate_path("output.file_stem", stem)?;
        }

        if let Some(catalog) = &self.catalog {
            validation::validate_path("catalog.path", &catalog.path)?;
            validation::validate_file_extension("catalog.path", &catalog.path, &["toml"])?;
        }

        if let Some(level) = self.logging.as_ref().and_then(|l| l.level.as_ref()) {
            validation::validate_one_of("logging.level", std::slice::from_ref(level), &LOG_LEVELS)?;
        }

        Ok(())
    }

    /// Command line values win over the file.
    #[cfg(feature = "cli")]
    pub fn apply_cli_overrides(&mut self, cli: &crate::config::CliConfig) {
        if let Some(output_path) = &cli.output_path {
            self.output.output_path = output_path.clone();
        }
        if !cli.formats.is_empty() {
            self.output.output_formats = cli.formats.clone();
        }
        if let Some(limit) = cli.limit {
            self.recommendations.limit = Some(limit);
        }
        if let Some(path) = &cli.catalog {
            self.catalog = Some(CatalogConfig { path: path.clone() });
        }
        if cli.verbose || cli.log_json {
            let logging = self.logging.get_or_insert(LoggingConfig {
                level: None,
                json: None,
            });
            if cli.verbose {
                logging.level = Some("debug".to_string());
            }
            if cli.log_json {
                logging.json = Some(true);
            }
        }
    }

    pub fn verbose_logging(&self) -> bool {
        matches!(
            self.logging.as_ref().and_then(|l| l.level.as_deref()),
            Some("debug") | Some("trace")
        )
    }

    pub fn json_logging(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl ConfigProvider for AssessmentConfig {
    fn output_path(&self) -> &str {
        &self.output.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.output.output_formats
    }

    fn initiative_limit(&self) -> usize {
        self.recommendations.limit.unwrap_or(DEFAULT_INITIATIVE_LIMIT)
    }

    fn catalog_path(&self) -> Option<&str> {
        self.catalog.as_ref().map(|c| c.path.as_str())
    }

    fn file_stem(&self) -> &str {
        self.output.file_stem.as_deref().unwrap_or(DEFAULT_FILE_STEM)
    }
}

impl Validate for AssessmentConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[assessment]
name = "q3-review"
description = "Quarterly maturity check"

[recommendations]
limit = 2

[output]
output_path = "./reports"
output_formats = ["md", "json", "csv"]
file_stem = "q3"

[catalog]
path = "content/catalog.toml"

[logging]
level = "debug"
json = true
"#;

        let config = AssessmentConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.assessment.name, "q3-review");
        assert_eq!(
            config.assessment.description.as_deref(),
            Some("Quarterly maturity check")
        );
        assert_eq!(config.initiative_limit(), 2);
        assert_eq!(config.output_path(), "./reports");
        assert_eq!(config.output_formats().len(), 3);
        assert_eq!(config.file_stem(), "q3");
        assert_eq!(config.catalog_path(), Some("content/catalog.toml"));
        assert!(config.verbose_logging());
        assert!(config.json_logging());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AssessmentConfig::from_toml_str("").unwrap();

        assert_eq!(config, AssessmentConfig::default());
        assert_eq!(config.initiative_limit(), DEFAULT_INITIATIVE_LIMIT);
        assert_eq!(config.output_formats(), ["md".to_string()]);
        assert_eq!(config.file_stem(), DEFAULT_FILE_STEM);
        assert_eq!(config.catalog_path(), None);
        assert!(!config.verbose_logging());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("VCM_TEST_OUTPUT_DIR", "/tmp/vcm-reports");

        let config = AssessmentConfig::from_toml_str(
            r#"
[output]
output_path = "${VCM_TEST_OUTPUT_DIR}"
"#,
        )
        .unwrap();
        assert_eq!(config.output_path(), "/tmp/vcm-reports");

        std::env::remove_var("VCM_TEST_OUTPUT_DIR");
    }

    #[test]
    fn test_unknown_env_var_is_left_in_place() {
        let config = AssessmentConfig::from_toml_str(
            r#"
[output]
output_path = "${VCM_TEST_DEFINITELY_UNSET}"
"#,
        )
        .unwrap();
        assert_eq!(config.output_path(), "${VCM_TEST_DEFINITELY_UNSET}");
    }

    #[test]
    fn test_config_validation() {
        let bad_format = AssessmentConfig::from_toml_str(
            r#"
[output]
output_formats = ["pdf"]
"#,
        )
        .unwrap();
        assert!(bad_format.validate().is_err());

        let zero_limit = AssessmentConfig::from_toml_str(
            r#"
[recommendations]
limit = 0
"#,
        )
        .unwrap();
        assert!(zero_limit.validate().is_err());

        let bad_level = AssessmentConfig::from_toml_str(
            r#"
[logging]
level = "loud"
"#,
        )
        .unwrap();
        assert!(bad_level.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let result = AssessmentConfig::from_toml_str("[output\noutput_path = 1");
        assert!(matches!(result, Err(VcmError::TomlParseError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[assessment]\nname = \"file-test\"\n")
            .unwrap();

        let config = AssessmentConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.assessment.name, "file-test");
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_overrides() {
        let mut config = AssessmentConfig::default();
        let cli = crate::config::CliConfig {
            output_path: Some("/tmp/out".to_string()),
            formats: vec!["json".to_string()],
            limit: Some(1),
            verbose: true,
            ..Default::default()
        };

        config.apply_cli_overrides(&cli);

        assert_eq!(config.output_path(), "/tmp/out");
        assert_eq!(config.output_formats(), ["json".to_string()]);
        assert_eq!(config.initiative_limit(), 1);
        assert!(config.verbose_logging());
        assert!(!config.json_logging());
    }
}
