use crate::config::answers::{parse_answer_sheet, unknown_answer_ids};
use crate::core::assessment::assess;
use crate::core::catalog::{get_pillars, load_catalog, validate_catalog};
use crate::core::initiatives::InitiativeTable;
use crate::core::report::{build_score_table_csv, render_markdown, render_results_json};
use crate::core::{AnswerSheet, AssessmentResults, ConfigProvider, Pipeline, Storage};
use crate::domain::model::Pillar;
use crate::utils::error::{Result, VcmError};

/// Reads an answer sheet through `Storage`, scores it against the configured
/// catalog and writes one file per configured output format.
pub struct FilePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    answers_path: String,
    pillars: Vec<Pillar>,
    value_at_stake: Option<f64>,
}

impl<S: Storage, C: ConfigProvider> FilePipeline<S, C> {
    /// `answers_path` is read through `storage`, so a relative path resolves
    /// against the storage base (the output directory for `LocalStorage`).
    /// Pass an absolute path to read from anywhere else.
    pub fn new(storage: S, config: C, answers_path: impl Into<String>) -> Result<Self> {
        let pillars = match config.catalog_path() {
            Some(path) => load_catalog(path)?,
            None => get_pillars(),
        };
        Self::with_pillars(storage, config, answers_path, pillars)
    }

    pub fn with_pillars(
        storage: S,
        config: C,
        answers_path: impl Into<String>,
        pillars: Vec<Pillar>,
    ) -> Result<Self> {
        validate_catalog(&pillars)?;
        for id in pillars_without_initiatives(&pillars) {
            tracing::info!("Pillar {} has no configured initiatives", id);
        }
        Ok(Self {
            storage,
            config,
            answers_path: answers_path.into(),
            pillars,
            value_at_stake: None,
        })
    }

    /// Takes precedence over the figure in the answer sheet.
    pub fn value_at_stake(mut self, value: Option<f64>) -> Self {
        self.value_at_stake = value;
        self
    }

    pub fn pillars(&self) -> &[Pillar] {
        &self.pillars
    }

    fn render(&self, format: &str, results: &AssessmentResults) -> Result<String> {
        match format {
            "md" => render_markdown(&self.pillars, results),
            "json" => render_results_json(results),
            "csv" => build_score_table_csv(&self.pillars, results),
            other => Err(VcmError::InvalidConfigValueError {
                field: "output_formats".to_string(),
                value: other.to_string(),
                reason: "Unsupported output format".to_string(),
            }),
        }
    }
}

/// Catalog pillars the shared initiative table knows nothing about.
pub fn pillars_without_initiatives(pillars: &[Pillar]) -> Vec<&str> {
    let table = InitiativeTable::shared();
    pillars
        .iter()
        .map(|p| p.id.as_str())
        .filter(|id| !table.has_pillar(id))
        .collect()
}

impl<S: Storage, C: ConfigProvider> Pipeline for FilePipeline<S, C> {
    fn collect(&self) -> Result<AnswerSheet> {
        tracing::debug!("Reading answers from: {}", self.answers_path);
        let bytes = self.storage.read_file(&self.answers_path)?;
        let content = String::from_utf8(bytes).map_err(|e| VcmError::TomlParseError {
            source_name: self.answers_path.clone(),
            message: e.to_string(),
        })?;

        let mut sheet = parse_answer_sheet(&content)?;
        if self.value_at_stake.is_some() {
            sheet.value_at_stake = self.value_at_stake;
        }
        Ok(sheet)
    }

    fn evaluate(&self, sheet: &AnswerSheet) -> Result<AssessmentResults> {
        for id in unknown_answer_ids(sheet, &self.pillars) {
            tracing::debug!("Ignoring answer for unknown question: {}", id);
        }

        assess(
            &sheet.answers,
            &self.pillars,
            sheet.value_at_stake(),
            self.config.initiative_limit(),
        )
    }

    fn publish(&self, results: &AssessmentResults) -> Result<Vec<String>> {
        let mut written = Vec::new();
        for format in self.config.output_formats() {
            let body = self.render(format, results)?;
            let file_name = format!("{}.{}", self.config.file_stem(), format);
            written.push(self.storage.write_file(&file_name, body.as_bytes())?);
        }
        Ok(written)
    }
}
