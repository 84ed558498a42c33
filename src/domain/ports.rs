use crate::domain::model::{AnswerSheet, AssessmentResults};
use crate::utils::error::Result;

/// Paths are relative to the storage's own root unless absolute.
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String>;
}

pub trait ConfigProvider {
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn initiative_limit(&self) -> usize;
    fn catalog_path(&self) -> Option<&str>;
    fn file_stem(&self) -> &str;
}

/// Collect answers, score them, publish the rendered artifacts.
pub trait Pipeline {
    fn collect(&self) -> Result<AnswerSheet>;
    fn evaluate(&self, sheet: &AnswerSheet) -> Result<AssessmentResults>;
    fn publish(&self, results: &AssessmentResults) -> Result<Vec<String>>;
}
