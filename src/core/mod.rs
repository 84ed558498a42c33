pub mod assessment;
pub mod catalog;
pub mod initiatives;
pub mod report;
pub mod scoring;

pub use crate::domain::model::{AnswerSheet, AssessmentResults};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
