pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::pipelines::file_pipeline::FilePipeline;
pub use config::{cli::LocalStorage, toml_config::AssessmentConfig};
pub use core::assessment::{assess, AssessmentEngine, AssessmentRun};
pub use core::catalog::{get_pillars, option_explanations};
pub use core::initiatives::get_top_initiatives;
pub use core::report::build_markdown_report;
pub use core::scoring::{compute_maturity_level, overall_average, score_responses};
pub use domain::model::{
    AnswerSheet, AssessmentResults, Initiative, MaturityLevel, Pillar, PillarScore, Question,
};
pub use utils::error::{Result, VcmError};
