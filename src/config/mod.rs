pub mod answers;
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "vcm-assess")]
#[command(about = "Score a Value-Centered Maturity questionnaire and write a report")]
pub struct CliConfig {
    /// Answer sheet (TOML) to score
    #[arg(short, long)]
    pub answers: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory the report files are written to
    #[arg(long)]
    pub output_path: Option<String>,

    /// Output formats: md, json, csv
    #[arg(long, value_delimiter = ',')]
    pub formats: Vec<String>,

    /// Maximum initiatives recommended per pillar
    #[arg(long)]
    pub limit: Option<usize>,

    /// Replacement question catalog (TOML)
    #[arg(long)]
    pub catalog: Option<String>,

    /// Value at stake in PHP; overrides the answer sheet
    #[arg(long)]
    pub value_at_stake: Option<f64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[arg(long, help = "Print the questions and answer options, then exit")]
    pub list_questions: bool,

    #[arg(long, help = "Score and print the report without writing files")]
    pub dry_run: bool,
}
