//! Pillars and questions of the maturity assessment.
//!
//! The built-in content is a lightweight placeholder. A replacement catalog
//! can be loaded from TOML without touching the scoring code.

use crate::domain::model::{Pillar, Question};
use crate::utils::error::{Result, VcmError};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

const OPTION_EXPLANATIONS: [(&str, &str); 5] = [
    (
        "Not started",
        "No deliberate effort yet; any activity is accidental or individual.",
    ),
    (
        "Ad hoc or limited",
        "Some teams try it, but practices vary and depend on individuals.",
    ),
    (
        "Defined and repeatable",
        "A documented approach exists and is followed in most cases.",
    ),
    (
        "Managed with metrics",
        "The practice is measured and results are reviewed regularly.",
    ),
    (
        "Optimized and automated",
        "Continuously improved, largely automated and embedded in routines.",
    ),
];

/// Answer options shared by every built-in question, lowest maturity first.
pub fn default_options() -> Vec<String> {
    OPTION_EXPLANATIONS
        .iter()
        .map(|(label, _)| label.to_string())
        .collect()
}

/// Meaning of each shared option label, in the same order as [`default_options`].
pub fn option_explanations() -> Vec<(&'static str, &'static str)> {
    OPTION_EXPLANATIONS.to_vec()
}

/// Explanations that apply to `pillars`: the built-in ones when every
/// question offers exactly [`default_options`], otherwise none.
pub fn option_explanations_for(pillars: &[Pillar]) -> Vec<(&'static str, &'static str)> {
    let options = default_options();
    let shared = pillars
        .iter()
        .flat_map(|p| &p.questions)
        .all(|q| q.options == options);

    if shared {
        option_explanations()
    } else {
        Vec::new()
    }
}

fn question(id: &str, prompt: &str, options: &[String]) -> Question {
    Question {
        id: id.to_string(),
        prompt: prompt.to_string(),
        options: options.to_vec(),
    }
}

fn pillar(id: &str, name: &str, description: &str, questions: Vec<Question>) -> Pillar {
    Pillar {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        questions,
    }
}

/// Built-in pillars in display order. Every call returns a fresh copy.
pub fn get_pillars() -> Vec<Pillar> {
    let options = default_options();

    vec![
        pillar(
            "strategy",
            "Strategy",
            "How clearly the organization aligns value goals with execution.",
            vec![
                question(
                    "strategy_alignment",
                    "Value objectives are clearly articulated and communicated across teams.",
                    &options,
                ),
                question(
                    "strategy_prioritization",
                    "Initiatives are prioritized based on measurable impact and feasibility.",
                    &options,
                ),
            ],
        ),
        pillar(
            "data",
            "Data & Tooling",
            "Readiness of data, models, and platforms supporting decisions.",
            vec![
                question(
                    "data_quality",
                    "Operational and financial data is trustworthy and regularly validated.",
                    &options,
                ),
                question(
                    "tooling_modern",
                    "Analytics and decision-support tooling are modern, scalable, and well adopted.",
                    &options,
                ),
            ],
        ),
        pillar(
            "execution",
            "Execution",
            "Discipline around delivering initiatives and measuring outcomes.",
            vec![
                question(
                    "execution_delivery",
                    "Projects are delivered predictably with clear ownership and timelines.",
                    &options,
                ),
                question(
                    "execution_measurement",
                    "Benefits are tracked post-launch with feedback loops to improve future work.",
                    &options,
                ),
            ],
        ),
        pillar(
            "culture",
            "Culture & Change",
            "Engagement, incentives, and behaviors that sustain value-centric thinking.",
            vec![
                question(
                    "culture_adoption",
                    "Teams embrace value-centric decision making in daily routines.",
                    &options,
                ),
                question(
                    "culture_training",
                    "Enablement programs build literacy in data, finance, and change management.",
                    &options,
                ),
            ],
        ),
    ]
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    options: Option<Vec<String>>,
    #[serde(default)]
    pillars: Vec<PillarEntry>,
}

#[derive(Debug, Deserialize)]
struct PillarEntry {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    questions: Vec<QuestionEntry>,
}

#[derive(Debug, Deserialize)]
struct QuestionEntry {
    id: String,
    prompt: String,
    options: Option<Vec<String>>,
}

/// Parse a catalog from TOML. Questions without their own `options` inherit
/// the file's top-level list, or the built-in options when that is absent.
pub fn parse_catalog(content: &str) -> Result<Vec<Pillar>> {
    let file: CatalogFile = toml::from_str(content).map_err(|e| VcmError::TomlParseError {
        source_name: "catalog".to_string(),
        message: e.to_string(),
    })?;

    let shared = file.options.unwrap_or_else(default_options);
    let pillars: Vec<Pillar> = file
        .pillars
        .into_iter()
        .map(|entry| Pillar {
            id: entry.id,
            name: entry.name,
            description: entry.description,
            questions: entry
                .questions
                .into_iter()
                .map(|q| Question {
                    id: q.id,
                    prompt: q.prompt,
                    options: q.options.unwrap_or_else(|| shared.clone()),
                })
                .collect(),
        })
        .collect();

    validate_catalog(&pillars)?;
    Ok(pillars)
}

pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Pillar>> {
    let content = std::fs::read_to_string(&path)?;
    let pillars = parse_catalog(&content)?;
    tracing::info!(
        "Loaded catalog with {} pillars from {}",
        pillars.len(),
        path.as_ref().display()
    );
    Ok(pillars)
}

fn invalid(message: String) -> VcmError {
    VcmError::InvalidCatalog { message }
}

/// Structural checks the scorer relies on: non-empty pillars, unique ids,
/// and option lists without blanks or duplicates.
pub fn validate_catalog(pillars: &[Pillar]) -> Result<()> {
    if pillars.is_empty() {
        return Err(invalid("catalog has no pillars".to_string()));
    }

    let mut pillar_ids = HashSet::new();
    let mut question_ids = HashSet::new();

    for pillar in pillars {
        if pillar.id.trim().is_empty() {
            return Err(invalid(format!("pillar '{}' has an empty id", pillar.name)));
        }
        if !pillar_ids.insert(pillar.id.as_str()) {
            return Err(invalid(format!("duplicate pillar id '{}'", pillar.id)));
        }
        if pillar.questions.is_empty() {
            return Err(invalid(format!("pillar '{}' has no questions", pillar.id)));
        }

        for question in &pillar.questions {
            if !question_ids.insert(question.id.as_str()) {
                return Err(invalid(format!("duplicate question id '{}'", question.id)));
            }
            if question.options.is_empty() {
                return Err(invalid(format!("question '{}' has no options", question.id)));
            }
            let mut labels = HashSet::new();
            for label in &question.options {
                if label.trim().is_empty() || !labels.insert(label.as_str()) {
                    return Err(invalid(format!(
                        "question '{}' has a blank or repeated option '{}'",
                        question.id, label
                    )));
                }
            }
        }
    }

    Ok(())
}
