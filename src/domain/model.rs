use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A maturity question answered by picking one label from `options`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: Vec<String>,
}

/// Thematic grouping of questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pillar {
    pub id: String,
    pub name: String,
    pub description: String,
    pub questions: Vec<Question>,
}

impl Pillar {
    pub fn question_ids(&self) -> impl Iterator<Item = &str> {
        self.questions.iter().map(|q| q.id.as_str())
    }
}

/// Aggregated score for a single pillar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PillarScore {
    pub pillar_id: String,
    pub average: f64,
    /// Question id to ordinal score, 1 for the first option.
    pub responses: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Initiative {
    pub title: String,
    pub description: String,
}

impl Initiative {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// Half-open score interval `[lower, upper)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBand {
    pub lower: f64,
    pub upper: f64,
}

impl ScoreBand {
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    pub fn contains(&self, score: f64) -> bool {
        self.lower <= score && score < self.upper
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.1}, {:.1})", self.lower, self.upper)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum MaturityLevel {
    Nascent,
    Emerging,
    Established,
    Leading,
}

impl MaturityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaturityLevel::Nascent => "Nascent",
            MaturityLevel::Emerging => "Emerging",
            MaturityLevel::Established => "Established",
            MaturityLevel::Leading => "Leading",
        }
    }
}

impl fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional financial upside entered alongside the answers.
///
/// Zero, negative and non-finite figures count as not provided.
pub fn normalize_value_at_stake(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// One submitted questionnaire, as read from an answer sheet file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerSheet {
    #[serde(default)]
    pub value_at_stake: Option<f64>,
    #[serde(default)]
    pub answers: BTreeMap<String, String>,
}

impl AnswerSheet {
    pub fn value_at_stake(&self) -> Option<f64> {
        normalize_value_at_stake(self.value_at_stake)
    }
}

/// Everything computed for one submission. Never persisted beyond the
/// artifacts rendered from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentResults {
    pub pillar_scores: BTreeMap<String, PillarScore>,
    pub overall_score: f64,
    pub maturity_level: MaturityLevel,
    pub initiatives: BTreeMap<String, Vec<Initiative>>,
    pub value_at_stake: Option<f64>,
}
