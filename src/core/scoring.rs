//! Ordinal scoring of answers and aggregation into maturity indicators.

use crate::domain::model::{MaturityLevel, Pillar, PillarScore, Question};
use crate::utils::error::{Result, VcmError};
use std::collections::{BTreeMap, HashMap};

/// First option scores 1, the last scores the length of the option list.
pub fn option_to_score(option: &str, question: &Question) -> Result<u32> {
    question
        .options
        .iter()
        .position(|candidate| candidate == option)
        .map(|position| position as u32 + 1)
        .ok_or_else(|| VcmError::UnrecognizedOption {
            question_id: question.id.clone(),
            value: option.to_string(),
        })
}

/// Score every question of every pillar. Each question must have an answer;
/// a gap fails instead of counting as a low score.
pub fn score_responses<A>(answers: &A, pillars: &[Pillar]) -> Result<BTreeMap<String, PillarScore>>
where
    A: AnswerLookup + ?Sized,
{
    let mut pillar_scores = BTreeMap::new();

    for pillar in pillars {
        let mut responses = BTreeMap::new();
        for question in &pillar.questions {
            let option = answers
                .answer_for(&question.id)
                .ok_or_else(|| VcmError::MissingAnswer {
                    question_id: question.id.clone(),
                })?;
            responses.insert(question.id.clone(), option_to_score(option, question)?);
        }

        let total: u32 = responses.values().sum();
        let average = f64::from(total) / responses.len() as f64;
        tracing::debug!("Pillar {} averaged {:.2}", pillar.id, average);

        pillar_scores.insert(
            pillar.id.clone(),
            PillarScore {
                pillar_id: pillar.id.clone(),
                average,
                responses,
            },
        );
    }

    Ok(pillar_scores)
}

/// Mean of the pillar averages, so every pillar weighs the same regardless of
/// its question count. Zero when nothing has been scored.
pub fn overall_average(pillar_scores: &BTreeMap<String, PillarScore>) -> f64 {
    if pillar_scores.is_empty() {
        return 0.0;
    }
    let sum: f64 = pillar_scores.values().map(|score| score.average).sum();
    sum / pillar_scores.len() as f64
}

pub fn compute_maturity_level(overall_score: f64) -> MaturityLevel {
    if overall_score < 2.0 {
        MaturityLevel::Nascent
    } else if overall_score < 3.0 {
        MaturityLevel::Emerging
    } else if overall_score < 4.0 {
        MaturityLevel::Established
    } else {
        MaturityLevel::Leading
    }
}

/// Lookup of a submitted answer by question id.
pub trait AnswerLookup {
    fn answer_for(&self, question_id: &str) -> Option<&str>;
}

impl AnswerLookup for BTreeMap<String, String> {
    fn answer_for(&self, question_id: &str) -> Option<&str> {
        self.get(question_id).map(String::as_str)
    }
}

impl AnswerLookup for HashMap<String, String> {
    fn answer_for(&self, question_id: &str) -> Option<&str> {
        self.get(question_id).map(String::as_str)
    }
}
