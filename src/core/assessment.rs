use crate::core::initiatives::get_top_initiatives;
use crate::core::scoring::{compute_maturity_level, overall_average, score_responses, AnswerLookup};
use crate::core::Pipeline;
use crate::domain::model::{normalize_value_at_stake, AssessmentResults, Pillar};
use crate::utils::error::Result;
use std::collections::BTreeMap;

/// Score answers against `pillars` and pick initiatives for every pillar.
pub fn assess<A>(
    answers: &A,
    pillars: &[Pillar],
    value_at_stake: Option<f64>,
    limit: usize,
) -> Result<AssessmentResults>
where
    A: AnswerLookup + ?Sized,
{
    let pillar_scores = score_responses(answers, pillars)?;
    let overall_score = overall_average(&pillar_scores);
    let maturity_level = compute_maturity_level(overall_score);

    let mut initiatives = BTreeMap::new();
    for (pillar_id, score) in &pillar_scores {
        initiatives.insert(
            pillar_id.clone(),
            get_top_initiatives(pillar_id, score.average, limit),
        );
    }

    Ok(AssessmentResults {
        pillar_scores,
        overall_score,
        maturity_level,
        initiatives,
        value_at_stake: normalize_value_at_stake(value_at_stake),
    })
}

/// What one engine run computed and where it was written.
#[derive(Debug, Clone)]
pub struct AssessmentRun {
    pub results: AssessmentResults,
    pub outputs: Vec<String>,
}

pub struct AssessmentEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> AssessmentEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<AssessmentRun> {
        tracing::info!("Collecting answers");
        let sheet = self.pipeline.collect()?;
        tracing::info!("Collected {} answers", sheet.answers.len());

        tracing::info!("Scoring assessment");
        let results = self.pipeline.evaluate(&sheet)?;
        tracing::info!(
            "Overall score {:.1} ({})",
            results.overall_score,
            results.maturity_level
        );

        tracing::info!("Publishing report");
        let outputs = self.pipeline.publish(&results)?;
        for output in &outputs {
            tracing::info!("Output saved to: {}", output);
        }

        Ok(AssessmentRun { results, outputs })
    }
}
