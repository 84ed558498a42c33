//! Initiative suggestions keyed by pillar and score band.
//!
//! The content is illustrative; replace with organization-specific playbooks
//! when available.

use crate::domain::model::{Initiative, ScoreBand};
use std::collections::HashMap;
use std::sync::LazyLock;

pub const DEFAULT_INITIATIVE_LIMIT: usize = 3;

/// Shared by every pillar. The top band reaches past 5 to absorb rounding at
/// the maximum average.
pub const BANDS: [ScoreBand; 4] = [
    ScoreBand::new(0.0, 2.0),
    ScoreBand::new(2.0, 3.0),
    ScoreBand::new(3.0, 4.0),
    ScoreBand::new(4.0, 5.1),
];

/// Per pillar, one initiative list per entry of [`BANDS`].
pub struct InitiativeTable {
    entries: HashMap<&'static str, [Vec<Initiative>; 4]>,
}

static DEFAULT_TABLE: LazyLock<InitiativeTable> = LazyLock::new(InitiativeTable::builtin);

impl InitiativeTable {
    pub fn shared() -> &'static InitiativeTable {
        &DEFAULT_TABLE
    }

    fn builtin() -> Self {
        let mut entries = HashMap::new();

        entries.insert(
            "strategy",
            [
                vec![
                    Initiative::new(
                        "Define value north star",
                        "Document 3-5 measurable value outcomes and circulate them across leadership.",
                    ),
                    Initiative::new(
                        "Decision cadence",
                        "Establish a monthly forum to prioritize work by value and risk.",
                    ),
                ],
                vec![Initiative::new(
                    "Roadmap by value",
                    "Score backlog items by impact vs. effort and publish a quarterly roadmap.",
                )],
                vec![Initiative::new(
                    "KPIs with ownership",
                    "Assign accountable owners for value KPIs and track progress in a shared dashboard.",
                )],
                vec![Initiative::new(
                    "Adaptive capital allocation",
                    "Rebalance funding each quarter based on realized benefits and new opportunities.",
                )],
            ],
        );

        entries.insert(
            "data",
            [
                vec![Initiative::new(
                    "Data inventory",
                    "List critical datasets, owners, and known gaps to inform remediation priorities.",
                )],
                vec![
                    Initiative::new(
                        "Quality baselines",
                        "Implement basic data quality checks on the most used tables or reports.",
                    ),
                    Initiative::new(
                        "Tooling uplift",
                        "Pilot a modern analytics stack with one high-value use case.",
                    ),
                ],
                vec![Initiative::new(
                    "Model governance",
                    "Introduce versioning, testing, and monitoring for key analytical models.",
                )],
                vec![Initiative::new(
                    "Self-service enablement",
                    "Broaden governed data access and training for power users across teams.",
                )],
            ],
        );

        entries.insert(
            "execution",
            [
                vec![Initiative::new(
                    "Delivery playbook",
                    "Standardize intake templates, stage gates, and RACI to reduce ambiguity.",
                )],
                vec![Initiative::new(
                    "Pilot value tracking",
                    "Run a small project with explicit benefit hypotheses and simple tracking.",
                )],
                vec![Initiative::new(
                    "Benefits realization",
                    "Embed benefit tracking into project close-out and post-launch reviews.",
                )],
                vec![Initiative::new(
                    "Portfolio optimization",
                    "Continuously reprioritize initiatives based on realized vs. forecast benefits.",
                )],
            ],
        );

        entries.insert(
            "culture",
            [
                vec![Initiative::new(
                    "Narrative for change",
                    "Share success stories linking value outcomes to daily work to build momentum.",
                )],
                vec![Initiative::new(
                    "Targeted enablement",
                    "Offer short trainings on value framing, data literacy, and change management.",
                )],
                vec![Initiative::new(
                    "Incentives alignment",
                    "Align performance goals and recognition with value-centric behaviors.",
                )],
                vec![Initiative::new(
                    "Communities of practice",
                    "Sustain peer-led forums to share learnings and continuously improve.",
                )],
            ],
        );

        Self { entries }
    }

    /// Initiatives for the band containing `score`, capped at `limit` and in
    /// authored order. Unknown pillars yield an empty list.
    pub fn top_initiatives(&self, pillar_id: &str, score: f64, limit: usize) -> Vec<Initiative> {
        let Some(bands) = self.entries.get(pillar_id) else {
            tracing::debug!("No initiatives configured for pillar {}", pillar_id);
            return Vec::new();
        };

        bands[band_index(score)].iter().take(limit).cloned().collect()
    }

    pub fn has_pillar(&self, pillar_id: &str) -> bool {
        self.entries.contains_key(pillar_id)
    }
}

fn band_index(score: f64) -> usize {
    BANDS
        .iter()
        .position(|band| band.contains(score))
        .unwrap_or(BANDS.len() - 1)
}

/// First band containing `score`; falls back to the highest band.
pub fn band_for_score(score: f64) -> ScoreBand {
    BANDS[band_index(score)]
}

pub fn get_top_initiatives(pillar_id: &str, score: f64, limit: usize) -> Vec<Initiative> {
    InitiativeTable::shared().top_initiatives(pillar_id, score, limit)
}
