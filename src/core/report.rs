//! Downloadable renderings of an assessment: markdown summary, CSV score
//! table and the JSON results bundle.

use crate::core::initiatives::band_for_score;
use crate::domain::model::{AssessmentResults, Initiative, MaturityLevel, Pillar, PillarScore};
use crate::utils::error::{Result, VcmError};
use std::collections::BTreeMap;

pub const REPORT_TITLE: &str = "# Value-Centered Maturity Assessment";
pub const DISCLAIMER: &str = "These recommendations are illustrative placeholders. Replace them with your organization's guidance before sharing broadly.";
const SEPARATOR: &str = "\n---\n";

/// Whole-unit amount with comma thousands separators, e.g. `1,250,000`.
pub fn format_currency_amount(value: f64) -> String {
    let rounded = format!("{:.0}", value);
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}", sign, grouped)
}

pub fn value_at_stake_line(value: f64) -> String {
    format!(
        "**Estimated value at stake:** ₱{} (PHP)",
        format_currency_amount(value)
    )
}

fn lookup<'a, T>(table: &'a BTreeMap<String, T>, pillar_id: &str, name: &str) -> Result<&'a T> {
    table.get(pillar_id).ok_or_else(|| VcmError::UnknownPillar {
        pillar_id: pillar_id.to_string(),
        table: name.to_string(),
    })
}

fn format_pillar_section(pillar: &Pillar, score: &PillarScore, initiatives: &[Initiative]) -> String {
    let mut lines = vec![
        format!("## {}", pillar.name),
        format!("**Average score:** {:.1}", score.average),
    ];

    if !initiatives.is_empty() {
        lines.push("**Recommended initiatives:**".to_string());
        for item in initiatives {
            lines.push(format!("- **{}** — {}", item.title, item.description));
        }
    }

    lines.join("\n")
}

/// Markdown summary in catalog order. Fails if a catalog pillar has no
/// score or initiative entry, since that means the inputs came from
/// different catalogs.
pub fn build_markdown_report(
    pillars: &[Pillar],
    pillar_scores: &BTreeMap<String, PillarScore>,
    maturity_level: MaturityLevel,
    overall_score: f64,
    value_at_stake: Option<f64>,
    initiatives: &BTreeMap<String, Vec<Initiative>>,
) -> Result<String> {
    let mut sections = vec![REPORT_TITLE.to_string(), String::new()];
    sections.push(format!("**Overall score:** {:.1}", overall_score));
    sections.push(format!("**Maturity level:** {}", maturity_level));

    if let Some(value) = value_at_stake {
        sections.push(value_at_stake_line(value));
    }

    sections.push(SEPARATOR.to_string());

    for pillar in pillars {
        let score = lookup(pillar_scores, &pillar.id, "score")?;
        let pillar_initiatives = lookup(initiatives, &pillar.id, "initiative")?;
        sections.push(format_pillar_section(pillar, score, pillar_initiatives));
        sections.push(String::new());
    }

    sections.push(SEPARATOR.to_string());
    sections.push(DISCLAIMER.to_string());

    Ok(sections.join("\n"))
}

pub fn render_markdown(pillars: &[Pillar], results: &AssessmentResults) -> Result<String> {
    build_markdown_report(
        pillars,
        &results.pillar_scores,
        results.maturity_level,
        results.overall_score,
        results.value_at_stake,
        &results.initiatives,
    )
}

/// One row per pillar with its band and recommended initiative titles.
pub fn build_score_table_csv(pillars: &[Pillar], results: &AssessmentResults) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "pillar_id",
        "pillar_name",
        "average_score",
        "score_band",
        "recommended_initiatives",
    ])?;

    for pillar in pillars {
        let score = lookup(&results.pillar_scores, &pillar.id, "score")?;
        let titles: Vec<&str> = lookup(&results.initiatives, &pillar.id, "initiative")?
            .iter()
            .map(|i| i.title.as_str())
            .collect();

        let average = format!("{:.2}", score.average);
        let band = band_for_score(score.average).to_string();
        let recommended = titles.join("; ");

        writer.write_record([
            pillar.id.as_str(),
            pillar.name.as_str(),
            average.as_str(),
            band.as_str(),
            recommended.as_str(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| VcmError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| VcmError::IoError(std::io::Error::other(e)))
}

pub const NO_INITIATIVES_NOTICE: &str = "No initiatives configured for this score band yet.";

/// Plain-text results view for a terminal: headline, optional value at
/// stake, then each pillar's average in catalog order.
pub fn results_summary(pillars: &[Pillar], results: &AssessmentResults) -> Result<Vec<String>> {
    let mut lines = vec![format!(
        "Overall score: {:.1} — Maturity level: {}",
        results.overall_score, results.maturity_level
    )];

    if let Some(value) = results.value_at_stake {
        lines.push(format!(
            "Estimated value at stake: ₱{} (PHP)",
            format_currency_amount(value)
        ));
    }

    for pillar in pillars {
        let score = lookup(&results.pillar_scores, &pillar.id, "score")?;
        lines.push(format!("{}: {:.1}", pillar.name, score.average));
        if lookup(&results.initiatives, &pillar.id, "initiative")?.is_empty() {
            lines.push(format!("  {}", NO_INITIATIVES_NOTICE));
        }
    }

    Ok(lines)
}

pub fn render_results_json(results: &AssessmentResults) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}
