//! Answer sheets: the TOML file a respondent fills in.

use crate::domain::model::{AnswerSheet, Pillar};
use crate::utils::error::{Result, VcmError};
use std::collections::HashSet;
use std::fmt::Write;

pub fn parse_answer_sheet(content: &str) -> Result<AnswerSheet> {
    toml::from_str(content).map_err(|e| VcmError::TomlParseError {
        source_name: "answer sheet".to_string(),
        message: e.to_string(),
    })
}

/// Answer ids that no question in `pillars` asks for.
pub fn unknown_answer_ids<'a>(sheet: &'a AnswerSheet, pillars: &[Pillar]) -> Vec<&'a str> {
    let known: HashSet<&str> = pillars.iter().flat_map(|p| p.question_ids()).collect();
    sheet
        .answers
        .keys()
        .map(String::as_str)
        .filter(|id| !known.contains(id))
        .collect()
}

fn quoted(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

/// Answer sheet with every question set to its first option and the prompts
/// and option labels as comments.
pub fn render_answer_template(pillars: &[Pillar]) -> String {
    let mut out = String::new();
    out.push_str("# Value-Centered Maturity answer sheet\n");
    out.push_str("# Replace each answer with one of the listed options.\n\n");
    out.push_str("# Optional rough estimate of the financial upside, in PHP.\n");
    out.push_str("value_at_stake = 0.0\n\n");
    out.push_str("[answers]\n");

    for pillar in pillars {
        let _ = writeln!(out, "\n# {}: {}", pillar.name, pillar.description);
        for question in &pillar.questions {
            let _ = writeln!(out, "# {}", question.prompt);
            let _ = writeln!(out, "#   options: {}", question.options.join(" | "));
            let first = question.options.first().map(String::as_str).unwrap_or_default();
            let _ = writeln!(out, "{} = {}", question.id, quoted(first));
        }
    }

    out
}
