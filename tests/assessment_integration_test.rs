use std::collections::BTreeMap;
use tempfile::TempDir;
use vcm_assess::core::initiatives::{band_for_score, BANDS, DEFAULT_INITIATIVE_LIMIT};
use vcm_assess::core::Pipeline;
use vcm_assess::{
    assess, compute_maturity_level, get_pillars, get_top_initiatives, overall_average,
    score_responses, AssessmentConfig, AssessmentEngine, FilePipeline, LocalStorage,
    MaturityLevel, Pillar, VcmError,
};

fn answer_every_question(pillars: &[Pillar], position: usize) -> BTreeMap<String, String> {
    pillars
        .iter()
        .flat_map(|p| &p.questions)
        .map(|q| (q.id.clone(), q.options[position].clone()))
        .collect()
}

#[test]
fn test_all_first_options_is_nascent() {
    let pillars = get_pillars();
    let answers = answer_every_question(&pillars, 0);

    let scores = score_responses(&answers, &pillars).unwrap();
    assert!(scores.values().all(|s| s.average == 1.0));

    let overall = overall_average(&scores);
    assert_eq!(overall, 1.0);
    assert_eq!(compute_maturity_level(overall), MaturityLevel::Nascent);

    for pillar in &pillars {
        assert_eq!(band_for_score(scores[&pillar.id].average), BANDS[0]);
        let initiatives = get_top_initiatives(&pillar.id, scores[&pillar.id].average, DEFAULT_INITIATIVE_LIMIT);
        assert!(!initiatives.is_empty());
        assert_eq!(
            initiatives,
            get_top_initiatives(&pillar.id, 0.0, DEFAULT_INITIATIVE_LIMIT)
        );
    }
}

#[test]
fn test_all_last_options_is_leading() {
    let pillars = get_pillars();
    let answers = answer_every_question(&pillars, 4);

    let results = assess(&answers, &pillars, None, DEFAULT_INITIATIVE_LIMIT).unwrap();
    assert!(results.pillar_scores.values().all(|s| s.average == 5.0));
    assert!(results
        .pillar_scores
        .values()
        .all(|s| s.responses.values().all(|score| *score == 5)));
    assert_eq!(results.overall_score, 5.0);
    assert_eq!(results.maturity_level, MaturityLevel::Leading);
    assert_eq!(results.initiatives["strategy"][0].title, "Adaptive capital allocation");
    assert_eq!(results.initiatives["data"][0].title, "Self-service enablement");
    assert_eq!(results.initiatives["execution"][0].title, "Portfolio optimization");
    assert_eq!(results.initiatives["culture"][0].title, "Communities of practice");
}

#[test]
fn test_each_missing_question_fails() {
    let pillars = get_pillars();
    for pillar in &pillars {
        for question in &pillar.questions {
            let mut answers = answer_every_question(&pillars, 2);
            answers.remove(&question.id);

            match score_responses(&answers, &pillars) {
                Err(VcmError::MissingAnswer { question_id }) => assert_eq!(question_id, question.id),
                other => panic!("expected missing answer for {}, got {:?}", question.id, other),
            }
        }
    }
}

#[test]
fn test_unrecognized_option_fails() {
    let pillars = get_pillars();
    let mut answers = answer_every_question(&pillars, 1);
    answers.insert("culture_adoption".to_string(), "Mostly".to_string());

    let err = assess(&answers, &pillars, None, 3).unwrap_err();
    assert!(err.to_string().contains("culture_adoption"));
    assert!(matches!(
        err,
        VcmError::UnrecognizedOption { ref question_id, ref value }
            if question_id == "culture_adoption" && value == "Mostly"
    ));
}

#[test]
fn test_limit_is_respected_everywhere() {
    for pillar in get_pillars() {
        for tenth in 0..=51 {
            let score = f64::from(tenth) / 10.0;
            for limit in 0..4 {
                assert!(get_top_initiatives(&pillar.id, score, limit).len() <= limit);
            }
        }
    }
}

const ANSWERS: &str = r#"
value_at_stake = 12345678.9

[answers]
strategy_alignment = "Optimized and automated"
strategy_prioritization = "Managed with metrics"
data_quality = "Defined and repeatable"
tooling_modern = "Defined and repeatable"
execution_delivery = "Ad hoc or limited"
execution_measurement = "Defined and repeatable"
culture_adoption = "Managed with metrics"
culture_training = "Managed with metrics"
"#;

#[test]
fn test_end_to_end_with_local_storage() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("reports");
    let answers_path = temp_dir.path().join("answers.toml");
    std::fs::write(&answers_path, ANSWERS).unwrap();

    let config = AssessmentConfig::from_toml_str(&format!(
        r#"
[output]
output_path = "{}"
output_formats = ["md", "json", "csv"]
"#,
        output_path.display()
    ))
    .unwrap();

    let storage = LocalStorage::new(output_path.display().to_string());
    let pipeline =
        FilePipeline::new(storage, config, answers_path.display().to_string()).unwrap();
    let engine = AssessmentEngine::new(pipeline);

    let run = engine.run().unwrap();
    assert_eq!(run.outputs.len(), 3);
    assert_eq!(run.results.overall_score, 3.5);

    let markdown = std::fs::read_to_string(output_path.join("vcm_assessment.md")).unwrap();
    // strategy 4.5, data 3.0, execution 2.5, culture 4.0
    assert!(markdown.contains("**Overall score:** 3.5"));
    assert!(markdown.contains("**Maturity level:** Established"));
    assert!(markdown.contains("**Estimated value at stake:** ₱12,345,679 (PHP)"));
    assert!(markdown.contains("## Execution\n**Average score:** 2.5"));
    assert!(markdown.contains("- **Pilot value tracking** — "));

    let json: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(output_path.join("vcm_assessment.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(json["overall_score"], 3.5);
    assert_eq!(json["pillar_scores"]["strategy"]["responses"]["strategy_alignment"], 5);

    let csv = std::fs::read_to_string(output_path.join("vcm_assessment.csv")).unwrap();
    assert_eq!(csv.lines().count(), 5);
}

#[test]
fn test_end_to_end_with_custom_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let catalog_path = temp_dir.path().join("catalog.toml");
    std::fs::write(
        &catalog_path,
        r#"
options = ["No", "Partly", "Yes"]

[[pillars]]
id = "security"
name = "Security"
description = "Basic hygiene."

[[pillars.questions]]
id = "security_mfa"
prompt = "MFA is enforced."

[[pillars.questions]]
id = "security_backups"
prompt = "Backups are tested."
"#,
    )
    .unwrap();

    let answers_path = temp_dir.path().join("answers.toml");
    std::fs::write(
        &answers_path,
        "[answers]\nsecurity_mfa = \"Yes\"\nsecurity_backups = \"Partly\"\n",
    )
    .unwrap();

    let config = AssessmentConfig::from_toml_str(&format!(
        "[catalog]\npath = \"{}\"\n",
        catalog_path.display()
    ))
    .unwrap();
    let storage = LocalStorage::new(temp_dir.path().display().to_string());
    let pipeline =
        FilePipeline::new(storage, config, answers_path.display().to_string()).unwrap();

    let sheet = pipeline.collect().unwrap();
    let results = pipeline.evaluate(&sheet).unwrap();
    assert_eq!(results.pillar_scores["security"].average, 2.5);
    assert_eq!(results.maturity_level, MaturityLevel::Emerging);
    // No initiatives are configured for this pillar.
    assert!(results.initiatives["security"].is_empty());

    let written = pipeline.publish(&results).unwrap();
    let markdown = std::fs::read_to_string(&written[0]).unwrap();
    assert!(markdown.contains("## Security\n**Average score:** 2.5\n\n"));
    assert!(!markdown.contains("Recommended initiatives"));
}
