use clap::Parser;
use vcm_assess::config::toml_config::AssessmentSection;
use vcm_assess::core::catalog::{default_options, get_pillars, load_catalog, option_explanations_for};
use vcm_assess::core::report::{render_markdown, results_summary};
use vcm_assess::core::{ConfigProvider, Pipeline};
use vcm_assess::utils::error::{ErrorSeverity, VcmError};
use vcm_assess::utils::{logger, validation};
use vcm_assess::utils::validation::Validate;
use vcm_assess::{
    AssessmentConfig, AssessmentEngine, CliConfig, FilePipeline, LocalStorage, Pillar,
};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let mut config = match &cli.config {
        Some(path) => match AssessmentConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => AssessmentConfig::default(),
    };
    config.apply_cli_overrides(&cli);

    if config.json_logging() {
        logger::init_json_logger(config.verbose_logging());
    } else {
        logger::init_cli_logger(config.verbose_logging());
    }

    tracing::info!("Starting vcm-assess");
    tracing::debug!("Resolved config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if cli.list_questions {
        let pillars = match config.catalog_path() {
            Some(path) => load_catalog(path)?,
            None => get_pillars(),
        };
        print_questions(&config.assessment, &pillars);
        return Ok(());
    }

    let answers = match validation::validate_required_field("answers", &cli.answers)
        .and_then(|path| {
            validation::validate_file_extension("answers", path, &["toml"])?;
            Ok(path)
        }) {
        Ok(path) => std::path::absolute(path)?,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Pass an answer sheet with --answers (see the answers_template tool)");
            std::process::exit(1);
        }
    };

    if let Some(value) = cli.value_at_stake {
        if let Err(e) = validation::validate_non_negative("value_at_stake", value) {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = match FilePipeline::new(storage, config, answers.display().to_string()) {
        Ok(pipeline) => pipeline.value_at_stake(cli.value_at_stake),
        Err(e) => exit_on_error(&e),
    };

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - report is printed, no files are written");
        let sheet = pipeline.collect().unwrap_or_else(|e| exit_on_error(&e));
        let results = pipeline.evaluate(&sheet).unwrap_or_else(|e| exit_on_error(&e));
        println!("{}", render_markdown(pipeline.pillars(), &results)?);
        return Ok(());
    }

    let pillars = pipeline.pillars().to_vec();
    let engine = AssessmentEngine::new(pipeline);
    match engine.run() {
        Ok(run) => {
            println!("✅ Assessment completed successfully!");
            for line in results_summary(&pillars, &run.results)? {
                println!("{}", line);
            }
            for output in run.outputs {
                println!("📁 Output saved to: {}", output);
            }
        }
        Err(e) => exit_on_error(&e),
    }

    Ok(())
}

fn exit_on_error(e: &VcmError) -> ! {
    tracing::error!(
        "❌ Assessment failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

fn print_questions(assessment: &AssessmentSection, pillars: &[Pillar]) {
    let shared = default_options();

    println!("{}", assessment.name);
    if let Some(description) = &assessment.description {
        println!("{}", description);
    }

    let explanations = option_explanations_for(pillars);
    if !explanations.is_empty() {
        println!();
        println!("Answer options:");
        for (label, explanation) in explanations {
            println!("  - {}: {}", label, explanation);
        }
    }

    for pillar in pillars {
        println!();
        println!("{} ({})", pillar.name, pillar.id);
        if !pillar.description.is_empty() {
            println!("  {}", pillar.description);
        }
        for question in &pillar.questions {
            println!("  [{}] {}", question.id, question.prompt);
            if question.options != shared {
                println!("      options: {}", question.options.join(" | "));
            }
        }
    }
}
