use clap::Parser;
use vcm_assess::config::answers::render_answer_template;
use vcm_assess::core::catalog::{get_pillars, load_catalog};
use vcm_assess::utils::logger;

#[derive(Parser)]
#[command(name = "answers_template")]
#[command(about = "Print an answer sheet to fill in for vcm-assess")]
struct Args {
    /// Replacement question catalog (TOML)
    #[arg(long)]
    catalog: Option<String>,

    /// Write the template here instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let pillars = match &args.catalog {
        Some(path) => load_catalog(path)?,
        None => get_pillars(),
    };
    let template = render_answer_template(&pillars);

    match &args.output {
        Some(path) => {
            std::fs::write(path, template)?;
            tracing::info!("📁 Template saved to: {}", path);
        }
        None => print!("{}", template),
    }

    Ok(())
}
