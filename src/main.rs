//! Resume tailor: retrieval-backed resume tailoring tool

use clap::Parser;
use colored::Colorize;
use log::{error, info};
use resume_tailor::cli::{self, Cli, Commands, ConfigAction};
use resume_tailor::engine::TailorPipeline;
use resume_tailor::error::{Result, ResumeTailorError};
use resume_tailor::model::TailoredResume;
use resume_tailor::output::ResumeRenderer;
use resume_tailor::Config;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // API keys may live in a local .env file
    dotenvy::dotenv().ok();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, mut config: Config) -> Result<()> {
    match command {
        Commands::Tailor {
            candidate,
            job,
            output,
            html,
            refresh,
            min_roles,
            min_bullets,
        } => {
            cli::validate_file_extension(&candidate, &["json"])
                .map_err(|e| ResumeTailorError::InvalidInput(format!("Candidate file: {}", e)))?;
            cli::validate_file_extension(&job, &["txt", "md", "markdown", "pdf"])
                .map_err(|e| ResumeTailorError::InvalidInput(format!("Job description: {}", e)))?;

            if let Some(min_roles) = min_roles {
                config.backfill.min_roles = min_roles;
            }
            if let Some(min_bullets) = min_bullets {
                config.backfill.min_bullets = min_bullets;
            }

            println!("🎯 Tailoring resume");
            println!("👤 Candidate data: {}", candidate.display());
            println!("💼 Job description: {}", job.display());
            if refresh {
                println!("🔄 Ignoring cached draft");
            }

            let pipeline = TailorPipeline::new(config);
            let report = pipeline.run(&candidate, &job, refresh).await?;

            if report.from_cache {
                println!("📦 Reused cached draft (backfill re-applied)");
            } else {
                println!(
                    "🧠 Indexed {} bullets, retrieved a pool of {}",
                    report.corpus_size, report.pool_size
                );
            }

            ResumeRenderer::write_json(&report.resume, &output)?;
            println!("✅ Resume written to {}", output.display().to_string().green());

            if let Some(html_path) = html {
                ResumeRenderer::write_html(&report.resume, &html_path)?;
                println!("🌐 HTML written to {}", html_path.display().to_string().green());
            }

            let blocks = report.resume.experience.blocks();
            println!("\n📊 Experience section:");
            for block in blocks {
                println!(
                    "  • {} at {} — {} bullet{}",
                    block.title.bold(),
                    block.company,
                    block.bullets.len(),
                    if block.bullets.len() == 1 { "" } else { "s" }
                );
            }
        }

        Commands::Render { resume, output } => {
            cli::validate_file_extension(&resume, &["json"])
                .map_err(|e| ResumeTailorError::InvalidInput(format!("Resume file: {}", e)))?;

            let content = std::fs::read_to_string(&resume)?;
            let resume_data: TailoredResume = serde_json::from_str(&content)?;

            ResumeRenderer::write_html(&resume_data, &output)?;
            info!("rendered {} to {}", resume.display(), output.display());
            println!("🌐 HTML written to {}", output.display().to_string().green());
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Embedding model: {}", config.embedding.model);
                println!(
                    "Generation: {} via {}",
                    config.generation.model, config.generation.api_base
                );
                println!("Retrieval pool size: {}", config.retrieval.pool_size);
                println!(
                    "Backfill minimums: {} roles, {} bullets per role",
                    config.backfill.min_roles, config.backfill.min_bullets
                );
                println!(
                    "Draft cache: {} ({})",
                    config.cache.dir.display(),
                    if config.cache.enabled { "enabled" } else { "disabled" }
                );
            }

            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save()?;
                println!("✅ Configuration reset to defaults");
            }
        },
    }

    Ok(())
}
