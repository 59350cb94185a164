//! CLI interface for the resume tailor

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-tailor")]
#[command(about = "AI-powered resume tailoring tool")]
#[command(long_about = "Tailor historical resume bullets to a job description using \
embedding retrieval, generative rewriting, and role-aware backfill")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Tailor a resume to a job description
    Tailor {
        /// Path to the candidate data file (JSON)
        #[arg(short, long)]
        candidate: PathBuf,

        /// Path to the job description file (TXT, MD, PDF)
        #[arg(short, long)]
        job: PathBuf,

        /// Where to write the assembled resume (JSON)
        #[arg(short, long, default_value = "tailored_resume.json")]
        output: PathBuf,

        /// Also render the resume as HTML to this path
        #[arg(long)]
        html: Option<PathBuf>,

        /// Ignore any cached draft and recompute from scratch
        #[arg(long)]
        refresh: bool,

        /// Minimum number of roles in the final resume
        #[arg(long)]
        min_roles: Option<usize>,

        /// Minimum number of bullets per role
        #[arg(long)]
        min_bullets: Option<usize>,
    },

    /// Render an assembled resume JSON file as HTML
    Render {
        /// Path to an assembled resume file (JSON)
        #[arg(short, long)]
        resume: PathBuf,

        /// Where to write the HTML
        #[arg(short, long, default_value = "resume.html")]
        output: PathBuf,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
