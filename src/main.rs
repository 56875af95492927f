//! Resume optimizer: ATS keyword scoring and AI improvement recommendations

mod cli;
mod config;
mod error;
mod input;
mod llm;
mod output;
mod pipeline;
mod processing;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::{Config, OutputFormat};
use error::{Result, ResumeOptimizerError};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use output::formatter::ReportGenerator;
use pipeline::{JobInput, Optimizer};
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Optimize {
            resume,
            job,
            job_text,
            output,
            save,
            no_llm,
        } => {
            info!("Starting resume optimization");

            // Validate input files
            cli::validate_file_extension(&resume, &["pdf"])
                .map_err(|e| ResumeOptimizerError::InvalidInput(format!("Resume file: {}", e)))?;

            let job_input = match (job, job_text) {
                (Some(path), None) => {
                    cli::validate_file_extension(&path, &["txt", "md"]).map_err(|e| {
                        ResumeOptimizerError::InvalidInput(format!("Job description file: {}", e))
                    })?;
                    Some(JobInput::File(path))
                }
                (None, Some(text)) => Some(JobInput::Inline(text)),
                _ => None,
            };

            // Missing inputs are an explicit error rather than a silent no-op
            let job_input = pipeline::require_inputs(&resume, job_input)?;

            // Parse output format
            let output_format =
                cli::parse_output_format(&output).map_err(ResumeOptimizerError::InvalidInput)?;

            let mut optimizer = Optimizer::new(config.clone())?;

            if output_format == OutputFormat::Console {
                println!("🚀 Resume Optimizer");
                println!("📄 Resume: {}", resume.display());
                match &job_input {
                    JobInput::File(path) => println!("💼 Job Description: {}", path.display()),
                    JobInput::Inline(_) => println!("💼 Job Description: (inline text)"),
                }
                if no_llm {
                    println!("⚠️  AI recommendations disabled");
                } else if !optimizer.has_credential() {
                    println!("⚠️  No API key found; recommendations will be unavailable");
                }
            }

            let spinner = if output_format == OutputFormat::Console {
                let pb = ProgressBar::new_spinner();
                pb.set_style(
                    ProgressStyle::with_template("{spinner} {msg}")
                        .expect("Invalid spinner template"),
                );
                pb.set_message("Optimizing resume...");
                pb.enable_steady_tick(Duration::from_millis(100));
                Some(pb)
            } else {
                None
            };

            let result = optimizer.optimize(&resume, job_input, no_llm).await;

            if let Some(pb) = spinner {
                pb.finish_and_clear();
            }

            let report = result?;

            let generator = ReportGenerator::new(config.output.color_output);
            println!("{}", generator.render(&report, output_format)?);

            if let Some(save_path) = save {
                generator.save(&report, output_format, &save_path)?;
                info!("Report saved to {}", save_path.display());
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Model: {}", config.api.model);
                println!("Max Tokens: {}", config.api.max_tokens);
                println!("Temperature: {}", config.api.temperature);
                println!("Request Timeout: {}s", config.api.request_timeout_secs);
                println!("API Key File: {}", config.api.key_file.display());
                println!("Output Format: {:?}", config.output.format);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                let default_config = Config::default();
                default_config.save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}
