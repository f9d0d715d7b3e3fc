//! Candidate scorer: multi-criteria candidate assessment tool

use candidate_scorer::cli::{self, Cli, Commands, ConfigAction};
use candidate_scorer::config::ScoringConfig;
use candidate_scorer::error::{Result, ScorerError};
use candidate_scorer::input::InputManager;
use candidate_scorer::output::{
    error_json, ConsoleFormatter, JsonFormatter, OutputFormat, OutputFormatter,
};
use candidate_scorer::reference::ReferenceData;
use candidate_scorer::scoring::analyzer::CandidateAnalyzer;
use candidate_scorer::storage::{AssessmentStore, JsonFileStore};
use clap::Parser;
use log::{error, info};
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match ScoringConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run_command(command: Commands, config: ScoringConfig) -> Result<()> {
    match command {
        Commands::Analyze {
            candidate,
            reference_dir,
            output,
            no_color,
            save,
            id,
        } => {
            let format =
                cli::parse_output_format(&output).map_err(ScorerError::InvalidInput)?;

            let reference = match &reference_dir {
                Some(dir) => ReferenceData::load(dir)?,
                None => ReferenceData::builtin(),
            };

            let mut input_manager = InputManager::new();
            let record = input_manager.load_record(&candidate)?;

            let analyzer = CandidateAnalyzer::new(reference, config)?;
            let assessment = match analyzer.analyze(&record) {
                Ok(assessment) => assessment,
                Err(e) => {
                    // The JSON surface reports fatal failures as an error
                    // envelope rather than a partial result.
                    if format == OutputFormat::Json {
                        println!("{}", error_json(&e.to_string()));
                    }
                    return Err(e);
                }
            };

            let formatter: Box<dyn OutputFormatter> = match format {
                OutputFormat::Console => Box::new(ConsoleFormatter::new(!no_color)),
                OutputFormat::Json => Box::new(JsonFormatter::new(true)),
            };
            println!("{}", formatter.format(&assessment)?);

            if let Some(dir) = save {
                let store = JsonFileStore::new(dir)?;
                let id = id.unwrap_or_else(|| {
                    candidate
                        .file_stem()
                        .map(|s| s.to_string_lossy().to_string())
                        .unwrap_or_else(|| "assessment".to_string())
                });
                store.save(&id, &record, &assessment)?;
                info!("Assessment persisted under id {}", id);
            }

            Ok(())
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let content = toml::to_string_pretty(&config).map_err(|e| {
                    ScorerError::Configuration(format!("Failed to serialize config: {}", e))
                })?;
                println!("{}", content);
                Ok(())
            }
            ConfigAction::Reset => {
                let path = ScoringConfig::config_path();
                ScoringConfig::default().save(&path)?;
                println!("Configuration reset: {}", path.display());
                Ok(())
            }
            ConfigAction::Path => {
                println!("{}", ScoringConfig::config_path().display());
                Ok(())
            }
        },
    }
}
