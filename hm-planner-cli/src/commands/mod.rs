mod config_cmd;
mod export;
mod inputs;
mod plan;
mod render;
mod saved;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use crate::planner::Locale;

pub use export::ExportCommand;
pub use inputs::{update_duration, PlanArgs, RUN_DAYS_RANGE, WEEKS_RANGE};
pub use plan::{GenerateCommand, PacesCommand};
pub use saved::{LoadCommand, SaveCommand};

#[derive(Parser)]
#[command(name = "hm-planner")]
#[command(about = "Half-marathon training plan generator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "HM_PLANNER_CONFIG")]
    config: Option<PathBuf>,

    /// Label language (zh-TW or en)
    #[arg(long, global = true)]
    locale: Option<Locale>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show estimated training paces for a 5K time
    Paces(PacesCommand),

    /// Generate and print a training plan
    Generate(GenerateCommand),

    /// Generate a plan and save it under a name
    Save(SaveCommand),

    /// Load a saved plan and print it
    Load(LoadCommand),

    /// List saved plans
    List,

    /// Export a plan as CSV
    Export(ExportCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigSubcommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Show current configuration
    Show,

    /// Edit configuration file
    Edit,

    /// Initialize configuration with defaults
    Init {
        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// Settings resolved once per invocation and handed to every command
pub struct AppContext {
    pub config: Config,
    pub config_file: PathBuf,
    pub locale: Locale,
}

impl AppContext {
    pub fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

impl Cli {
    fn context(&self) -> Result<AppContext> {
        let config_file = match &self.config {
            Some(path) => path.clone(),
            None => Config::config_file()?,
        };
        let config = Config::load_from(&config_file)?;
        let locale = self.locale.unwrap_or(config.ui.locale);

        if !config.ui.color {
            colored::control::set_override(false);
        }

        Ok(AppContext {
            config,
            config_file,
            locale,
        })
    }

    pub fn execute(self) -> Result<()> {
        if self.verbose {
            tracing::info!("Verbose mode enabled");
        }

        if let Commands::Completions { shell } = self.command {
            generate_completions(shell);
            return Ok(());
        }

        let ctx = self.context()?;

        match self.command {
            Commands::Paces(cmd) => cmd.execute(&ctx),
            Commands::Generate(cmd) => cmd.execute(&ctx),
            Commands::Save(cmd) => cmd.execute(&ctx),
            Commands::Load(cmd) => cmd.execute(&ctx),
            Commands::List => saved::list_plans(),
            Commands::Export(cmd) => cmd.execute(&ctx),
            Commands::Config(subcmd) => match subcmd {
                ConfigSubcommands::Show => config_cmd::show_config(&ctx),
                ConfigSubcommands::Edit => config_cmd::edit_config(&ctx.config_file),
                ConfigSubcommands::Init { force } => {
                    config_cmd::init_config(&ctx.config_file, force)
                }
            },
            Commands::Completions { .. } => Ok(()),
        }
    }
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
