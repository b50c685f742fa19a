#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "mortgage-calc")]
#[command(about = "Annuity mortgage payment calculator")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: cli::Command,

    #[arg(long, global = true, help = "TOML file with mortgage defaults")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,
}
