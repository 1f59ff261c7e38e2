use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use uva::types::config::ReportFormat as ConfigReportFormat;

#[derive(Parser)]
#[command(
    name = "uva",
    version,
    about = "User value analysis scoring for vehicle feature changes"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Calculate(CalculateCommand),
    Vehicles(VehiclesCommand),
    Validate(ValidateCommand),
}

#[derive(Args)]
pub struct CalculateCommand {
    /// Request JSON file, or `-` to read stdin
    pub request: PathBuf,
    #[arg(long)]
    pub vehicle: Option<String>,
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    #[arg(long)]
    pub decimals: Option<u8>,
}

#[derive(Args)]
pub struct VehiclesCommand {
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ValidateCommand {
    pub vehicle: String,
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

impl From<ReportFormat> for ConfigReportFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Json => ConfigReportFormat::Json,
            ReportFormat::Md => ConfigReportFormat::Md,
        }
    }
}
