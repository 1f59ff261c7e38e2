mod cli;

use clap::Parser;
use std::io::Read;
use std::path::Path;
use uva::matrix::{catalog, lint, JsonDirectoryStore, MatrixProvider};
use uva::types::config::{ReportFormat, UvaConfig, MAX_DECIMALS};
use uva::{config, report, request, telemetry, UvaError};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32, UvaError> {
    let cli = cli::Cli::parse();
    let cfg = config::load_config(&std::env::current_dir()?)?;
    let level = telemetry::verbosity_level(cli.verbose, cli.quiet).unwrap_or(cfg.log_level());
    telemetry::init(level)?;

    match cli.command {
        cli::Commands::Calculate(cmd) => calculate(cmd, &cfg, cli.quiet),
        cli::Commands::Vehicles(cmd) => {
            let paths = cfg.data_paths_with(cmd.data_dir.as_deref());
            let store = JsonDirectoryStore::new(&paths.matrix_dir);
            let vehicles = catalog::vehicle_status(&paths.data_dir, &store)?;

            if cmd.json {
                println!("{}", serde_json::to_string_pretty(&vehicles)?);
                return Ok(exit_code::SUCCESS);
            }
            if vehicles.is_empty() {
                println!("vehicles: none found in {}", paths.data_dir.display());
                return Ok(exit_code::SUCCESS);
            }
            for vehicle in &vehicles {
                let status = if vehicle.has_data { "data" } else { "no data" };
                println!("{}\t{}\t{}", vehicle.id, vehicle.name, status);
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Validate(cmd) => {
            let paths = cfg.data_paths_with(cmd.data_dir.as_deref());
            let store = JsonDirectoryStore::new(&paths.matrix_dir);
            let matrix = store.load(&cmd.vehicle)?;
            let findings = lint::lint_matrix(&matrix);

            if findings.is_empty() {
                println!("validate: {} entries, no findings", matrix.len());
                return Ok(exit_code::SUCCESS);
            }

            for finding in &findings {
                let level = if finding.blocking { "BLOCKING" } else { "WARN" };
                println!("[{}] {}: {}", level, finding.id, finding.title);
                println!("  {}", finding.body);
            }

            if findings.iter().any(|finding| finding.blocking) {
                Ok(exit_code::BLOCKING)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
    }
}

fn calculate(cmd: cli::CalculateCommand, cfg: &UvaConfig, quiet: bool) -> Result<i32, UvaError> {
    let content = if cmd.request == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(&cmd.request)?
    };

    let mut payload = request::parse_request(&content)?;
    if let Some(vehicle) = cmd.vehicle {
        payload.vehicle = vehicle;
    }

    let decimals = cmd.decimals.unwrap_or_else(|| cfg.decimals());
    if decimals > MAX_DECIMALS {
        return Err(UvaError::InvalidRequest(format!(
            "--decimals must be between 0 and {MAX_DECIMALS}"
        )));
    }
    let format = cmd
        .format
        .map(ReportFormat::from)
        .unwrap_or_else(|| cfg.report_format());

    let paths = cfg.data_paths_with(cmd.data_dir.as_deref());
    let store = JsonDirectoryStore::new(paths.matrix_dir);
    let analysis = request::handle(&store, &payload)?;
    println!("{}", report::render(&analysis, format, decimals)?);

    if !analysis.result.meta.validation_summary.has_selections {
        if !quiet {
            eprintln!("warning: no UV selections for vehicle {}", analysis.vehicle);
        }
        return Ok(exit_code::WARNINGS);
    }
    Ok(exit_code::SUCCESS)
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
