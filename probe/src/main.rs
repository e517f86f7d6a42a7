use std::fs;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use probe::config::ProbeConfig;
use probe::eval::evaluate_all;
use probe::io;
use probe::io::cli::Cli;
use probe::io::ext_query::ExtQueryFile;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config: ProbeConfig = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            ProbeConfig::default()
        }
        Some(config_file) => {
            io::read_json(&config_file).context("incorrect config file format")?
        }
    };

    info!("[MAIN] Successfully parsed ProbeConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .with_context(|| format!("invalid input file name: {:?}", args.input_file))?;

    if !args.output_folder.exists() {
        fs::create_dir_all(&args.output_folder).with_context(|| {
            format!("could not create output folder: {:?}", args.output_folder)
        })?;
    }

    let query_file: ExtQueryFile = io::read_json(&args.input_file)?;
    info!(
        "[MAIN] Read {} queries from {:?}",
        query_file.queries.len(),
        args.input_file
    );

    let report = evaluate_all(&query_file, &config);

    let report_path = args.output_folder.join(format!("report_{input_file_stem}.json"));
    io::write_json(&report, &report_path, config.pretty)
}
