pub mod cli;
pub mod date_detect;
pub mod export;
pub mod heuristics;
pub mod io_utils;
pub mod mapping;
pub mod observation;
pub mod place_data;
pub mod place_detect;
pub mod table;
pub mod tmcf;
pub mod validate;

use std::path::Path;
use std::{env, sync::OnceLock};

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{LevelFilter, info, warn};

use crate::cli::{Cli, Commands};
use crate::mapping::Mapping;
use crate::observation::ValueMap;
use crate::place_detect::PlaceDetector;

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("tmcf_wizard", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Detect(args) => handle_detect(&args),
        Commands::Check(args) => handle_check(&args),
        Commands::Preview(args) => handle_preview(&args),
        Commands::Generate(args) => handle_generate(&args),
    }
}

fn handle_detect(args: &cli::DetectArgs) -> Result<()> {
    let delimiter = io_utils::resolve_input_delimiter(&args.input, args.delimiter);
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    info!(
        "Detecting columns in '{}' with delimiter '{}'",
        args.input.display(),
        printable_delimiter(delimiter)
    );
    let dataset = io_utils::read_dataset(&args.input, delimiter, encoding)?;
    let detector = PlaceDetector::new();
    let predictions = heuristics::get_predictions(&dataset, &detector);
    if predictions.is_empty() {
        warn!("No place or date columns detected; the mapping must be filled in by hand");
    }
    match &args.mapping {
        Some(path) => {
            predictions.save(path)?;
            info!(
                "Predicted {} mapped thing(s) written to {:?}",
                predictions.len(),
                path
            );
        }
        None => {
            let json =
                serde_json::to_string_pretty(&predictions).context("Serializing mapping")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn handle_check(args: &cli::CheckArgs) -> Result<()> {
    let mapping = Mapping::load(&args.mapping)?;
    let issues = validate::check_mapping_messages(&mapping);
    if issues.is_empty() {
        info!("Mapping {:?} passes all checks", args.mapping);
        return Ok(());
    }
    for issue in &issues {
        eprintln!("{issue}");
    }
    bail!("Mapping has {} issue(s)", issues.len());
}

fn handle_preview(args: &cli::PreviewArgs) -> Result<()> {
    let delimiter = io_utils::resolve_input_delimiter(&args.input, args.delimiter);
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    let dataset = io_utils::read_dataset(&args.input, delimiter, encoding)?;
    let mapping = Mapping::load(&args.mapping)?;
    ensure_valid(&mapping)?;
    let value_map = load_value_map(args.value_map.as_deref())?;
    let observations = observation::generate_row_observations(&mapping, &dataset, &value_map);
    let limit = args.limit.unwrap_or(usize::MAX);
    let mut emitted = 0usize;
    for (row_number, row_observations) in &observations {
        if emitted >= limit {
            break;
        }
        for obs in row_observations {
            println!("{row_number}: {}", observation::observation_to_string(obs));
        }
        emitted += 1;
    }
    info!(
        "{} row(s) produced {} observation(s)",
        observations.len(),
        observations.values().map(Vec::len).sum::<usize>()
    );
    Ok(())
}

fn handle_generate(args: &cli::GenerateArgs) -> Result<()> {
    let delimiter = io_utils::resolve_input_delimiter(&args.input, args.delimiter);
    let input_encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    let output_encoding = io_utils::resolve_encoding(args.output_encoding.as_deref())?;
    let dataset = io_utils::read_dataset(&args.input, delimiter, input_encoding)?;
    let mapping = Mapping::load(&args.mapping)?;
    ensure_valid(&mapping)?;

    let template = tmcf::generate_tmcf(&mapping);
    match &args.output {
        Some(path) => {
            std::fs::write(path, &template)
                .with_context(|| format!("Writing template to {path:?}"))?;
            info!("Template written to {:?}", path);
        }
        None => print!("{template}"),
    }

    if let Some(metadata_out) = &args.metadata_out {
        let predictions = match &args.predictions {
            Some(path) => Mapping::load(path)?,
            None => Mapping::new(),
        };
        let metadata = export::generate_translation_metadata_json(&predictions, &mapping)?;
        std::fs::write(metadata_out, metadata)
            .with_context(|| format!("Writing translation metadata to {metadata_out:?}"))?;
        info!("Translation metadata written to {:?}", metadata_out);
    }

    let value_map = load_value_map(args.value_map.as_deref())?;
    if let Some(csv_out) = &args.csv_out {
        if export::should_generate_csv(&dataset, &dataset, &value_map) {
            let output_delimiter =
                io_utils::resolve_output_delimiter(Some(csv_out.as_path()), None, delimiter);
            export::generate_csv(
                &dataset,
                &args.input,
                Some(csv_out.as_path()),
                &value_map,
                delimiter,
                output_delimiter,
                output_encoding,
            )?;
            info!("Cleaned CSV written to {:?}", csv_out);
        } else {
            info!("Input CSV needs no cleaning; skipping {:?}", csv_out);
        }
    }
    Ok(())
}

fn ensure_valid(mapping: &Mapping) -> Result<()> {
    let issues = validate::check_mapping_messages(mapping);
    if issues.is_empty() {
        return Ok(());
    }
    for issue in &issues {
        eprintln!("{issue}");
    }
    bail!("Mapping has {} issue(s); fix them before generating", issues.len());
}

fn load_value_map(path: Option<&Path>) -> Result<ValueMap> {
    let Some(path) = path else {
        return Ok(ValueMap::new());
    };
    let file = std::fs::File::open(path)
        .with_context(|| format!("Opening value map file {path:?}"))?;
    serde_json::from_reader(std::io::BufReader::new(file))
        .with_context(|| format!("Parsing value map file {path:?}"))
}

pub(crate) fn printable_delimiter(delimiter: u8) -> String {
    match delimiter {
        b',' => ",".to_string(),
        b'\t' => "\\t".to_string(),
        b'\n' => "\\n".to_string(),
        other => (other as char).to_string(),
    }
}
