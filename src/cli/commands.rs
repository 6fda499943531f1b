//! Command implementations for the morph-filter CLI.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use crate::cli::args::*;
use crate::config::FilterConfig;
use crate::filter::MorphFilter;
use crate::observe::LogObserver;
use crate::record::JsonRecordConverter;
use crate::schema::Schema;

/// Execute a CLI command.
pub fn execute_command(args: MorphFilterArgs) -> Result<()> {
    match &args.command {
        Command::Plan(plan_args) => plan(plan_args),
        Command::Run(run_args) => run(run_args),
    }
}

/// Print the output schema.
fn plan(args: &PlanArgs) -> Result<()> {
    let filter = load_filter(&args.config)?;
    let input = load_schema(&args.schema)?;

    let output = filter.plan(&input)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{json}");

    Ok(())
}

/// Stream JSON Lines records through the filter.
fn run(args: &RunArgs) -> Result<()> {
    let filter = load_filter(&args.config)?;
    let input_schema = load_schema(&args.schema)?;

    let label = args
        .config
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "morph-filter".to_string());
    let mut stream = filter.open(&input_schema, Arc::new(LogObserver::new(label)))?;

    let reader_converter = JsonRecordConverter::new(input_schema);
    let writer_converter = JsonRecordConverter::new(stream.output_schema().clone());

    let mut reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Cannot open input {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };
    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Cannot create output {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let start_time = Instant::now();
    let batch_size = args.batch_size as usize;
    let mut pages = 0usize;

    loop {
        let page = reader_converter.read_page(&mut reader, batch_size)?;
        if page.is_empty() {
            break;
        }
        let output = stream.process(&page)?;
        writer_converter.write_page(&mut writer, &output)?;
        pages += 1;
    }
    writer.flush()?;

    let records = stream.finish();
    info!(
        "Transformed {records} records in {pages} pages ({:.2?})",
        start_time.elapsed()
    );

    Ok(())
}

/// Load and validate a filter configuration file.
fn load_filter(path: &Path) -> Result<MorphFilter> {
    let config = FilterConfig::from_path(path)
        .with_context(|| format!("Cannot load configuration {}", path.display()))?;
    let filter = MorphFilter::new(config)
        .with_context(|| format!("Invalid configuration {}", path.display()))?;
    Ok(filter)
}

/// Load an input schema file.
fn load_schema(path: &Path) -> Result<Schema> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Cannot read schema {}", path.display()))?;
    let schema: Schema = serde_json::from_str(&content)
        .with_context(|| format!("Invalid schema {}", path.display()))?;
    Ok(schema)
}
