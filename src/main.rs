use quire::sample::sample_report;
use quire::{DocumentSpec, PipelineBuilder, PipelineError};
use std::env;
use std::process::ExitCode;

const DEFAULT_OUTPUT: &str = "sample-report.pdf";

/// Writes the sample report, or a document loaded from JSON, to a PDF.
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() > 3 || args.iter().skip(1).any(|a| a == "-h" || a == "--help") {
        eprintln!("Composes a paginated document and writes it as PDF (or JSON).");
        eprintln!();
        let program = args.first().map_or("quire", String::as_str);
        eprintln!("Usage: {} [OUTPUT] [DOCUMENT.json]", program);
        eprintln!();
        eprintln!("Without DOCUMENT.json the built-in sample report is rendered.");
        eprintln!("OUTPUT defaults to {}.", DEFAULT_OUTPUT);
        return ExitCode::FAILURE;
    }

    match run(args.get(1).map(String::as_str), args.get(2).map(String::as_str)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(output: Option<&str>, document: Option<&str>) -> Result<(), PipelineError> {
    let output = output.unwrap_or(DEFAULT_OUTPUT);
    let document = match document {
        Some(path) => {
            log::info!("Loading document from {}", path);
            DocumentSpec::from_file(path)?
        }
        None => sample_report(),
    };

    let pipeline = PipelineBuilder::new().with_document(document).build()?;
    let summary = pipeline.generate_to_file(output)?;

    println!(
        "Generated {} ({} pages, {:.1} KB)",
        summary.path.display(),
        summary.pages,
        summary.bytes as f64 / 1024.0
    );
    Ok(())
}
