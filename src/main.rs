use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;

use doclabel::{
    format_confidence, ClassifierForm, ClassifyClient, ConfidenceBand, DocumentFile, Panel,
};

/// Classify a document with the remote classification service.
///
/// Provide the document text inline, or point at a file to upload.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Document text to classify
    text: Option<String>,

    /// Upload a file instead of inline text
    #[arg(short, long, value_name = "PATH", conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Service endpoint (overrides DOCLABEL_ENDPOINT and the default)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Probe the service health endpoint and exit
    #[arg(long)]
    health: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();

    let client = match args.endpoint {
        Some(endpoint) => ClassifyClient::new(endpoint),
        None => ClassifyClient::new_default(),
    };
    info!("Using classification service at {}", client.base_url());

    if args.health {
        let health = client.health().await?;
        println!("Service status: {}", health.status);
        return Ok(ExitCode::SUCCESS);
    }

    let mut form = ClassifierForm::new();
    if let Some(path) = &args.file {
        let file = DocumentFile::load(path).await?;
        info!("Loaded '{}' ({} bytes)", file.name, file.bytes.len());
        form.select_file(file);
    } else if let Some(text) = args.text {
        form.set_text(text);
    }

    if form.can_submit() {
        eprintln!("Classifying...");
    }
    form.submit(&client).await;

    match form.view() {
        Panel::Result(result) => {
            let band = ConfidenceBand::from_confidence(result.confidence);
            println!("Document type: {}", result.label);
            println!(
                "Confidence:    {} ({})",
                format_confidence(result.confidence),
                band
            );
            Ok(ExitCode::SUCCESS)
        }
        Panel::Error(error) => {
            eprintln!("Error: {}", error);
            Ok(ExitCode::FAILURE)
        }
        // A completed submission always lands on a result or an error
        Panel::Empty | Panel::Busy => Ok(ExitCode::SUCCESS),
    }
}
