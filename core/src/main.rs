use std::fs;
use std::io::{self, BufRead, Write};
use std::process;

use clap::Parser;
use log::{error, info};

use corpuscan_core::cli::{Cli, OutputFormat};
use corpuscan_core::{
    AnalysisClient, CorpusError, ImagePipeline, ModelConfig, OpenAiVisionClient, RawUpload,
    Result, TextReport, ANALYSIS_DISCLAIMER,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    if let Err(e) = run(cli).await {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let bytes = fs::read(&cli.file)?;
    let filename = cli
        .file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let upload = RawUpload::new(bytes, filename, None);

    let prepared = ImagePipeline::prepare(&upload)?;
    info!(
        "prepared {:?}: {}x{} -> preview {}x{}",
        cli.file,
        prepared.display.width(),
        prepared.display.height(),
        prepared.preview.width(),
        prepared.preview.height()
    );

    if let Some(report) = &prepared.anonymization {
        match cli.format {
            OutputFormat::Text => println!("{}", TextReport::new(report)),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::to_string_pretty(report).unwrap_or_default()
                );
            }
        }
    }

    let config = ModelConfig::load(&cli.config);
    let request = ImagePipeline::assemble(&prepared, &cli.context, cli.model.as_deref(), &config)?;

    if !cli.yes && !confirm_send()? {
        println!("Aborted; nothing was sent.");
        return Ok(());
    }

    let api_key = std::env::var(&cli.api_key_env).map_err(|_| {
        CorpusError::Config(format!(
            "environment variable {} is not set",
            cli.api_key_env
        ))
    })?;
    let client = match cli.base_url.as_deref() {
        Some(url) => OpenAiVisionClient::with_base_url(&api_key, url),
        None => OpenAiVisionClient::new(&api_key),
    };

    // A single attempt; on failure the user decides whether to run again.
    let report = client.analyze(&request).await?;

    match cli.format {
        OutputFormat::Text => {
            println!("Analysis Results ({})", request.model);
            println!("----------------");
            println!("{}", report.content());
            println!();
            println!("{}", ANALYSIS_DISCLAIMER);
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "model": request.model,
                "analysis": report.content(),
                "disclaimer": ANALYSIS_DISCLAIMER,
            });
            println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
        }
    }

    Ok(())
}

/// Asks the user to confirm that the upload and context are free of
/// patient-identifying information before anything leaves the machine
fn confirm_send() -> Result<bool> {
    print!(
        "Confirm that the upload and context contain no patient-identifying \
         information. Send for analysis? [y/N] "
    );
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let answer = line.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
