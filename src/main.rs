mod args;
mod display;
mod progress;

use crate::args::{Args, ClassifyArgs, Commands, InputArgs, SampleCommand};
use crate::progress::ApiProgress;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use classifier::{
    api::{ApiClient, ApiClientError, Modality},
    file::NamedFile,
    samples::SAMPLES,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Api(#[from] ApiClientError),

    #[error("[E020] Couldn't read {path}: {source}\n\nSuggestions:\n  • Check that the file exists\n  • Verify you have read permission")]
    ReadInput {
        path: Utf8PathBuf,
        source: std::io::Error,
    },

    #[error("[E021] Couldn't write into {dir}: {source}\n\nSuggestions:\n  • Check that the directory exists\n  • Verify you have write permission")]
    WriteSample {
        dir: Utf8PathBuf,
        source: std::io::Error,
    },

    #[error("[E022] {path} is an {actual} sample, use the `{actual}` command to classify it")]
    WrongModality { path: String, actual: Modality },

    #[error("[E023] Unexpected response from server: {0}")]
    UnexpectedResponse(#[from] serde_json::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let Args {
        url,
        timeout,
        command,
    } = Args::parse();

    let mut http = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        http = http.timeout(timeout);
    }
    let api = ApiClient::with_client(url, http.build().map_err(CliError::from)?)?;

    match command {
        Commands::Image(args) => classify(&api, Modality::Image, args).await?,
        Commands::Audio(args) => classify(&api, Modality::Audio, args).await?,
        Commands::Health { json } => health(&api, json).await?,
        Commands::Sample(SampleCommand::List) => {
            println!("{}", display::samples_table(SAMPLES));
        }
        Commands::Sample(SampleCommand::Fetch { path, output }) => {
            let written = fetch_sample(&api, &path, &output).await?;
            println!("Saved {path} to {written}");
        }
    }

    Ok(())
}

async fn load_input(
    api: &ApiClient,
    modality: Modality,
    input: InputArgs,
) -> Result<NamedFile, CliError> {
    if let Some(path) = input.sample {
        if let Some(actual) = Modality::from_sample_path(&path) {
            if actual != modality {
                return Err(CliError::WrongModality { path, actual });
            }
        }

        let progress = ApiProgress::new_download(&path);
        let file = api.fetch_sample_file(&path).await;
        progress.finish_and_clear();
        return Ok(file?);
    }

    // clap guarantees one of the two is present
    let path = input.file.unwrap_or_default();
    let file = NamedFile::from_path(&path).await;
    file.map_err(|source| CliError::ReadInput { path, source })
}

async fn classify(api: &ApiClient, modality: Modality, args: ClassifyArgs) -> Result<(), CliError> {
    let ClassifyArgs {
        input,
        labels,
        top,
        json,
    } = args;
    let labels = labels.0;

    let file = load_input(api, modality, input).await?;
    log::info!(
        "Classifying {} ({} bytes) against {} labels",
        file.name(),
        file.len(),
        labels.len()
    );

    let progress = ApiProgress::new_classification(modality, labels.len());
    let result = api.classify(modality, file, &labels).await;
    progress.finish_and_clear();
    let result = result?;

    if json {
        println!("{}", serde_json::to_string_pretty(result.as_value())?);
        return Ok(());
    }

    let report = result.report()?;
    println!("{}", display::classification_table(&report, top));
    println!("{}", display::metrics_line(&report));
    Ok(())
}

async fn health(api: &ApiClient, json: bool) -> Result<(), CliError> {
    let progress = ApiProgress::new_health();
    let status = api.check_health().await;
    progress.finish_and_clear();
    let status = status?;

    if json {
        println!("{}", serde_json::to_string_pretty(status.as_value())?);
    } else {
        println!("{}", display::health_summary(&status.report()?));
    }
    Ok(())
}

async fn fetch_sample(
    api: &ApiClient,
    path: &str,
    output: &Utf8Path,
) -> Result<Utf8PathBuf, CliError> {
    let progress = ApiProgress::new_download(path);
    let file = api.fetch_sample_file(path).await;
    progress.finish_and_clear();
    let file = file?;

    let written = file
        .write_into(output)
        .await
        .map_err(|source| CliError::WriteSample {
            dir: output.to_owned(),
            source,
        })?;

    Ok(Utf8PathBuf::try_from(written).unwrap_or_else(|err| {
        Utf8PathBuf::from(err.into_path_buf().to_string_lossy().into_owned())
    }))
}
