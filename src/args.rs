use camino::Utf8PathBuf;
use std::time::Duration;
use url::Url;

use classifier::{api::DEFAULT_BASE_URL, labels::parse_labels};

/// Candidate labels as given on the command line.
#[derive(Clone, Debug)]
pub struct LabelList(pub Vec<String>);

fn labels_value_parser(raw: &str) -> Result<LabelList, String> {
    parse_labels(raw).map(LabelList).map_err(|err| err.to_string())
}

fn timeout_value_parser(raw: &str) -> Result<Duration, String> {
    let secs: f64 = raw
        .parse()
        .map_err(|_| format!("Invalid timeout: {raw}, expected a number of seconds"))?;
    if secs.is_finite() && secs > 0.0 {
        Ok(Duration::from_secs_f64(secs))
    } else {
        Err("Timeout must be a positive number of seconds".to_string())
    }
}

#[derive(clap::Parser)]
#[command(name = "edge-classify")]
#[command(version)]
#[command(about = "Zero-shot image and audio classification against a CLIP/CLAP server")]
#[command(long_about = "
A command-line client for a CLIP & CLAP inference server.

Uploads an image or audio clip together with candidate text labels and shows
how well each label matches. Labels are given either as a JSON array or as a
comma-separated list.

Examples:
  # Classify a local image
  edge-classify image --file cat.jpg --labels 'a cat,a dog,a car'

  # Classify one of the server's audio samples
  edge-classify audio --sample audio/dog_bark.wav --labels '[\"dog barking\", \"traffic\"]'

  # Check that the models are loaded
  edge-classify --url http://gpu-box:8000 health

  # Download a sample
  edge-classify sample fetch images/mountain.jpg --output ./samples
")]
pub struct Args {
    /// Classification server URL
    #[arg(
        long,
        global = true,
        value_name = "URL",
        value_hint = clap::ValueHint::Url,
        value_parser = Url::parse,
        default_value = DEFAULT_BASE_URL
    )]
    pub url: Url,

    /// Request timeout in seconds (no timeout by default)
    #[arg(long, global = true, value_name = "SECS", value_parser = timeout_value_parser)]
    pub timeout: Option<Duration>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand)]
pub enum Commands {
    /// Classify an image with CLIP
    Image(ClassifyArgs),

    /// Classify an audio clip with CLAP
    Audio(ClassifyArgs),

    /// Report server health and which models are loaded
    Health {
        /// Print the raw server response
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// List or download the server's sample files
    #[command(subcommand)]
    Sample(SampleCommand),
}

#[derive(clap::Args)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Candidate labels: JSON array or comma-separated list
    #[arg(long, value_name = "LABELS", value_parser = labels_value_parser)]
    pub labels: LabelList,

    /// Only show the N best matching labels
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Print the raw server response
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(clap::Args)]
#[group(required = true, multiple = false)]
pub struct InputArgs {
    /// Local file to upload
    #[arg(long, value_name = "PATH", value_hint = clap::ValueHint::FilePath)]
    pub file: Option<Utf8PathBuf>,

    /// Server sample to classify, e.g. images/cat.jpg
    #[arg(long, value_name = "SAMPLE")]
    pub sample: Option<String>,
}

#[derive(clap::Subcommand)]
pub enum SampleCommand {
    /// List known sample files
    List,

    /// Download a sample file
    Fetch {
        /// Sample path on the server, e.g. audio/dog_bark.wav
        path: String,

        /// Directory to write the file into
        #[arg(
            long,
            value_name = "DIR",
            value_hint = clap::ValueHint::DirPath,
            default_value = "."
        )]
        output: Utf8PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_image_command() {
        let args = Args::try_parse_from([
            "edge-classify",
            "image",
            "--file",
            "cat.jpg",
            "--labels",
            "cat, dog",
            "--top",
            "1",
        ])
        .unwrap();

        assert_eq!(args.url.as_str(), "http://localhost:8000/");
        match args.command {
            Commands::Image(classify) => {
                assert_eq!(classify.input.file.as_deref().map(|p| p.as_str()), Some("cat.jpg"));
                assert_eq!(classify.labels.0, vec!["cat", "dog"]);
                assert_eq!(classify.top, Some(1));
            }
            _ => panic!("Expected image command"),
        }
    }

    #[test]
    fn test_file_and_sample_are_exclusive() {
        let result = Args::try_parse_from([
            "edge-classify",
            "audio",
            "--file",
            "a.wav",
            "--sample",
            "audio/music.wav",
            "--labels",
            "music",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_input_is_required() {
        let result = Args::try_parse_from(["edge-classify", "image", "--labels", "cat"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_url_and_timeout() {
        let args = Args::try_parse_from([
            "edge-classify",
            "health",
            "--url",
            "http://gpu-box:9000",
            "--timeout",
            "2.5",
        ])
        .unwrap();

        assert_eq!(args.url.as_str(), "http://gpu-box:9000/");
        assert_eq!(args.timeout, Some(Duration::from_millis(2500)));
    }

    #[test]
    fn test_rejects_invalid_timeout() {
        assert!(timeout_value_parser("0").is_err());
        assert!(timeout_value_parser("soon").is_err());
    }
}
