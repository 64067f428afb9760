use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use classifier::api::Modality;

pub struct ApiProgress {
    bar: ProgressBar,
}

impl ApiProgress {
    fn spinner(template: &str, message: String, tick: Duration) -> Self {
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template(template)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ");
        bar.set_style(style);
        bar.set_message(message);
        bar.enable_steady_tick(tick);

        Self { bar }
    }

    pub fn new_classification(modality: Modality, labels: usize) -> Self {
        Self::spinner(
            "🚀 {msg} {spinner:.green}",
            format!(
                "Classifying {modality} with {} against {labels} labels...",
                modality.model().to_uppercase()
            ),
            Duration::from_millis(80),
        )
    }

    pub fn new_download(path: &str) -> Self {
        Self::spinner(
            "📥 {msg} {spinner:.cyan}",
            format!("Fetching sample {path}..."),
            Duration::from_millis(100),
        )
    }

    pub fn new_health() -> Self {
        Self::spinner(
            "⏳ {msg} {spinner:.yellow}",
            "Checking service health...".to_string(),
            Duration::from_millis(120),
        )
    }

    pub fn finish_and_clear(&self) {
        self.bar.finish_and_clear();
    }
}
