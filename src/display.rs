use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Table};
use itertools::Itertools;

use classifier::{
    api::{ClassificationReport, HealthReport},
    samples::Sample,
};

pub fn classification_table(report: &ClassificationReport, top: Option<usize>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["#", "Label", "Score", "Similarity"]);

    let ranked = report.ranked();
    let shown = top.unwrap_or(ranked.len());
    for (rank, result) in ranked.into_iter().take(shown).enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1).set_alignment(CellAlignment::Right),
            Cell::new(&result.label),
            Cell::new(format!("{:.2}%", result.score * 100.0)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.4}", result.similarity)).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}

pub fn metrics_line(report: &ClassificationReport) -> String {
    let metrics = &report.metrics;
    let mut parts = vec![
        format!("input {:.1} ms", metrics.input_encoding_ms),
        format!("text {:.1} ms", metrics.text_encoding_ms),
        format!("similarity {:.1} ms", metrics.similarity_ms),
    ];
    if metrics.model_load_ms > 0.0 {
        parts.push(format!("model load {:.1} ms", metrics.model_load_ms));
    }

    format!(
        "{} candidates in {:.1} ms ({})",
        metrics.num_candidates,
        metrics.total_inference_ms,
        parts.join(", ")
    )
}

pub fn health_summary(report: &HealthReport) -> String {
    let loaded = |flag: bool| if flag { "loaded" } else { "not loaded" };
    format!(
        "Status: {}\nCLIP: {}\nCLAP: {}",
        report.status,
        loaded(report.clip_loaded),
        loaded(report.clap_loaded)
    )
}

pub fn samples_table<'a>(samples: impl IntoIterator<Item = &'a Sample>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Path", "Kind", "Description"]);

    for sample in samples
        .into_iter()
        .sorted_by_key(|sample| (sample.modality.to_string(), sample.path))
    {
        table.add_row(vec![
            sample.path.to_string(),
            sample.modality.to_string(),
            sample.description.to_string(),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use classifier::api::ClassificationResult;
    use serde_json::json;

    fn report() -> ClassificationReport {
        ClassificationResult::new(json!({
            "results": [
                {"label": "traffic", "score": 0.15, "similarity": 0.05},
                {"label": "dog barking", "score": 0.85, "similarity": 0.42}
            ],
            "metrics": {
                "model_load_ms": 850.0,
                "input_encoding_ms": 30.0,
                "text_encoding_ms": 5.0,
                "similarity_ms": 0.1,
                "total_inference_ms": 35.1,
                "num_candidates": 2
            }
        }))
        .report()
        .unwrap()
    }

    #[test]
    fn test_table_ranks_best_first() {
        let rendered = classification_table(&report(), None).to_string();
        let dog = rendered.find("dog barking").unwrap();
        let traffic = rendered.find("traffic").unwrap();
        assert!(dog < traffic);
        assert!(rendered.contains("85.00%"));
    }

    #[test]
    fn test_table_honours_top() {
        let rendered = classification_table(&report(), Some(1)).to_string();
        assert!(rendered.contains("dog barking"));
        assert!(!rendered.contains("traffic"));
    }

    #[test]
    fn test_metrics_line_mentions_model_load() {
        let line = metrics_line(&report());
        assert!(line.starts_with("2 candidates in 35.1 ms"));
        assert!(line.contains("model load 850.0 ms"));
    }

    #[test]
    fn test_health_summary() {
        let summary = health_summary(&HealthReport {
            status: "healthy".to_string(),
            clip_loaded: true,
            clap_loaded: false,
        });
        assert_eq!(summary, "Status: healthy\nCLIP: loaded\nCLAP: not loaded");
    }
}
