use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::classifiers::Classifier;
use crate::core::TokensDocument;
use crate::models::ModelFile;
use crate::ui::cli::args::{ClassifyRequest, Command};
use crate::ui::types::build::{CliClassifier, build_classifier};
use crate::ui::types::choices::{FeatureChoice, OutputFormat};

#[derive(Debug, Serialize)]
struct ClassifyReport<'a> {
    class: &'a str,
    features: FeatureChoice,
    candidates: usize,
}

#[derive(Debug, Serialize)]
struct ScoreReport<'a> {
    class: &'a str,
    score: f64,
}

pub fn run(command: Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Classify(args) => run_classify(&args.into_request()?, out),
        Command::Score(args) => run_score(&args.into_request()?, out),
    }
}

pub fn run_classify(request: &ClassifyRequest, out: &mut impl Write) -> Result<()> {
    let (nb, classes, document) = prepare(request)?;

    let class = nb
        .classify(&classes, &document)
        .context("classification failed")?;
    info!(
        class = %class,
        candidates = classes.len(),
        tokens = document.len(),
        "classified document"
    );

    match request.format {
        OutputFormat::Text => writeln!(out, "{class}")?,
        OutputFormat::Json => {
            let report = ClassifyReport {
                class: &class,
                features: request.features,
                candidates: classes.len(),
            };
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

pub fn run_score(request: &ClassifyRequest, out: &mut impl Write) -> Result<()> {
    let (nb, classes, document) = prepare(request)?;

    let scored = nb.scores(&classes, &document).context("scoring failed")?;
    info!(candidates = scored.len(), tokens = document.len(), "scored document");

    match request.format {
        OutputFormat::Text => {
            for (class, score) in &scored {
                writeln!(out, "{class}\t{score}")?;
            }
        }
        OutputFormat::Json => {
            let report: Vec<ScoreReport> = scored
                .iter()
                .map(|(class, score)| ScoreReport {
                    class,
                    score: *score,
                })
                .collect();
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn prepare(request: &ClassifyRequest) -> Result<(CliClassifier, Vec<String>, TokensDocument)> {
    let model = ModelFile::load(&request.model)
        .with_context(|| format!("failed to load model {}", request.model.display()))?;
    let nb = build_classifier(request.features, model);

    let classes = if request.classes.is_empty() {
        nb.model().labels()
    } else {
        request.classes.clone()
    };

    let document = request
        .document
        .read()
        .context("failed to read document")?;

    Ok((nb, classes, document))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::cli::args::DocumentSource;
    use std::path::Path;
    use tempfile::NamedTempFile;

    const MODEL: &str = r#"{
        "kind": "counts",
        "classes": [
            {"label": "pos", "documents": 3, "features": {"good": 4, "great": 2, "fine": 1}},
            {"label": "neg", "documents": 3, "features": {"bad": 4, "awful": 2, "fine": 1}}
        ]
    }"#;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().expect("tempfile");
        f.write_all(contents.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    fn request(model: &Path, text: &str) -> ClassifyRequest {
        ClassifyRequest {
            model: model.to_path_buf(),
            classes: Vec::new(),
            features: FeatureChoice::Tokens,
            document: DocumentSource::Text(text.to_string()),
            format: OutputFormat::Text,
        }
    }

    fn output(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn classify_prints_the_winning_class() {
        let model = write_temp(MODEL);
        let req = request(model.path(), "good great fine");
        assert_eq!(output(|o| run_classify(&req, o)), "pos\n");

        let req = request(model.path(), "awful bad");
        assert_eq!(output(|o| run_classify(&req, o)), "neg\n");
    }

    #[test]
    fn explicit_classes_limit_and_order_candidates() {
        let model = write_temp(MODEL);
        // neutral text: both classes tie, so the first candidate wins
        let mut req = request(model.path(), "fine");
        assert_eq!(output(|o| run_classify(&req, o)), "pos\n");
        req.classes = vec!["neg".into(), "pos".into()];
        assert_eq!(output(|o| run_classify(&req, o)), "neg\n");
    }

    #[test]
    fn classify_json_report() {
        let model = write_temp(MODEL);
        let mut req = request(model.path(), "bad");
        req.format = OutputFormat::Json;
        let out = output(|o| run_classify(&req, o));
        let v: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(v["class"], "neg");
        assert_eq!(v["features"], "tokens");
        assert_eq!(v["candidates"], 2);
    }

    #[test]
    fn score_lists_every_class_in_order() {
        let model = write_temp(MODEL);
        let req = request(model.path(), "good");
        let out = output(|o| run_score(&req, o));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("pos\t"));
        assert!(lines[1].starts_with("neg\t"));

        let pos: f64 = lines[0].split('\t').nth(1).unwrap().parse().unwrap();
        let neg: f64 = lines[1].split('\t').nth(1).unwrap().parse().unwrap();
        assert!(pos > neg);
    }

    #[test]
    fn score_json_report() {
        let model = write_temp(MODEL);
        let mut req = request(model.path(), "good bad");
        req.format = OutputFormat::Json;
        let out = output(|o| run_score(&req, o));
        let v: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        let arr = v.as_array().unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[0]["class"], "pos");
        assert!(arr[0]["score"].as_f64().unwrap() < 0.0);
    }

    #[test]
    fn document_can_come_from_a_file() {
        let model = write_temp(MODEL);
        let doc = write_temp("awful\nbad bad\n");
        let mut req = request(model.path(), "");
        req.document = DocumentSource::File(doc.path().to_path_buf());
        assert_eq!(output(|o| run_classify(&req, o)), "neg\n");
    }

    #[test]
    fn unknown_class_fails_with_context() {
        let model = write_temp(MODEL);
        let mut req = request(model.path(), "good");
        req.classes = vec!["pos".into(), "meh".into()];
        let err = run_classify(&req, &mut Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "classification failed");
        let root = err.root_cause().to_string();
        assert!(root.contains("meh"), "{root}");
    }

    #[test]
    fn missing_model_fails_with_context() {
        let req = request(Path::new("/definitely/not/here.json"), "good");
        let err = run_classify(&req, &mut Vec::new()).unwrap_err();
        assert!(err.to_string().starts_with("failed to load model"), "{err}");
    }
}
