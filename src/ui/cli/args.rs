use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use clap::{ArgAction, ArgGroup, Args, Parser, Subcommand, ValueHint};
use strum::IntoEnumIterator;

use crate::core::TokensDocument;
use crate::ui::types::choices::{FeatureChoice, OutputFormat};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Multinomial Naive Bayes classification against a JSON model"
)]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG wins
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the most likely class for a document
    Classify(ClassifyArgs),
    /// Print the log-likelihood score of every candidate class
    Score(ClassifyArgs),
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("document").required(true).args(["text", "input"])))]
pub struct ClassifyArgs {
    /// JSON model file (kind "table" or "counts")
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub model: PathBuf,

    /// Candidate class, repeat for several (default: every class in the model)
    #[arg(long = "class", value_name = "CLASS")]
    pub classes: Vec<String>,

    /// Feature extraction strategy (tokens, exclude-class)
    #[arg(
        long,
        long_help = FeatureChoice::long_help(),
        default_value = "tokens",
        value_name = "STRATEGY",
        value_parser = parse_kind::<FeatureChoice>
    )]
    pub features: FeatureChoice,

    /// Document text to classify
    #[arg(long, value_name = "TEXT")]
    pub text: Option<String>,

    /// File holding the document to classify
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(
        long,
        default_value = "text",
        value_name = "FORMAT",
        value_parser = parse_kind::<OutputFormat>
    )]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DocumentSource {
    Text(String),
    File(PathBuf),
}

impl DocumentSource {
    pub fn read(&self) -> Result<TokensDocument> {
        match self {
            DocumentSource::Text(text) => Ok(TokensDocument::from_text(text)),
            DocumentSource::File(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                Ok(TokensDocument::from_text(&text))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClassifyRequest {
    pub model: PathBuf,
    pub classes: Vec<String>,
    pub features: FeatureChoice,
    pub document: DocumentSource,
    pub format: OutputFormat,
}

impl ClassifyArgs {
    pub fn into_request(self) -> Result<ClassifyRequest> {
        let document = match (self.text, self.input) {
            (Some(text), None) => DocumentSource::Text(text),
            (None, Some(path)) => DocumentSource::File(path),
            _ => return Err(anyhow!("exactly one of --text or --input is required")),
        };

        Ok(ClassifyRequest {
            model: self.model,
            classes: self.classes,
            features: self.features,
            document,
            format: self.format,
        })
    }
}

fn parse_kind<T>(raw: &str) -> Result<T>
where
    T: FromStr + IntoEnumIterator + std::fmt::Display,
{
    for cand in candidate_spellings(raw) {
        if let Ok(parsed) = cand.parse::<T>() {
            return Ok(parsed);
        }
    }
    let expected: Vec<String> = T::iter().map(|v| v.to_string()).collect();
    Err(anyhow!(
        "could not parse value '{raw}', expected one of: {}",
        expected.join(", ")
    ))
}

fn candidate_spellings(input: &str) -> Vec<String> {
    let mut out = Vec::new();
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return out;
    }

    out.push(trimmed.to_string());
    out.push(trimmed.to_lowercase());
    out.push(kebab_from_token(trimmed));
    out.push(trimmed.to_lowercase().replace('_', "-"));
    out.sort();
    out.dedup();
    out
}

/// `ExcludeClass` and `exclude_class` both become `exclude-class`.
fn kebab_from_token(token: &str) -> String {
    let mut buf = String::new();
    let mut prev_lower = false;
    for ch in token.chars() {
        if ch.is_uppercase() {
            if prev_lower {
                buf.push('-');
            }
            buf.extend(ch.to_lowercase());
            prev_lower = false;
        } else if ch == '_' {
            buf.push('-');
            prev_lower = false;
        } else {
            buf.push(ch);
            prev_lower = ch.is_lowercase();
        }
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("bayesel").chain(args.iter().copied()))
            .expect("valid command line")
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn classify_with_text_and_defaults() {
        let cli = parse(&["classify", "--model", "m.json", "--text", "hello world"]);
        assert_eq!(cli.verbose, 0);
        let Command::Classify(args) = cli.command else {
            panic!("expected classify");
        };
        let req = args.into_request().unwrap();
        assert_eq!(req.model, PathBuf::from("m.json"));
        assert!(req.classes.is_empty());
        assert_eq!(req.features, FeatureChoice::Tokens);
        assert_eq!(req.format, OutputFormat::Text);
        assert_eq!(req.document, DocumentSource::Text("hello world".into()));
    }

    #[test]
    fn score_with_classes_input_and_options() {
        let cli = parse(&[
            "-vv",
            "score",
            "--model",
            "m.json",
            "--class",
            "spam",
            "--class",
            "ham",
            "--input",
            "doc.txt",
            "--features",
            "ExcludeClass",
            "--format",
            "JSON",
        ]);
        assert_eq!(cli.verbose, 2);
        let Command::Score(args) = cli.command else {
            panic!("expected score");
        };
        let req = args.into_request().unwrap();
        assert_eq!(req.classes, ["spam", "ham"]);
        assert_eq!(req.features, FeatureChoice::ExcludeClass);
        assert_eq!(req.format, OutputFormat::Json);
        assert_eq!(req.document, DocumentSource::File("doc.txt".into()));
    }

    #[test]
    fn document_is_required_and_exclusive() {
        assert!(Cli::try_parse_from(["bayesel", "classify", "--model", "m.json"]).is_err());
        assert!(
            Cli::try_parse_from([
                "bayesel", "classify", "--model", "m.json", "--text", "a", "--input", "b",
            ])
            .is_err()
        );
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        assert!(
            Cli::try_parse_from([
                "bayesel",
                "classify",
                "--model",
                "m.json",
                "--text",
                "a",
                "--features",
                "bigrams",
            ])
            .is_err()
        );
    }

    #[test]
    fn features_help_describes_each_strategy() {
        let mut cmd = Cli::command();
        let classify = cmd
            .find_subcommand_mut("classify")
            .expect("classify subcommand");
        let features = classify
            .get_arguments()
            .find(|a| a.get_id() == "features")
            .expect("--features argument");
        let help = features
            .get_long_help()
            .map(|h| h.to_string())
            .unwrap_or_default();
        assert!(help.contains("exclude-class"), "{help}");
        assert!(help.contains("equal to the class being scored"), "{help}");
    }

    #[test]
    fn parse_error_lists_accepted_values() {
        let err = parse_kind::<FeatureChoice>("bigrams").unwrap_err();
        assert_eq!(
            err.to_string(),
            "could not parse value 'bigrams', expected one of: tokens, exclude-class"
        );
        let err = parse_kind::<OutputFormat>("xml").unwrap_err();
        assert!(err.to_string().ends_with("text, json"), "{err}");
    }

    #[test]
    fn lenient_spellings() {
        assert_eq!(
            parse_kind::<FeatureChoice>("exclude_class").unwrap(),
            FeatureChoice::ExcludeClass
        );
        assert_eq!(
            parse_kind::<FeatureChoice>(" Tokens ").unwrap(),
            FeatureChoice::Tokens
        );
        assert!(parse_kind::<OutputFormat>("").is_err());
        assert_eq!(kebab_from_token("ExcludeClass"), "exclude-class");
    }

    #[test]
    fn file_source_reports_missing_file() {
        let src = DocumentSource::File("/definitely/not/here.txt".into());
        let err = src.read().unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.txt"), "{err}");
    }
}
