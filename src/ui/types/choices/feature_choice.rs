use serde::{Deserialize, Serialize};
use strum::{EnumMessage, IntoEnumIterator};
use strum_macros::{Display, EnumIter, EnumMessage, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    EnumMessage,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum FeatureChoice {
    #[default]
    #[strum(message = "Every whitespace-separated token is a feature")]
    Tokens,

    #[strum(message = "Tokens, minus any token equal to the class being scored")]
    ExcludeClass,
}

impl FeatureChoice {
    /// `--features` long help: one line per strategy with its description.
    pub fn long_help() -> String {
        let mut out = String::from("Feature extraction strategy");
        for choice in Self::iter() {
            let name = choice.to_string();
            let message = choice.get_message().unwrap_or_default();
            out.push_str(&format!("\n  {name:<14} {message}"));
        }
        out
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn kebab_case_names_round_trip() {
        for choice in FeatureChoice::iter() {
            let name = choice.to_string();
            assert_eq!(FeatureChoice::from_str(&name).unwrap(), choice);
        }
        assert_eq!(FeatureChoice::ExcludeClass.to_string(), "exclude-class");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn every_feature_choice_has_a_message() {
        for choice in FeatureChoice::iter() {
            assert!(choice.get_message().is_some(), "{choice} has no message");
        }
    }

    #[test]
    fn long_help_lists_every_strategy() {
        let help = FeatureChoice::long_help();
        assert!(help.contains("exclude-class  Tokens, minus any token"), "{help}");
        assert!(help.contains("tokens         Every whitespace-separated"), "{help}");
        assert_eq!(help.lines().count(), 1 + FeatureChoice::iter().count());
    }

    #[test]
    fn defaults() {
        assert_eq!(FeatureChoice::default(), FeatureChoice::Tokens);
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}
