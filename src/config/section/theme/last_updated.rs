//! `theme.last_updated`: either a label or switched off.

use serde::{Deserialize, Serialize};

/// Label used when `last_updated = true`.
pub const DEFAULT_LAST_UPDATED_LABEL: &str = "Last Updated";

/// Whether pages show their last-updated timestamp, and under which label.
///
/// Accepts `false`, `true` or a string in TOML; serializes back to
/// `false` or the label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawLastUpdated", into = "RawLastUpdated")]
pub enum LastUpdated {
    #[default]
    Off,
    Label(String),
}

impl LastUpdated {
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Off => None,
            Self::Label(label) => Some(label),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawLastUpdated {
    Toggle(bool),
    Label(String),
}

impl From<RawLastUpdated> for LastUpdated {
    fn from(raw: RawLastUpdated) -> Self {
        match raw {
            RawLastUpdated::Toggle(false) => Self::Off,
            RawLastUpdated::Toggle(true) => Self::Label(DEFAULT_LAST_UPDATED_LABEL.into()),
            RawLastUpdated::Label(label) => Self::Label(label),
        }
    }
}

impl From<LastUpdated> for RawLastUpdated {
    fn from(value: LastUpdated) -> Self {
        match value {
            LastUpdated::Off => Self::Toggle(false),
            LastUpdated::Label(label) => Self::Label(label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        last_updated: LastUpdated,
    }

    fn parse(value: &str) -> LastUpdated {
        toml::from_str::<Wrapper>(&format!("last_updated = {value}"))
            .unwrap()
            .last_updated
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!(parse("false"), LastUpdated::Off);
        assert_eq!(parse("true").label(), Some(DEFAULT_LAST_UPDATED_LABEL));
        assert_eq!(parse("\"更新时间\"").label(), Some("更新时间"));
    }

    #[test]
    fn test_serialize_shape() {
        assert_eq!(serde_json::to_string(&LastUpdated::Off).unwrap(), "false");
        assert_eq!(
            serde_json::to_string(&LastUpdated::Label("Updated".into())).unwrap(),
            "\"Updated\""
        );
    }
}
