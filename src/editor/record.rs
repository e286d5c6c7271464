use std::str::FromStr;

use crate::Error;

/// Behavior of one inline keyboard button, transmitted as the literal
/// strings "url" and "callback".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Kind {
    #[default]
    Url,
    Callback,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Callback => "callback",
        }
    }

    /// Stored values outside the two-value enumeration fall back to the
    /// selector default, same as an unknown value set on a two-option
    /// `<select>`.
    pub fn parse_or_default(text: &str) -> Self {
        text.parse().unwrap_or_default()
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "url" => Ok(Self::Url),
            "callback" => Ok(Self::Callback),
            other => Err(Error::UnknownKind(other.to_owned())),
        }
    }
}

/// One (text, target, kind) triple. Target holds a URL for [`Kind::Url`]
/// buttons and a callback identifier for [`Kind::Callback`] buttons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonRecord {
    text: String,
    target: String,
    kind: Kind,
}

impl ButtonRecord {
    pub fn new(text: impl Into<String>, target: impl Into<String>, kind: Kind) -> Self {
        Self {
            text: text.into(),
            target: target.into(),
            kind,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_target(&mut self, target: impl Into<String>) {
        self.target = target.into();
    }

    pub fn set_kind(&mut self, kind: Kind) {
        self.kind = kind;
    }

    /// Only complete records qualify for serialization. Kind is an enum and
    /// always present, so completeness comes down to the two free-text
    /// fields.
    pub fn is_complete(&self) -> bool {
        !self.text.is_empty() && !self.target.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{ButtonRecord, Kind};

    #[test]
    fn kind_parses_known_values() {
        assert_eq!(Kind::parse_or_default("url"), Kind::Url);
        assert_eq!(Kind::parse_or_default("callback"), Kind::Callback);
    }

    #[test]
    fn unknown_kind_falls_back_to_default() {
        assert_eq!(Kind::parse_or_default(""), Kind::Url);
        assert_eq!(Kind::parse_or_default("inline"), Kind::Url);
        assert!("inline".parse::<Kind>().is_err());
    }

    #[test]
    fn completeness_requires_text_and_target() {
        assert!(!ButtonRecord::default().is_complete());
        assert!(!ButtonRecord::new("Docs", "", Kind::Url).is_complete());
        assert!(!ButtonRecord::new("", "https://example.com", Kind::Url).is_complete());
        assert!(ButtonRecord::new("Docs", "https://example.com", Kind::Url).is_complete());
    }
}
