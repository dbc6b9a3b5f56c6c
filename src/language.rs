//! UI / word-list language and its persisted form.

use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Portuguese,
    English,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::Portuguese => Language::English,
            Language::English => Language::Portuguese,
        }
    }

    pub fn is_english(self) -> bool {
        self == Language::English
    }

    /// Decode the stored preference (a JSON boolean, `true` = English).
    /// Missing or malformed values fall back to the default language.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value.map(serde_json::from_str::<bool>) {
            Some(Ok(true)) => Language::English,
            Some(Ok(false)) => Language::Portuguese,
            Some(Err(err)) => {
                log::debug!("ignoring malformed language preference: {err}");
                Language::default()
            }
            None => Language::default(),
        }
    }

    pub fn to_stored(self) -> String {
        self.is_english().to_string()
    }

    /// Label of the button that switches away from this language.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Language::Portuguese => "Switch to EN 🇬🇧",
            Language::English => "Switch to PT 🇵🇹",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_portuguese() {
        assert_eq!(Language::default(), Language::Portuguese);
        assert_eq!(Language::from_stored(None), Language::Portuguese);
    }

    #[test]
    fn stored_values_round_trip() {
        assert_eq!(Language::from_stored(Some("true")), Language::English);
        assert_eq!(Language::from_stored(Some("false")), Language::Portuguese);
        assert_eq!(Language::English.to_stored(), "true");
        assert_eq!(Language::Portuguese.to_stored(), "false");
    }

    #[test]
    fn malformed_value_falls_back() {
        for raw in ["", "yes", "1", "{\"en\":true}", "True"] {
            assert_eq!(Language::from_stored(Some(raw)), Language::Portuguese, "{raw:?}");
        }
    }

    #[test]
    fn toggled_twice_is_identity() {
        assert_eq!(Language::English.toggled().toggled(), Language::English);
        assert_eq!(Language::Portuguese.toggled(), Language::English);
    }
}
