use crate::display::Locale;
use thiserror::Error;

/// Why an offers document could not be turned into a collection.
///
/// `Display` carries the full technical detail and is meant for logs only.
/// Anything shown to a visitor goes through [`LoadError::user_message`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    #[error("transport error fetching {source_name}{suffix}: {message}", suffix = status_suffix(.status))]
    Transport {
        source_name: String,
        status: Option<u16>,
        message: String,
    },

    #[error("format error in {source_name}: {message}")]
    Format {
        source_name: String,
        message: String,
    },
}

fn status_suffix(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" (HTTP {code})"),
        None => String::new(),
    }
}

impl LoadError {
    pub fn transport(
        source_name: impl Into<String>,
        status: Option<u16>,
        message: impl Into<String>,
    ) -> Self {
        LoadError::Transport {
            source_name: source_name.into(),
            status,
            message: message.into(),
        }
    }

    pub fn format(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        LoadError::Format {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Neutral text for the page. Same for every variant.
    pub fn user_message(&self, locale: Locale) -> &'static str {
        locale.load_failed()
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            LoadError::Transport { status, .. } => *status,
            LoadError::Format { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_status_for_logs() {
        let err = LoadError::transport(
            "https://cdn.test/offers.json",
            Some(500),
            "Internal Server Error",
        );
        let text = err.to_string();
        assert!(text.contains("HTTP 500"), "got: {text}");
        assert!(text.contains("cdn.test"));
    }

    #[test]
    fn user_message_hides_detail() {
        let err = LoadError::format("offers.json", "expected value at line 1 column 1");
        let msg = err.user_message(Locale::En);
        assert!(!msg.contains("line 1"));
        assert!(!msg.contains("offers.json"));
    }
}
