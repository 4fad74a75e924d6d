use serde::{Deserialize, Serialize};

pub const THEME_SESSION_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Body of the theme toggle form.
#[derive(Deserialize, Serialize, Default, Debug)]
#[serde(default)]
pub struct ThemeFormData {
    pub return_to: String,
}

impl ThemeFormData {
    /// Where to send the browser back to. Anything that is not a path on this
    /// site falls back to the landing page.
    pub fn location(&self) -> &str {
        let path = self.return_to.as_str();

        if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') {
            path
        } else {
            "/"
        }
    }
}
