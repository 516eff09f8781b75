//! Construction-time widget settings.

/// Default endpoint path.
pub const DEFAULT_API_URL: &str = "/api/chat";
/// Default panel title.
pub const DEFAULT_TITLE: &str = "FaithBot";
/// Default greeting shown on first open.
pub const DEFAULT_WELCOME: &str = "Welcome! How are you doing today?";

/// Settings fixed when a widget is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub api_url: String,
    pub title: String,
    pub welcome: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            title: DEFAULT_TITLE.to_string(),
            welcome: DEFAULT_WELCOME.to_string(),
        }
    }
}

impl WidgetConfig {
    /// Build from embedding attributes (`data-api`, `data-title`, `data-welcome`).
    ///
    /// Unknown attributes are ignored; missing or blank ones keep their default.
    pub fn from_attributes<'a, I>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::default();
        for (name, value) in attributes {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match name {
                "data-api" => config.api_url = value.to_string(),
                "data-title" => config.title = value.to_string(),
                "data-welcome" => config.welcome = value.to_string(),
                _ => {}
            }
        }
        config
    }
}
