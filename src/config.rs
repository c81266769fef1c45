use leptos::prelude::window;
use log::LevelFilter;
use web_sys::UrlSearchParams;

pub const DEFAULT_INVALID_INPUT_MESSAGE: &str = "Invalid Credentials , Try Again !";

#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    pub log_level: LevelFilter,
    /// Shown in the alert raised for a rejected form submission.
    pub invalid_input_message: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Info,
            invalid_input_message: DEFAULT_INVALID_INPUT_MESSAGE.to_string(),
        }
    }
}

impl BoardConfig {
    /// Applies the `log` query parameter, e.g. `debug` from `?log=debug`.
    /// Unparsable values keep the default.
    pub fn with_log_override(value: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(value) = value {
            match value.parse::<LevelFilter>() {
                Ok(level) => config.log_level = level,
                Err(_) => log::warn!("Ignoring unknown log level {:?}", value),
            }
        }
        config
    }

    /// Reads overrides from the current page URL.
    pub fn from_location() -> Self {
        let search = window().location().search().unwrap_or_default();
        let level = match UrlSearchParams::new_with_str(&search) {
            Ok(params) => params.get("log"),
            Err(e) => {
                log::warn!("Failed to parse page query {:?}: {:?}", search, e);
                None
            }
        };
        Self::with_log_override(level.as_deref())
    }
}
