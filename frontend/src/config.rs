//! Build-time configuration.
//!
//! Values are baked in at compile time through environment variables,
//! since a browser bundle has no process environment to read at runtime.

const DEFAULT_API_BASE_URL: &str = "https://api.schneck.dlab.software";
const DEFAULT_SIDEBAR_NAME: &str = "dLab";

/// Where the sidebar takes the name it greets.
#[derive(Clone, Debug, PartialEq)]
pub enum SidebarName {
    /// A fixed label, whatever the session says.
    Fixed(String),
    /// The username captured at login.
    Session,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub sidebar_name: SidebarName,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("DTALENT_API_BASE_URL"),
            option_env!("DTALENT_SIDEBAR_NAME"),
        )
    }

    pub fn from_values(base_url: Option<&str>, sidebar_name: Option<&str>) -> Self {
        let api_base_url = base_url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        let sidebar_name = match sidebar_name.map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) if v.eq_ignore_ascii_case("session") => SidebarName::Session,
            Some(v) => SidebarName::Fixed(v.to_string()),
            None => SidebarName::Fixed(DEFAULT_SIDEBAR_NAME.to_string()),
        };

        Self {
            api_base_url,
            sidebar_name,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}
