//! CLI command handlers.

pub mod files;
pub mod me;
pub mod messages;
pub mod rooms;
pub mod tasks;

use anyhow::{Result, anyhow};
use chatwork_client::ChatworkClient;
use console::Style;
use serde::Serialize;

use crate::config::{Settings, user_config_path};

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Merged settings.
    pub settings: Settings,
    /// Output as JSON for scripting.
    pub json_output: bool,
    /// Verbose output enabled.
    pub verbose: bool,
}

impl Context {
    /// Build an API client from the settings.
    pub fn client(&self) -> Result<ChatworkClient> {
        let token = self.settings.token.as_deref().ok_or_else(|| {
            let path = self
                .settings
                .source
                .clone()
                .or_else(user_config_path)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "the config file".to_string());
            anyhow!(
                "no API token: pass --token, set CHATWORK_API_TOKEN, or add `token` to {}",
                path
            )
        })?;

        let client = ChatworkClient::builder()
            .token(token)
            .base_url(&self.settings.base_url)
            .timeout(self.settings.timeout)
            .build()?;

        if self.verbose {
            let dim = Style::new().dim();
            eprintln!("{}", dim.apply_to(format!("API: {}", client.base_url())));
        }

        Ok(client)
    }
}

/// Print a value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a bold title with a rule under it.
pub fn print_header(title: &str) {
    let dim = Style::new().dim();
    println!("{}", Style::new().bold().apply_to(title));
    println!("{}", dim.apply_to("─".repeat(50)));
}

/// Print a green check mark line.
pub fn print_success(message: &str) {
    println!("{} {}", Style::new().green().apply_to("✓"), message);
}

/// Format a Unix timestamp for display. Zero means "not set".
pub fn format_time(unix: i64) -> String {
    if unix == 0 {
        return "-".to_string();
    }
    chrono::DateTime::from_timestamp(unix, 0)
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| unix.to_string())
}

/// Truncate text to a maximum number of characters, on one line.
pub fn truncate(text: &str, max: usize) -> String {
    let line = text.replace('\n', " ");
    if line.chars().count() <= max {
        line
    } else {
        let cut: String = line.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn context(token: Option<&str>) -> Context {
        Context {
            settings: Settings {
                token: token.map(str::to_string),
                base_url: "http://localhost:9/v2".to_string(),
                timeout: Duration::from_secs(1),
                source: None,
            },
            json_output: false,
            verbose: false,
        }
    }

    #[test]
    fn test_client_requires_token() {
        let err = context(None).client().unwrap_err();
        assert!(err.to_string().contains("CHATWORK_API_TOKEN"));
    }

    #[test]
    fn test_client_uses_settings() {
        let client = context(Some("abc")).client().unwrap();
        assert_eq!(client.base_url(), "http://localhost:9/v2");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "-");
        assert_eq!(format_time(1384354799), "2013-11-13 14:59");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("line one\nline two", 100), "line one line two");
        assert_eq!(truncate("abcdefghij", 6), "abc...");
        assert_eq!(truncate("日本語のテキスト", 5), "日本...");
    }
}
