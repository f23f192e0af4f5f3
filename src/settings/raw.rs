use anyhow::{Result, ensure};
use serde::Deserialize;

use rolodex_core::gateway::DEFAULT_BASE_URL;

use crate::cli::CliArgs;

use super::resolved::ResolvedConfig;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    api: ApiSection,
    ui: UiSection,
}

/// API-specific configuration options as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ApiSection {
    base_url: Option<String>,
}

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
    initial_query: Option<String>,
    theme: Option<String>,
    start_page: Option<u64>,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(url) = cli.base_url.clone() {
            self.api.base_url = Some(url);
        }
        if let Some(query) = cli.query.clone() {
            self.ui.initial_query = Some(query);
        }
        if let Some(theme) = cli.theme.clone() {
            self.ui.theme = Some(theme);
        }
        if let Some(page) = cli.page {
            self.ui.start_page = Some(page);
        }
    }

    /// Convert the raw configuration into a [`ResolvedConfig`], validating and
    /// filling defaults where required.
    pub(super) fn resolve(self) -> Result<ResolvedConfig> {
        let base_url = self
            .api
            .base_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        if let Some(theme) = &self.ui.theme {
            ensure!(
                rolodex_tui::theme_names().contains(&theme.as_str()),
                "unknown theme '{theme}' (see --list-themes)"
            );
        }

        let start_page = self.ui.start_page.unwrap_or(1);
        ensure!(start_page >= 1, "start page must be 1 or greater");

        Ok(ResolvedConfig {
            base_url,
            initial_query: self.ui.initial_query,
            theme: self.ui.theme,
            start_page,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn cli_overrides_take_precedence() {
        let cli = CliArgs::parse_from([
            "rolodex",
            "-q",
            "rick",
            "--theme",
            "dark",
            "--page",
            "3",
            "--base-url",
            "https://example.test/api/character",
        ]);

        let mut config = RawConfig::default();
        config.apply_cli_overrides(&cli);

        assert_eq!(config.ui.initial_query, cli.query);
        assert_eq!(config.ui.theme, cli.theme);
        assert_eq!(config.ui.start_page, cli.page);
        assert_eq!(config.api.base_url, cli.base_url);
    }

    #[test]
    fn resolve_fills_the_default_base_url() {
        let resolved = RawConfig::default().resolve().expect("resolves");
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.start_page, 1);
        assert!(resolved.initial_query.is_none());
    }

    #[test]
    fn resolve_rejects_an_unknown_theme() {
        let mut config = RawConfig::default();
        config.ui.theme = Some("sepia".into());
        assert!(config.resolve().is_err());
    }

    #[test]
    fn resolve_rejects_page_zero() {
        let mut config = RawConfig::default();
        config.ui.start_page = Some(0);
        assert!(config.resolve().is_err());
    }
}
