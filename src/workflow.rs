use anyhow::Result;
use rolodex_core::gateway::ApiGateway;
use rolodex_core::prefs::Preferences;
use rolodex_tui::{App, BrowseOutcome};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive browse experience.
pub(crate) struct BrowseWorkflow {
    app: App<'static>,
}

impl BrowseWorkflow {
    pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
        let ResolvedConfig {
            base_url,
            initial_query,
            theme,
            start_page,
        } = config;

        let gateway = ApiGateway::new(&base_url)?;
        let prefs = Preferences::open_default()?;

        let mut app = App::new(gateway, prefs).with_start_page(start_page);
        if let Some(query) = initial_query {
            app = app.with_initial_term(&query);
        }
        if let Some(theme) = theme {
            app = app.with_theme_name(&theme);
        }

        Ok(Self { app })
    }

    pub(crate) fn run(self) -> Result<BrowseOutcome> {
        rolodex_tui::run(self.app)
    }
}
