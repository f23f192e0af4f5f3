/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
    pub base_url: String,
    /// Query to start with; `None` means the stored preference is used.
    pub initial_query: Option<String>,
    /// Theme to start with; `None` means the stored preference is used.
    pub theme: Option<String>,
    pub start_page: u64,
}

impl ResolvedConfig {
    /// Print a human readable summary of the effective configuration.
    pub fn print_summary(&self) {
        println!("Effective configuration:");
        println!("  API base URL: {}", self.base_url);
        println!(
            "  Initial query: {}",
            self.initial_query
                .as_deref()
                .unwrap_or("(use the stored preference)")
        );
        println!(
            "  UI theme: {}",
            self.theme.as_deref().unwrap_or("(use the stored preference)")
        );
        println!("  Start page: {}", self.start_page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_prints_without_panic() {
        let config = ResolvedConfig {
            base_url: "https://example.test/api/character".into(),
            initial_query: Some("rick".into()),
            theme: Some("dark".into()),
            start_page: 2,
        };

        config.print_summary();
    }
}
