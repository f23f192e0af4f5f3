use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
    let builder = build_config(cli)?;
    let mut raw: RawConfig = builder
        .try_deserialize()
        .map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
    raw.apply_cli_overrides(cli);
    raw.resolve()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;

    use super::*;

    #[test]
    fn config_file_values_survive_the_load_pipeline() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("rolodex.toml");
        fs::write(
            &path,
            r#"
[api]
base_url = "https://example.test/api/character"

[ui]
initial_query = "rick"
theme = "dark"
start_page = 3
"#,
        )
        .expect("write config");

        let cli = CliArgs::parse_from([
            "rolodex",
            "--no-config",
            "--config",
            path.to_str().expect("utf-8 path"),
        ]);

        let resolved = load(&cli).expect("load");
        assert_eq!(resolved.base_url, "https://example.test/api/character");
        assert_eq!(resolved.initial_query.as_deref(), Some("rick"));
        assert_eq!(resolved.theme.as_deref(), Some("dark"));
        assert_eq!(resolved.start_page, 3);
    }

    #[test]
    fn cli_arguments_override_the_config_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("rolodex.toml");
        fs::write(&path, "[ui]\ninitial_query = \"rick\"\n").expect("write config");

        let cli = CliArgs::parse_from([
            "rolodex",
            "--no-config",
            "--config",
            path.to_str().expect("utf-8 path"),
            "-q",
            "morty",
        ]);

        let resolved = load(&cli).expect("load");
        assert_eq!(resolved.initial_query.as_deref(), Some("morty"));
    }
}
