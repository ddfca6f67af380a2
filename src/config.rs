// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Configuration loading.

use serde::Deserialize;

use crate::filter::FilterKind;

/// Settings for parameter access and input parsing.
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Filter applied by reads that do not name one (default: text)
    #[serde(default = "default_filter")]
    pub default_filter: FilterKind,

    /// Cap on top-level pairs accepted by the url-encoded parser (default: 1000)
    #[serde(default = "default_max_params")]
    pub max_params: usize,

    /// Cap on bracket nesting depth below the root key (default: 16)
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_filter() -> FilterKind {
    FilterKind::Text
}

fn default_max_params() -> usize {
    1000
}

fn default_max_depth() -> usize {
    16
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            default_filter: default_filter(),
            max_params: default_max_params(),
            max_depth: default_max_depth(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
}

impl Config {
    /// Load configuration from a TOML file. TOML format:
    ///
    /// [input]
    /// default_filter = "text"
    /// max_params = 1000
    /// max_depth = 16
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let s = std::fs::read_to_string(path.as_ref())?;
        let cfg: Self = toml::from_str(&s)?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_text_and_php_like_caps() {
        let cfg = Config::default();
        assert_eq!(cfg.input.default_filter, FilterKind::Text);
        assert_eq!(cfg.input.max_params, 1000);
        assert_eq!(cfg.input.max_depth, 16);
    }

    #[test]
    fn partial_table_fills_remaining_defaults() {
        let cfg: Config = toml::from_str(
            r#"[input]
default_filter = "html"
"#,
        )
        .expect("parse config");
        assert_eq!(cfg.input.default_filter, FilterKind::Html);
        assert_eq!(cfg.input.max_params, 1000);
    }

    #[test]
    fn empty_document_is_all_defaults() {
        let cfg: Config = toml::from_str("").expect("parse empty config");
        assert_eq!(cfg.input.default_filter, FilterKind::Text);
    }

    #[test]
    fn unknown_filter_name_fails_to_parse() {
        let res: Result<Config, _> = toml::from_str(
            r#"[input]
default_filter = "htlm"
"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn load_from_path_reads_toml_file() -> anyhow::Result<()> {
        let tmp = std::env::temp_dir().join(format!("request_input_cfg_{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(
            &tmp,
            r#"[input]
default_filter = "shell_escape"
max_params = 5
max_depth = 2
"#,
        )?;

        let cfg = Config::load_from_path(&tmp)?;
        assert_eq!(cfg.input.default_filter, FilterKind::ShellEscape);
        assert_eq!(cfg.input.max_params, 5);
        assert_eq!(cfg.input.max_depth, 2);

        let _ = std::fs::remove_file(&tmp);
        Ok(())
    }

    #[test]
    fn load_from_missing_path_errors() {
        let missing = std::env::temp_dir().join("request_input_cfg_does_not_exist.toml");
        assert!(Config::load_from_path(&missing).is_err());
    }
}
