use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized},
    value::{Uncased, UncasedStr},
};
use serde::Serialize;

use crate::cli::GenerateArgs;
use crate::config::DocsConfig;
use crate::error::{ConfigError, Result};

/// Config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "tsdocs.config.json";

/// Prefix of environment variables, e.g. `TSDOCS_ENTRY_FILE`.
pub const ENV_PREFIX: &str = "TSDOCS_";

/// Values given on the command line. Unset fields are not serialized, so
/// they leave lower layers alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extract: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_file: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugin: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_private_api: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_table_of_contents: Option<bool>,
}

impl DocsConfig {
    /// Load configuration from multiple sources.
    /// Priority: CLI args > environment variables > config file > defaults
    ///
    /// An explicit `config_path` must exist; the default file is optional.
    pub fn load(args: &GenerateArgs, config_path: Option<&Path>) -> Result<Self> {
        Self::figment(&ConfigOverrides::from(args), config_path)?
            .extract()
            .map_err(|e| {
                ConfigError::InvalidValue {
                    field: "configuration".to_string(),
                    value: e.to_string(),
                    hint: format!("Check {CONFIG_FILE_NAME} syntax and field types"),
                }
                .into()
            })
    }

    fn figment(overrides: &ConfigOverrides, config_path: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default_config()));

        let config_file = match config_path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound(path.to_path_buf()).into());
            }
            Some(path) => Some(path.to_path_buf()),
            None => {
                let default_path = Path::new(CONFIG_FILE_NAME);
                default_path.exists().then(|| default_path.to_path_buf())
            }
        };
        if let Some(path) = config_file {
            tracing::debug!(path = %path.display(), "loading config file");
            figment = figment.merge(Json::file(path));
        }

        figment = figment.merge(
            Env::prefixed(ENV_PREFIX)
                .map(camel_case_key)
                .lowercase(false),
        );

        Ok(figment.merge(Serialized::defaults(overrides)))
    }

    /// Get default configuration values.
    pub fn default_config() -> Self {
        use crate::config::defaults::*;

        Self {
            project: default_project(),
            extract: default_extract(),
            output: default_output(),
            entry_file: Vec::new(),
            plugin: Vec::new(),
            exclude: Vec::new(),
            exclude_private_api: default_exclude_private_api(),
            dry_run: false,
            skip_table_of_contents: false,
        }
    }
}

/// `ENTRY_FILE` becomes `entryFile`.
fn camel_case_key(key: &UncasedStr) -> Uncased<'_> {
    let mut camel = String::with_capacity(key.len());
    let mut upper = false;
    for ch in key.as_str().chars() {
        if ch == '_' {
            upper = !camel.is_empty();
        } else if upper {
            camel.push(ch.to_ascii_uppercase());
            upper = false;
        } else {
            camel.push(ch.to_ascii_lowercase());
        }
    }
    camel.into()
}

#[cfg(test)]
mod key_tests {
    use super::*;

    #[test]
    fn test_camel_case_key() {
        assert_eq!(camel_case_key(UncasedStr::new("ENTRY_FILE")).as_str(), "entryFile");
        assert_eq!(camel_case_key(UncasedStr::new("OUTPUT")).as_str(), "output");
        assert_eq!(
            camel_case_key(UncasedStr::new("SKIP_TABLE_OF_CONTENTS")).as_str(),
            "skipTableOfContents"
        );
    }
}
