use crate::config::DocsConfig;
use crate::error::{ConfigError, Result};

impl DocsConfig {
    /// Rejects configurations that cannot produce any output.
    pub fn validate(&self) -> Result<()> {
        if self.entry_file.is_empty() {
            return Err(ConfigError::MissingField {
                field: "entryFile".to_string(),
                hint: "Provide at least one entry file, e.g. `tsdocs generate src/index.ts`"
                    .to_string(),
            }
            .into());
        }

        if let Some(blank) = self.entry_file.iter().find(|entry| entry.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "entryFile".to_string(),
                value: format!("{blank:?}"),
                hint: "Entry files cannot be blank".to_string(),
            }
            .into());
        }

        let extract = self.extract_path();
        if !extract.is_file() {
            return Err(ConfigError::ExtractNotFound(extract).into());
        }

        Ok(())
    }
}
