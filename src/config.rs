use anyhow::bail;
use serde::Deserialize;
use std::path::Path;

use crate::es::codec::DocumentKind;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub codec: CodecConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CodecConfig {
    /// Path of the JSON document to read.
    #[serde(default)]
    pub input: String,
    /// Where to write the result. Stdout when unset.
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub pretty: bool,
    #[serde(default)]
    pub document: DocumentKind,
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        // Step 1: Try loading .env file (silently ignore if not found)
        let _ = dotenvy::dotenv();

        // Step 2: Try loading TOML config, then override with environment variables
        Self::load_from(Path::new("config.toml"), |key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::load`] with an explicit config path and variable lookup.
    pub fn load_from<F>(path: &Path, lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let mut config = toml::from_str::<AppConfig>(&content)?;
            config.codec.output = config.codec.output.filter(|p| !p.is_empty());
            config
        } else {
            AppConfig::defaults()
        };

        config.apply_overrides(lookup)?;

        // Validate
        if config.codec.input.trim().is_empty() {
            bail!("Input not configured. Set TEMPLATE_INPUT env var or codec.input in config.toml");
        }
        Ok(config)
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("TEMPLATE_INPUT") {
            self.codec.input = path;
        }
        if let Some(path) = lookup("TEMPLATE_OUTPUT") {
            self.codec.output = Some(path).filter(|p| !p.is_empty());
        }
        if let Some(val) = lookup("TEMPLATE_PRETTY") {
            self.codec.pretty = val.parse()?;
        }
        if let Some(val) = lookup("TEMPLATE_DOCUMENT") {
            match DocumentKind::parse(&val) {
                Some(kind) => self.codec.document = kind,
                None => bail!("TEMPLATE_DOCUMENT must be 'template' or 'mappings', got '{val}'"),
            }
        }
        Ok(())
    }

    fn defaults() -> Self {
        Self {
            codec: CodecConfig::default(),
        }
    }
}
