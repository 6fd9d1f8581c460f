use crate::{
    config::{
        model::{Config, ConfigField},
        presets::{Preset, preset},
    },
    foundation::error::{WobbleError, WobbleResult},
};

/// Single-writer owner of the current [`Config`].
///
/// The generator never borrows the live value: callers take a [`snapshot`]
/// and generate from that, so an export started before a later mutation keeps
/// the parameters it was started with.
///
/// [`snapshot`]: ConfigStore::snapshot
#[derive(Debug, Default)]
pub struct ConfigStore {
    current: Config,
}

impl ConfigStore {
    /// Store holding the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store starting from an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        Self { current: config }
    }

    /// Immutable copy of the current configuration.
    pub fn snapshot(&self) -> Config {
        self.current.clone()
    }

    /// Read-only view of the current configuration.
    pub fn current(&self) -> &Config {
        &self.current
    }

    /// Replace one field.
    pub fn set(&mut self, field: ConfigField) -> WobbleResult<()> {
        tracing::debug!(?field, "config set");
        self.current.set(field)
    }

    /// Replace every field, e.g. with a config loaded from JSON.
    pub fn replace(&mut self, config: Config) {
        self.current = config;
    }

    /// Merge a preset over the current state, keeping `infinite`.
    pub fn apply_preset(&mut self, preset: &Preset) {
        tracing::debug!(preset = preset.id, "config apply preset");
        self.current = preset.apply_to(&self.current);
    }

    /// Look up a preset by id and apply it.
    pub fn apply_preset_by_name(&mut self, id: &str) -> WobbleResult<()> {
        let p = preset(id)
            .ok_or_else(|| WobbleError::validation(format!("unknown preset '{id}'")))?;
        self.apply_preset(p);
        Ok(())
    }

    /// Restore the documented defaults.
    pub fn reset(&mut self) {
        tracing::debug!("config reset");
        self.current = Config::default();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/store.rs"]
mod tests;
