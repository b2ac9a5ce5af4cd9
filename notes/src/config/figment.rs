use std::path::Path;
use rocket::figment::Figment;
use rocket::figment::providers::{Env, Format, Serialized, Toml};
use crate::bin_constants::APP_CONFIG_ENV_PREFIX;
use crate::config::app_config::{AppConfig, ConfigError};

/// Note service settings live in the same figment as the HTTP server's
/// own, so one file and one environment prefix configure both.
pub trait FigmentExt {
    /// Layers `AppConfig` defaults, then `config_file`, then `NOTES_*`
    /// variables over `self`.
    fn setup_app_config(
        self,
        config_file: impl AsRef<Path>,
    ) -> Figment;

    /// Extracts `AppConfig` and checks its limits.
    fn extract_app_config(&self) -> Result<AppConfig, ConfigError>;
}

impl FigmentExt for Figment {
    fn setup_app_config(self, config_file: impl AsRef<Path>) -> Figment {
        let defaults = Serialized::defaults(AppConfig::default());
        let file = Toml::file_exact(config_file.as_ref());
        let env = Env::prefixed(APP_CONFIG_ENV_PREFIX).global();
        self.merge(defaults).merge(file).merge(env)
    }

    fn extract_app_config(&self) -> Result<AppConfig, ConfigError> {
        let app_config: AppConfig = self.extract()?;
        app_config.validate()?;
        Ok(app_config)
    }
}
