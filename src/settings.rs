use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Settings {
    pub debug: bool,
    pub enable_swagger: bool,
    pub host: String,
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: false,
            enable_swagger: true,
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        let defaults = Self::default();

        let config = Config::builder()
            // Optional config.toml, overridden by APP_ prefixed environment variables
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("APP").try_parsing(true))
            .set_default("debug", defaults.debug)?
            .set_default("enable_swagger", defaults.enable_swagger)?
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    const VARS: [&str; 4] = ["APP_DEBUG", "APP_ENABLE_SWAGGER", "APP_HOST", "APP_PORT"];

    fn clear_env() {
        for var in VARS {
            // SAFETY: tests touching the environment run serially.
            unsafe { std::env::remove_var(var) };
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let settings = Settings::from_env().unwrap();
        assert!(!settings.debug);
        assert!(settings.enable_swagger);
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.port, 8000);
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        // SAFETY: tests touching the environment run serially.
        unsafe {
            std::env::set_var("APP_PORT", "9090");
            std::env::set_var("APP_DEBUG", "true");
            std::env::set_var("APP_ENABLE_SWAGGER", "false");
        }

        let settings = Settings::from_env().unwrap();
        clear_env();

        assert_eq!(settings.port, 9090);
        assert!(settings.debug);
        assert!(!settings.enable_swagger);
    }
}
