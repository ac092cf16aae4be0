use std::fmt;

const DEFAULT_PORT: u16 = 5000;

#[derive(Debug)]
pub enum ConfigError {
    MissingEnvVar(String),
    InvalidEnvVar(String, String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::MissingEnvVar(key) => {
                write!(f, "Missing environment variable: {}", key)
            }
            ConfigError::InvalidEnvVar(key, msg) => {
                write!(f, "Invalid environment variable {}: {}", key, msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Process configuration, loaded once in `main` and handed to the component
/// constructors. Nothing outside this module reads the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub carts_table: String,
    pub jwt_secret: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let carts_table = required_env("CARTS_TABLE")?;
        let jwt_secret = required_env("JWT_SECRET")?;
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|e| {
                ConfigError::InvalidEnvVar("PORT".to_string(), e.to_string())
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Config {
            carts_table,
            jwt_secret,
            port,
        })
    }
}

fn required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}
