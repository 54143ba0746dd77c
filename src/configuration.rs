use crate::dictionary_client::DictionaryClient;
use crate::domain::Credentials;
use secrecy::Secret;
use serde_aux::field_attributes::deserialize_option_number_from_string;

/// Name of the variable carrying the valid credential, as kept in `.env`.
pub const CREDENTIAL_ENV_VAR: &str = "REQUEST_HEADER";

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub dictionary: DictionarySettings,
    pub telemetry: TelemetrySettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct DictionarySettings {
    pub base_url: String,
    pub authorization: Secret<String>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub timeout_milliseconds: Option<u64>,
}

impl DictionarySettings {
    pub fn client(&self) -> Result<DictionaryClient, reqwest::Error> {
        DictionaryClient::new(self.base_url.clone(), self.timeout())
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.authorization.clone())
    }

    pub fn timeout(&self) -> Option<std::time::Duration> {
        self.timeout_milliseconds
            .map(std::time::Duration::from_millis)
    }
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct TelemetrySettings {
    pub log_level: String,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    // Detect the running environment.
    // Default to `local` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(
            config::File::from(configuration_directory.join(environment_filename))
                .required(false),
        )
        // Add in settings from environment variables (with a prefix of APP and '__' as separator)
        // E.g. `APP_DICTIONARY__BASE_URL=http://localhost:8000` would set `Settings.dictionary.base_url`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .set_override_option(
            "dictionary.authorization",
            std::env::var(CREDENTIAL_ENV_VAR).ok(),
        )?
        .build()?;

    settings.try_deserialize::<Settings>()
}

/// The possible runtime environment for our harness.
#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}
