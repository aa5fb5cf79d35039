use serde::Deserialize;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// JSON catalog file loaded once at start-up
    #[serde(default)]
    pub catalog_path: Option<String>,

    /// Remote catalog endpoint fetched per request; wins over `catalog_path`
    #[serde(default)]
    pub catalog_url: Option<String>,

    /// Timeout for one remote catalog fetch, in seconds
    #[serde(default = "default_catalog_timeout_secs")]
    pub catalog_timeout_secs: u64,

    /// Upper bound on handling one HTTP request, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_catalog_timeout_secs() -> u64 {
    5
}

fn default_request_timeout_secs() -> u64 {
    10
}

/// Where products come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSetting {
    Builtin,
    File(String),
    Remote(String),
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_iter(std::env::vars())
    }

    /// Load configuration from an explicit set of variables
    pub fn from_iter<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// A catalog fetch must give up before the request as a whole does,
    /// otherwise a slow catalog surfaces as a request timeout
    fn validate(&self) -> anyhow::Result<()> {
        if self.catalog_timeout_secs >= self.request_timeout_secs {
            anyhow::bail!(
                "CATALOG_TIMEOUT_SECS ({}) must be shorter than REQUEST_TIMEOUT_SECS ({})",
                self.catalog_timeout_secs,
                self.request_timeout_secs
            );
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn catalog_timeout(&self) -> Duration {
        Duration::from_secs(self.catalog_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn catalog_setting(&self) -> CatalogSetting {
        match (&self.catalog_url, &self.catalog_path) {
            (Some(url), _) => CatalogSetting::Remote(url.clone()),
            (None, Some(path)) => CatalogSetting::File(path.clone()),
            (None, None) => CatalogSetting::Builtin,
        }
    }
}
