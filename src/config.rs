use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path to the serialized movie catalog (JSON array of records with a
    /// `title` field; row order defines the matrix index)
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Path to the serialized similarity matrix (dense N×N JSON array,
    /// optionally gzip-compressed)
    #[serde(default = "default_matrix_path")]
    pub matrix_path: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of recommendations returned when the caller does not ask for a
    /// specific count
    #[serde(default = "default_top_n")]
    pub default_top_n: usize,
}

fn default_catalog_path() -> String {
    "model/movies.json".to_string()
}

fn default_matrix_path() -> String {
    "model/similarity.json.gz".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_top_n() -> usize {
    5
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: Config = envy::from_iter(std::iter::empty::<(String, String)>()).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.default_top_n, 5);
        assert_eq!(config.catalog_path, "model/movies.json");
    }

    #[test]
    fn test_overrides_from_iter() {
        let vars = vec![
            ("CATALOG_PATH".to_string(), "/data/movies.json".to_string()),
            ("DEFAULT_TOP_N".to_string(), "10".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();
        assert_eq!(config.catalog_path, "/data/movies.json");
        assert_eq!(config.default_top_n, 10);
    }
}
