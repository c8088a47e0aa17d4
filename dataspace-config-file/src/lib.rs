use std::path::Path;

use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = "dataspace.toml";

/// Contents of `dataspace.toml`. Every key is optional so command line flags
/// can fill in whatever the file leaves out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DataspaceConfigToml {
    pub base_url: Option<String>,
    pub user_email: Option<String>,
    /// Environment variable holding the bearer token.
    pub token_env: Option<String>,
}

#[derive(Debug)]
pub enum DataspaceConfigError {
    IO(std::io::Error),
    Toml(toml::de::Error),
}

impl std::fmt::Display for DataspaceConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataspaceConfigError::IO(e) => write!(f, "cannot read config: {}", e),
            DataspaceConfigError::Toml(e) => write!(f, "invalid config: {}", e),
        }
    }
}

impl std::error::Error for DataspaceConfigError {}

impl DataspaceConfigToml {
    pub fn load(path: &Path) -> Result<Self, DataspaceConfigError> {
        let text = std::fs::read_to_string(path).map_err(DataspaceConfigError::IO)?;
        toml::from_str(&text).map_err(DataspaceConfigError::Toml)
    }

    /// Loads `path` if it exists, otherwise returns an empty config.
    pub fn load_or_default(path: &Path) -> Result<Self, DataspaceConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_deserialize_dataspace_config_toml() {
        let toml = r#"
base_url = "http://localhost:8512"
user_email = "a@b.com"
"#;
        let config: DataspaceConfigToml = toml::from_str(toml).unwrap();
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:8512"));
        assert_eq!(config.user_email.as_deref(), Some("a@b.com"));
        assert_eq!(config.token_env, None);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "token_env = \"MY_TOKEN\"").unwrap();
        let config = DataspaceConfigToml::load(file.path()).unwrap();
        assert_eq!(config.token_env.as_deref(), Some("MY_TOKEN"));
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = DataspaceConfigToml::load_or_default(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, DataspaceConfigToml::default());
    }

    #[test]
    fn test_unknown_types_are_rejected() {
        let result: Result<DataspaceConfigToml, _> = toml::from_str("base_url = 3");
        assert!(result.is_err());
    }
}
