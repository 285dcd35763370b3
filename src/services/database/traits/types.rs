//! Backend selection and connection credentials.
//!
//! This module contains:
//! - `Backend` - Enum of supported database backends
//! - `Credentials` - Host, login and database for one named connection

use serde::{Deserialize, Deserializer, Serialize};

/// Supported database backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    MySQL,
    SingleStore,
}

impl Backend {
    /// Get the display name for this backend
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::MySQL => "MySQL",
            Self::SingleStore => "SingleStore",
        }
    }

    /// Get the default port for this backend
    pub fn default_port(&self) -> u16 {
        match self {
            Self::MySQL => 3306,
            Self::SingleStore => 3306,
        }
    }

    /// Get all available backends
    pub fn all() -> Vec<Backend> {
        vec![Self::MySQL, Self::SingleStore]
    }

    /// Parse from a string representation
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "mysql" | "mariadb" => Some(Self::MySQL),
            "singlestore" | "s2" | "memsql" => Some(Self::SingleStore),
            _ => None,
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Login details for one named connection.
///
/// Immutable once loaded; a connection keeps its own copy.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Server hostname or IP address
    pub host: String,
    /// Username for authentication
    pub user: String,
    /// Password for authentication
    pub password: String,
    /// Default database to connect to
    pub database: String,
    /// Server port
    #[serde(deserialize_with = "deserialize_port")]
    pub port: u16,
}

impl Credentials {
    /// Create credentials from their parts
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
        database: impl Into<String>,
        port: u16,
    ) -> Self {
        Self {
            host: host.into(),
            user: user.into(),
            password: password.into(),
            database: database.into(),
            port,
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("port", &self.port)
            .finish()
    }
}

/// Accept the port either as a JSON number or as a numeric string.
fn deserialize_port<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Port {
        Number(u16),
        Text(String),
    }

    match Port::deserialize(deserializer)? {
        Port::Number(port) => Ok(port),
        Port::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid port `{}`", text))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_from_str() {
        assert_eq!(Backend::from_str("mysql"), Some(Backend::MySQL));
        assert_eq!(Backend::from_str("MariaDB"), Some(Backend::MySQL));
        assert_eq!(Backend::from_str("s2"), Some(Backend::SingleStore));
        assert_eq!(Backend::from_str("SingleStore"), Some(Backend::SingleStore));
        assert_eq!(Backend::from_str("postgres"), None);
    }

    #[test]
    fn test_backend_default_port() {
        for backend in Backend::all() {
            assert_eq!(backend.default_port(), 3306);
        }
    }

    #[test]
    fn test_credentials_port_as_number_or_string() {
        let numeric: Credentials = serde_json::from_str(
            r#"{"host":"h","user":"u","password":"p","database":"d","port":3306}"#,
        )
        .unwrap();
        let text: Credentials = serde_json::from_str(
            r#"{"host":"h","user":"u","password":"p","database":"d","port":"3306"}"#,
        )
        .unwrap();

        assert_eq!(numeric, text);
        assert_eq!(numeric.port, 3306);
    }

    #[test]
    fn test_credentials_rejects_bad_port() {
        let result: Result<Credentials, _> = serde_json::from_str(
            r#"{"host":"h","user":"u","password":"p","database":"d","port":"abc"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let creds = Credentials::new("db.local", "admin", "hunter2", "sales", 3306);
        let debug = format!("{:?}", creds);
        assert!(debug.contains("db.local"));
        assert!(!debug.contains("hunter2"));
    }
}
