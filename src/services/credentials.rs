//! Credential loading.
//!
//! Credentials live in a JSON object mapping connection names to
//! `{host, user, password, database, port}` records:
//!
//! ```json
//! {
//!     "prod": { "host": "db.internal", "user": "report", "password": "...", "database": "sales", "port": 3306 }
//! }
//! ```

use anyhow::{anyhow, Context, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::database::traits::Credentials;

/// Credentials file read by `get_db_credentials`, relative to the working directory.
pub const CREDENTIALS_FILE: &str = "db_credentials.json";

/// Load and parse every entry in a credentials file.
pub fn load_credentials_file(path: impl AsRef<Path>) -> Result<HashMap<String, Credentials>> {
    let raw = read_raw(path.as_ref())?;
    raw.into_iter()
        .map(|(name, value)| -> Result<(String, Credentials)> {
            let creds = serde_json::from_value(value)
                .with_context(|| format!("Invalid credentials for `{}`", name))?;
            Ok((name, creds))
        })
        .collect()
}

/// Look up `conn_name` in the credentials file at `path`.
///
/// Only the requested entry is validated, so a malformed neighbour does not
/// prevent loading a good one.
pub fn get_db_credentials_from(path: impl AsRef<Path>, conn_name: &str) -> Result<Credentials> {
    let path = path.as_ref();
    let mut raw = read_raw(path)?;
    let value = raw.remove(conn_name).ok_or_else(|| {
        anyhow!(
            "No credentials named `{}` in {}",
            conn_name,
            path.display()
        )
    })?;

    serde_json::from_value(value).with_context(|| format!("Invalid credentials for `{}`", conn_name))
}

/// Look up `conn_name` in `db_credentials.json` in the current directory.
pub fn get_db_credentials(conn_name: &str) -> Result<Credentials> {
    get_db_credentials_from(CREDENTIALS_FILE, conn_name)
}

fn read_raw(path: &Path) -> Result<HashMap<String, serde_json::Value>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, body: &str) -> std::path::PathBuf {
        let path = dir.path().join(CREDENTIALS_FILE);
        std::fs::write(&path, body).unwrap();
        path
    }

    const SAMPLE: &str = r#"{
        "prod": {"host": "db.internal", "user": "report", "password": "s3cret", "database": "sales", "port": 3306},
        "s2": {"host": "svc.singlestore.com", "user": "admin", "password": "pw", "database": "events", "port": "3307"}
    }"#;

    #[test]
    fn test_get_db_credentials_returns_named_entry() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, SAMPLE);

        let creds = get_db_credentials_from(&path, "prod").unwrap();
        assert_eq!(
            creds,
            Credentials::new("db.internal", "report", "s3cret", "sales", 3306)
        );
    }

    #[test]
    fn test_get_db_credentials_missing_name_fails() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, SAMPLE);

        let err = get_db_credentials_from(&path, "staging").unwrap_err();
        assert!(err.to_string().contains("staging"));
    }

    #[test]
    fn test_get_db_credentials_ignores_malformed_neighbours() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            r#"{"broken": {"host": 1}, "prod": {"host": "h", "user": "u", "password": "p", "database": "d", "port": 1}}"#,
        );

        assert!(get_db_credentials_from(&path, "prod").is_ok());
        assert!(get_db_credentials_from(&path, "broken").is_err());
        assert!(load_credentials_file(&path).is_err());
    }

    #[test]
    fn test_load_credentials_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, SAMPLE);

        let all = load_credentials_file(&path).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all["s2"].port, 3307);
    }

    #[test]
    fn test_missing_or_invalid_file() {
        let dir = TempDir::new().unwrap();
        assert!(get_db_credentials_from(dir.path().join("absent.json"), "prod").is_err());

        let path = write_file(&dir, "not json");
        assert!(get_db_credentials_from(&path, "prod").is_err());
    }
}
