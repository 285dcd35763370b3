//! SingleStore connection implementation.
//!
//! SingleStore speaks the MySQL wire protocol, so this driver reuses the SQLx
//! MySQL client. It differs from the MySQL driver only in the session options
//! set at connect time.

use anyhow::Result;
use sqlx::mysql::MySqlConnectOptions;

use crate::services::database::drivers::session::Session;
use crate::services::database::traits::{
    Backend, BoxedConnection, Credentials, Record, SqlConnection, Value,
};

/// SingleStore database connection.
#[derive(Debug)]
pub struct SingleStoreConnection {
    session: Session,
}

impl SingleStoreConnection {
    /// Create a new SingleStore connection from credentials.
    ///
    /// This does not connect immediately - call `connect()` to open the session.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            session: Session::new(Backend::SingleStore, credentials),
        }
    }

    /// Create a boxed connection (for factory use).
    pub fn boxed(credentials: Credentials) -> BoxedConnection {
        Box::new(Self::new(credentials))
    }

    /// Build connect options.
    ///
    /// SQLx forces `PIPES_AS_CONCAT` and `NO_ENGINE_SUBSTITUTION` into
    /// `sql_mode` on MySQL; SingleStore keeps its own server defaults.
    fn build_connect_options(&self) -> MySqlConnectOptions {
        self.session
            .base_connect_options()
            .pipes_as_concat(false)
            .no_engine_substitution(false)
    }
}

impl SqlConnection for SingleStoreConnection {
    fn backend(&self) -> Backend {
        self.session.backend()
    }

    fn credentials(&self) -> &Credentials {
        self.session.credentials()
    }

    fn connect(&mut self) -> Result<()> {
        let options = self.build_connect_options();
        self.session.open(options)
    }

    fn execute_and_fetchall(&mut self, sql: &str, params: &[Value]) -> Result<Vec<Record>> {
        self.session.execute_and_fetchall(sql, params)
    }

    fn close(&mut self) -> Result<()> {
        self.session.close()
    }

    fn is_connected(&self) -> bool {
        self.session.is_connected()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_credentials() -> Credentials {
        Credentials::new("svc-1234.singlestore.com", "admin", "secret", "analytics", 3306)
    }

    #[test]
    fn test_singlestore_connection_new() {
        let conn = SingleStoreConnection::new(create_test_credentials());

        assert_eq!(conn.backend(), Backend::SingleStore);
        assert_eq!(
            conn.display_name(),
            "admin@svc-1234.singlestore.com:3306/analytics"
        );
        assert!(!conn.is_connected());
    }

    #[test]
    fn test_build_connect_options() {
        let conn = SingleStoreConnection::new(create_test_credentials());
        let options = conn.build_connect_options();

        assert_eq!(options.get_host(), "svc-1234.singlestore.com");
        assert_eq!(options.get_database(), Some("analytics"));
    }

    #[test]
    fn test_execute_before_connect_is_an_error() {
        let mut conn = SingleStoreConnection::new(create_test_credentials());
        let result = conn.execute_and_fetchall("SELECT 1", &[]);
        assert!(result.is_err());
    }
}
