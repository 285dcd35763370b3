//! MySQL connection implementation.
//!
//! This module implements the `SqlConnection` trait for MySQL using a single
//! SQLx `MySqlConnection`.

use anyhow::Result;
use sqlx::mysql::MySqlConnectOptions;

use crate::services::database::drivers::session::Session;
use crate::services::database::traits::{
    Backend, BoxedConnection, Credentials, Record, SqlConnection, Value,
};

/// MySQL database connection.
///
/// This does not connect on construction - call `connect()` to open the session.
#[derive(Debug)]
pub struct MySqlConnection {
    session: Session,
}

impl MySqlConnection {
    /// Create a new MySQL connection from credentials.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            session: Session::new(Backend::MySQL, credentials),
        }
    }

    /// Create a boxed connection (for factory use).
    pub fn boxed(credentials: Credentials) -> BoxedConnection {
        Box::new(Self::new(credentials))
    }

    /// Build MySqlConnectOptions from the credentials.
    fn build_connect_options(&self) -> MySqlConnectOptions {
        self.session.base_connect_options()
    }
}

impl SqlConnection for MySqlConnection {
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
