//! Core database connection trait.
//!
//! This module defines the `SqlConnection` trait that both database drivers
//! implement, plus `close_all` for tearing down several connections at once.

use anyhow::Result;

use super::row::{Record, Value};
use super::types::{Backend, Credentials};

/// Core trait for all database connections.
///
/// A connection starts unconnected, is opened once with `connect`, runs any
/// number of statements, and is released with `close`. All calls block the
/// current thread until the driver returns.
///
/// # Example
///
/// ```ignore
/// use sql_util::{ConnectionFactory, Backend, get_db_credentials};
///
/// let mut conn = ConnectionFactory::create(Backend::MySQL, get_db_credentials("prod")?);
/// conn.connect()?;
/// let rows = conn.execute_and_fetchall("SELECT id, name FROM users WHERE id > ?", &[10.into()])?;
/// conn.close()?;
/// ```
pub trait SqlConnection: Send {
    /// Get the backend for this connection
    fn backend(&self) -> Backend;

    /// Get the credentials this connection was built from
    fn credentials(&self) -> &Credentials;

    /// Establish the session with the database.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established, such as:
    /// - Invalid credentials
    /// - Network errors
    /// - Server not available
    ///
    /// Connecting an already connected or closed connection is also an error.
    fn connect(&mut self) -> Result<()>;

    /// Execute a statement and fetch every resulting row.
    ///
    /// When `params` is non-empty they are bound positionally to `?`
    /// placeholders; otherwise `sql` is sent as-is without binding.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection is not open, or whatever the driver
    /// reports (lost connection, syntax error, constraint violation).
    fn execute_and_fetchall(&mut self, sql: &str, params: &[Value]) -> Result<Vec<Record>>;

    /// Close the session.
    ///
    /// Closing a connection that is not open is an error; close is not idempotent.
    fn close(&mut self) -> Result<()>;

    /// Check whether the session is currently open.
    fn is_connected(&self) -> bool;

    /// Get a display name for the connection, "user@host:port/database".
    fn display_name(&self) -> String {
        let creds = self.credentials();
        format!(
            "{}@{}:{}/{}",
            creds.user, creds.host, creds.port, creds.database
        )
    }
}

/// A boxed database connection trait object.
pub type BoxedConnection = Box<dyn SqlConnection>;

/// Close every connection in order, stopping at the first failure.
pub fn close_all(connections: &mut [BoxedConnection]) -> Result<()> {
    for connection in connections.iter_mut() {
        connection.close()?;
    }
    Ok(())
}
