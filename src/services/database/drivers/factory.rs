//! Connection factory for creating database connections.
//!
//! The factory picks the driver for a backend once, at construction time.

use super::mysql::MySqlConnection;
use super::singlestore::SingleStoreConnection;
use crate::services::database::traits::{Backend, BoxedConnection, Credentials};

/// Factory for creating database connections by backend.
///
/// # Example
///
/// ```ignore
/// use sql_util::services::database::drivers::ConnectionFactory;
/// use sql_util::services::database::traits::{Backend, Credentials};
///
/// let creds = Credentials::new("localhost", "user", "pass", "db", 3306);
/// let mut connection = ConnectionFactory::create(Backend::SingleStore, creds);
/// connection.connect()?;
/// ```
pub struct ConnectionFactory;

impl ConnectionFactory {
    /// Create an unconnected connection for the given backend.
    pub fn create(backend: Backend, credentials: Credentials) -> BoxedConnection {
        match backend {
            Backend::MySQL => MySqlConnection::boxed(credentials),
            Backend::SingleStore => SingleStoreConnection::boxed(credentials),
        }
    }
}
