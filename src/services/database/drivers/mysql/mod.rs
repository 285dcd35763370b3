//! MySQL database driver implementation.
//!
//! This module provides a MySQL driver that implements the `SqlConnection`
//! trait using SQLx.
//!
//! # Example
//!
//! ```ignore
//! use sql_util::services::database::drivers::mysql::MySqlConnection;
//! use sql_util::services::database::traits::{Credentials, SqlConnection};
//!
//! let mut conn = MySqlConnection::new(Credentials::new(
//!     "localhost", "user", "password", "mydb", 3306,
//! ));
//! conn.connect()?;
//! ```

mod connection;
mod types;

pub use connection::MySqlConnection;
pub use types::MySqlValueConverter;
