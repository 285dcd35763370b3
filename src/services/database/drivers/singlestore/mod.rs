//! SingleStore database driver implementation.
//!
//! Rows are decoded with the shared `MySqlValueConverter`.

mod connection;

pub use connection::SingleStoreConnection;
