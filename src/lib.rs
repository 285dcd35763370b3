//! sql-util - query MySQL and SingleStore, export the results.
//!
//! This crate provides:
//!
//! - **Connections**: one `SqlConnection` trait with a MySQL and a SingleStore
//!   driver, built from named credentials
//! - **Export**: CSV and JSON writers/readers for result sets, query file
//!   loading and result directory cleanup
//!
//! # Example
//!
//! ```rust,ignore
//! use sql_util::{get_db_credentials, to_json, Backend, ConnectionFactory};
//!
//! fn main() -> anyhow::Result<()> {
//!     sql_util::logging::init()?;
//!
//!     let mut conn = ConnectionFactory::create(Backend::MySQL, get_db_credentials("prod")?);
//!     conn.connect()?;
//!     let rows = conn.execute_and_fetchall("SELECT * FROM orders", &[])?;
//!     to_json("results", "orders", &rows)?;
//!     conn.close()?;
//!     Ok(())
//! }
//! ```

pub mod logging;
pub mod services;

pub use services::credentials::{get_db_credentials, get_db_credentials_from, load_credentials_file};
pub use services::database::{
    close_all, Backend, BoxedConnection, ConnectionFactory, Credentials, MySqlConnection, Record,
    ResultSet, SingleStoreConnection, SqlConnection, Value,
};
pub use services::export::{
    clear_all_results, from_csv, from_json, get_query_from_file, to_csv, to_json,
};
