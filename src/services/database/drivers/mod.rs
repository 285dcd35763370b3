//! Database driver implementations.
//!
//! This module contains driver implementations for the supported backends:
//!
//! - **MySQL**: MySQL/MariaDB support via SQLx
//! - **SingleStore**: SingleStore support via the SQLx MySQL client
//!
//! Each driver implements the `SqlConnection` trait on top of a shared `Session`.

mod factory;
mod session;

pub mod mysql;
pub mod singlestore;

pub use factory::ConnectionFactory;
