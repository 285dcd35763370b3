//! Database abstraction traits and types.
//!
//! This module provides a unified interface over the supported backends.
//! It defines:
//!
//! - **Types** (`types`): Backend enum and connection credentials
//! - **Record/Value** (`row`): Database-agnostic result rows
//! - **Connection** (`connection`): Core connection trait

pub mod connection;
pub mod row;
pub mod types;

pub use connection::{close_all, BoxedConnection, SqlConnection};

pub use row::{Record, ResultSet, Value};

pub use types::{Backend, Credentials};
