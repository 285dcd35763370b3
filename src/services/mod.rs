pub mod credentials;
pub mod database;
pub mod export;

pub use credentials::*;
pub use database::*;
pub use export::*;
