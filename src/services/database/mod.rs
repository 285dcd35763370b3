pub mod drivers;
pub mod traits;

pub use drivers::mysql::MySqlConnection;
pub use drivers::singlestore::SingleStoreConnection;
pub use drivers::ConnectionFactory;

pub use traits::{
    close_all, Backend, BoxedConnection, Credentials, Record, ResultSet, SqlConnection, Value,
};
