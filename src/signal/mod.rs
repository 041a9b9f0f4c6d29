mod connection;
pub use self::connection::*;

mod slot;
pub use self::slot::*;

mod signal;
pub use self::signal::*;

mod stream;
pub use self::stream::*;
