// Worker-thread plumbing: the public handle, the command channel, the
// spawn/request manager, and the loop that owns the connection.

mod channel;
mod connection;
mod dispatcher;
mod manager;

pub use connection::SqliteDatabase;
