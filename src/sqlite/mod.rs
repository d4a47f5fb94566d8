// SQLite engine adapter, split into sub-modules:
// - config: connection options and open-time pragmas
// - params: bound-argument conversion to engine values
// - engine: row-set and mutation execution against the connection
// - batch: the ordered classify/gate/dispatch loop
// - worker: the connection-owning thread and the public handle

mod batch;
mod config;
mod engine;
mod params;
mod worker;

pub use config::{SqliteOptions, SqliteOptionsBuilder};
pub use worker::SqliteDatabase;
