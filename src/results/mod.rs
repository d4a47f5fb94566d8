// Result shaping: per-row access and the uniform per-statement record.

mod record;
mod row;

pub use record::StatementOutcome;
pub(crate) use record::{Execution, normalize};
pub use row::SqlRow;
