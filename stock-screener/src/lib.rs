pub mod record;
pub mod screen;

pub use record::StockRecord;
pub use screen::{evaluate, filter, matches, screen};
pub use stock_query::{CompareOp, Condition, FieldKey, Query, QueryError};
