use crate::record::StockRecord;
use std::str::FromStr;
use stock_query::{CompareOp, Condition, Query, QueryError};

/// Evaluate one condition against one record. A missing metric, or NaN on
/// either side of the comparison, makes the condition unsatisfied rather than
/// an error, so a malformed data row silently drops out of the screen.
pub fn evaluate(record: &StockRecord, condition: &Condition) -> bool {
    let value = match record.get(condition.field) {
        Some(v) => v,
        None => return false,
    };

    if value.is_nan() || condition.value.is_nan() {
        return false;
    }

    match condition.op {
        CompareOp::GreaterThan => value > condition.value,
        CompareOp::LessThan => value < condition.value,
        // Exact floating-point equality, no tolerance.
        CompareOp::Equal => value == condition.value,
        CompareOp::GreaterThanOrEqual => value >= condition.value,
        CompareOp::LessThanOrEqual => value <= condition.value,
    }
}

/// A record matches a query iff it satisfies every condition in it.
/// Vacuously true for an empty query.
pub fn matches(record: &StockRecord, query: &Query) -> bool {
    query
        .conditions()
        .iter()
        .all(|condition| evaluate(record, condition))
}

/// Filter a dataset by an already-parsed query, preserving input order.
pub fn filter<'a>(records: &'a [StockRecord], query: &Query) -> Vec<&'a StockRecord> {
    records
        .iter()
        .filter(|record| matches(record, query))
        .collect()
}

/// Parse a raw query string and filter the dataset with it in one step.
/// Parsing errors abort the whole screen; an empty query matches everything.
pub fn screen<'a>(
    records: &'a [StockRecord],
    raw_query: &str,
) -> Result<Vec<&'a StockRecord>, QueryError> {
    let query = Query::from_str(raw_query)?;
    Ok(filter(records, &query))
}
