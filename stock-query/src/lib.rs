pub mod errors;
pub mod fields;

pub use errors::QueryError;
pub use fields::FieldKey;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Comparison operator of a single query clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
    GreaterThan,
    LessThan,
    Equal,
    GreaterThanOrEqual,
    LessThanOrEqual,
}

impl FromStr for CompareOp {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ">" => Ok(CompareOp::GreaterThan),
            "<" => Ok(CompareOp::LessThan),
            "=" => Ok(CompareOp::Equal),
            ">=" => Ok(CompareOp::GreaterThanOrEqual),
            "<=" => Ok(CompareOp::LessThanOrEqual),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for CompareOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompareOp::GreaterThan => write!(f, ">"),
            CompareOp::LessThan => write!(f, "<"),
            CompareOp::Equal => write!(f, "="),
            CompareOp::GreaterThanOrEqual => write!(f, ">="),
            CompareOp::LessThanOrEqual => write!(f, "<="),
        }
    }
}

/// One parsed `field operator value` clause, ready for evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub field: FieldKey,
    pub op: CompareOp,
    pub value: f64,
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.field, self.op, self.value)
    }
}

/// A full screening query: an ordered sequence of conditions, implicitly
/// joined by logical AND. An empty query matches every record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Query {
    conditions: Vec<Condition>,
}

impl Query {
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }
}

impl FromStr for Query {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Query::default());
        }

        let conditions = s
            .split("AND")
            .map(str::trim)
            .filter(|clause| !clause.is_empty())
            .map(parse_clause)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Query { conditions })
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let clauses: Vec<String> = self.conditions.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", clauses.join(" AND "))
    }
}

/// Parse one clause of the form `field op value`, where the field segment
/// starts with a letter and may contain letters, spaces and `/`, the operator
/// is one of `>= <= > < =` (multi-char forms tried first), and the value is a
/// signed decimal. Whitespace around the operator is optional.
fn parse_clause(clause: &str) -> Result<Condition, QueryError> {
    let re = Regex::new(r"^([A-Za-z][A-Za-z /]*?)\s*(>=|<=|>|<|=)\s*(-?\d+\.?\d*)$").unwrap();

    let captures = re.captures(clause).ok_or_else(|| QueryError::InvalidFormat {
        clause: clause.to_string(),
    })?;

    let raw_field = captures[1].trim();
    let field = FieldKey::resolve(raw_field).map_err(|_| QueryError::UnknownField {
        clause: clause.to_string(),
        field: raw_field.to_string(),
    })?;

    let op = CompareOp::from_str(&captures[2]).map_err(|_| QueryError::InvalidFormat {
        clause: clause.to_string(),
    })?;

    // The pattern already constrains the value segment to a decimal, so this
    // is a defensive check.
    let value: f64 = captures[3].parse().map_err(|_| QueryError::InvalidNumber {
        clause: clause.to_string(),
        value: captures[3].to_string(),
    })?;

    Ok(Condition { field, op, value })
}
