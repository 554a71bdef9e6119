use serde::{Deserialize, Serialize};

/// One opaque DDL statement.
///
/// Statements are carried through verbatim; no SQL parsing or validation
/// happens anywhere in this system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DdlStatement {
    pub statement: String,
}

/// A representative query together with its observed execution frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryPattern {
    pub queryid: String,
    pub query: String,
    pub runquantity: u64,
}

/// Client-supplied input for one optimization task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationRequest {
    /// Source location of the schema (e.g. an s3 path), carried for context.
    pub url: String,
    /// Current schema, in statement order.
    pub ddl: Vec<DdlStatement>,
    /// Representative workload, most significant queries first.
    pub queries: Vec<QueryPattern>,
}
