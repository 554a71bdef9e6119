use serde::{Deserialize, Serialize};

use super::DdlStatement;

/// A rewritten version of one input query, keyed by its original identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewrittenQuery {
    pub queryid: String,
    pub query: String,
}

/// Schema produced by a successful optimization.
///
/// Three ordered lists of opaque statements; only their structural shape is
/// ever validated, never the SQL content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// New or optimized DDL statements.
    pub ddl: Vec<DdlStatement>,
    /// Statements transforming existing state into the optimized schema.
    pub migrations: Vec<DdlStatement>,
    /// Rewritten versions of the input queries.
    pub queries: Vec<RewrittenQuery>,
}
