use lakeopt_model::OptimizationRequest;

/// Build the instruction sent to the text-generation model.
///
/// The DDL is embedded in full; the workload is capped at the first
/// `preview` queries so prompt size stays bounded regardless of input.
pub(crate) fn build_prompt(request: &OptimizationRequest, preview: usize) -> String {
    let ddl = request
        .ddl
        .iter()
        .map(|d| d.statement.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    let queries = request
        .queries
        .iter()
        .take(preview)
        .map(|q| format!("{}: {} (runs {} times)", q.queryid, q.query, q.runquantity))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"You are an expert in optimizing a Data Lakehouse built on Trino + Iceberg + S3.
Analyze the DDL and the most frequently executed SQL queries.
Improve performance through:
- Denormalizing tables that are frequently joined
- Partitioning by date or another suitable column
- Changing column data types
- Creating flat tables to speed up analytics

IMPORTANT:
1. The first DDL command must be: CREATE SCHEMA <catalog>.<new_schema>
2. Every table must use its full path: catalog.schema.table
3. Return strictly JSON in this format:
{{
  "ddl": [{{"statement": "..."}}, ...],
  "migrations": [{{"statement": "..."}}, ...],
  "queries": [{{"queryid": "...", "query": "..."}}, ...]
}}

DDL:
{ddl}

Query examples:
{queries}

Return only the JSON, no commentary."#
    )
}
