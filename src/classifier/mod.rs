/// Scenario catalog and per-scenario verdicts.
pub mod catalog;
/// Known common-table-expression names.
pub mod cte;
/// Existence and conjunction predicates over table references.
pub mod predicate;
