/// Reads the extractor's JSON output into table references.
pub mod loader;
/// Table reference, database key, and qualified table key types.
pub mod reference;
