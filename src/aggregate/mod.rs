/// Set and grouping statistics over loaded table references.
pub mod summary;
