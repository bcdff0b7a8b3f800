use std::collections::{BTreeMap, BTreeSet};

use crate::classifier::cte::KnownCteSet;
use crate::input::reference::{DatabaseKey, QualifiedTableKey, TableReference};

/// Aggregate statistics over one run's table references.
///
/// All sets and maps are ordered, so iteration order never depends on the
/// input order.
#[derive(Debug, Clone)]
pub struct ReferenceSummary<'a> {
    /// Number of input references, duplicates included.
    pub total_count: usize,
    /// Distinct (database, table) identities.
    pub unique_keys: BTreeSet<QualifiedTableKey>,
    /// References that name their database.
    pub with_database: Vec<&'a TableReference>,
    /// References that rely on the default database.
    pub without_database: Vec<&'a TableReference>,
    /// References whose table name is a known CTE, duplicates included.
    pub cte_references: Vec<&'a TableReference>,
    /// Every explicitly named database.
    pub observed_databases: BTreeSet<String>,
    /// Distinct table names per database key.
    pub database_groups: BTreeMap<DatabaseKey, BTreeSet<String>>,
}

impl<'a> ReferenceSummary<'a> {
    /// Compute the summary for `references`.
    pub fn from_references(references: &'a [TableReference], ctes: &KnownCteSet) -> Self {
        let mut summary = ReferenceSummary {
            total_count: references.len(),
            unique_keys: BTreeSet::new(),
            with_database: Vec::new(),
            without_database: Vec::new(),
            cte_references: Vec::new(),
            observed_databases: BTreeSet::new(),
            database_groups: BTreeMap::new(),
        };

        for reference in references {
            summary.unique_keys.insert(reference.qualified_key());

            if reference.has_database() {
                summary.with_database.push(reference);
            } else {
                summary.without_database.push(reference);
            }
            summary
                .observed_databases
                .extend(reference.database_name.iter().cloned());

            if ctes.contains(&reference.table_name) {
                summary.cte_references.push(reference);
            }

            summary
                .database_groups
                .entry(reference.database_key())
                .or_default()
                .insert(reference.table_name.clone());
        }

        summary
    }

    /// Unique keys ordered by their rendered `db.table` form.
    pub fn sorted_unique_keys(&self) -> Vec<&QualifiedTableKey> {
        let mut keys: Vec<(String, &QualifiedTableKey)> = self
            .unique_keys
            .iter()
            .map(|key| (key.to_string(), key))
            .collect();
        keys.sort_by(|a, b| a.0.cmp(&b.0));
        keys.into_iter().map(|(_, key)| key).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_unique_keys_orders_by_rendered_name() {
        let refs = vec![
            TableReference::new(None, "users"),
            TableReference::new(Some("mydb"), "orders"),
            TableReference::new(None, "accounts"),
        ];
        let ctes = KnownCteSet::builtin();
        let summary = ReferenceSummary::from_references(&refs, &ctes);
        let rendered: Vec<String> = summary
            .sorted_unique_keys()
            .into_iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(rendered, vec!["accounts", "mydb.orders", "users"]);
    }
}
