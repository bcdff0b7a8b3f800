use crate::classifier::cte::KnownCteSet;
use crate::input::reference::TableReference;

/// Which table names a [`ReferenceMatch`] accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableFilter {
    /// Any table name.
    Any,
    /// One of the listed names.
    OneOf(Vec<String>),
    /// Any member of the known CTE set.
    KnownCte,
}

impl TableFilter {
    /// Filter accepting exactly the given names.
    pub fn one_of<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TableFilter::OneOf(names.into_iter().map(Into::into).collect())
    }

    fn accepts(&self, table_name: &str, ctes: &KnownCteSet) -> bool {
        match self {
            TableFilter::Any => true,
            TableFilter::OneOf(names) => names.iter().any(|name| name == table_name),
            TableFilter::KnownCte => ctes.contains(table_name),
        }
    }
}

/// Condition on a single table reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceMatch {
    /// Required database name; `None` accepts any database, default included.
    pub database: Option<String>,
    /// Accepted table names.
    pub tables: TableFilter,
}

impl ReferenceMatch {
    /// Match references to any of `names`, in any database.
    pub fn table<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            database: None,
            tables: TableFilter::one_of(names),
        }
    }

    /// Match any reference qualified with `database`.
    pub fn database(database: impl Into<String>) -> Self {
        Self {
            database: Some(database.into()),
            tables: TableFilter::Any,
        }
    }

    /// Match `database.table` exactly.
    pub fn qualified(database: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            database: Some(database.into()),
            tables: TableFilter::OneOf(vec![table.into()]),
        }
    }

    /// Match references to any known CTE.
    pub fn known_cte() -> Self {
        Self {
            database: None,
            tables: TableFilter::KnownCte,
        }
    }

    /// Whether `reference` satisfies this match.
    pub fn matches(&self, reference: &TableReference, ctes: &KnownCteSet) -> bool {
        let database_ok = match &self.database {
            None => true,
            Some(db) => reference.database_name.as_deref() == Some(db.as_str()),
        };
        database_ok && self.tables.accepts(&reference.table_name, ctes)
    }
}

/// Composable scenario predicate over the whole reference sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// At least one reference satisfies the match.
    Exists(ReferenceMatch),
    /// Every part holds. An empty conjunction is false.
    All(Vec<Predicate>),
}

impl Predicate {
    /// Evaluate against the loaded references.
    pub fn evaluate(&self, references: &[TableReference], ctes: &KnownCteSet) -> bool {
        match self {
            Predicate::Exists(m) => references.iter().any(|r| m.matches(r, ctes)),
            Predicate::All(parts) => {
                !parts.is_empty() && parts.iter().all(|p| p.evaluate(references, ctes))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs() -> Vec<TableReference> {
        vec![
            TableReference::new(Some("mydb"), "orders"),
            TableReference::new(None, "customers"),
        ]
    }

    #[test]
    fn database_constraint_requires_exact_name() {
        let ctes = KnownCteSet::builtin();
        assert!(Predicate::Exists(ReferenceMatch::qualified("mydb", "orders"))
            .evaluate(&refs(), &ctes));
        assert!(!Predicate::Exists(ReferenceMatch::qualified("sales_db", "orders"))
            .evaluate(&refs(), &ctes));
    }

    #[test]
    fn unqualified_match_ignores_database() {
        let ctes = KnownCteSet::builtin();
        assert!(Predicate::Exists(ReferenceMatch::table(["orders"])).evaluate(&refs(), &ctes));
    }

    #[test]
    fn database_only_match_does_not_accept_default_database() {
        let ctes = KnownCteSet::builtin();
        let refs = vec![TableReference::new(None, "orders")];
        assert!(!Predicate::Exists(ReferenceMatch::database("mydb")).evaluate(&refs, &ctes));
    }

    #[test]
    fn conjunction_requires_every_part() {
        let ctes = KnownCteSet::builtin();
        let both = Predicate::All(vec![
            Predicate::Exists(ReferenceMatch::table(["orders"])),
            Predicate::Exists(ReferenceMatch::table(["customers"])),
        ]);
        let missing = Predicate::All(vec![
            Predicate::Exists(ReferenceMatch::table(["orders"])),
            Predicate::Exists(ReferenceMatch::table(["suppliers"])),
        ]);
        assert!(both.evaluate(&refs(), &ctes));
        assert!(!missing.evaluate(&refs(), &ctes));
    }

    #[test]
    fn empty_conjunction_is_false() {
        let ctes = KnownCteSet::builtin();
        assert!(!Predicate::All(Vec::new()).evaluate(&refs(), &ctes));
    }

    #[test]
    fn known_cte_filter_uses_injected_set() {
        let custom = KnownCteSet::new(["customers"]);
        let m = Predicate::Exists(ReferenceMatch::known_cte());
        assert!(m.evaluate(&refs(), &custom));
        assert!(!m.evaluate(&refs(), &KnownCteSet::builtin()));
    }
}
