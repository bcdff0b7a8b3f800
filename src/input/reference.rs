use std::fmt;

/// Grouping key for a table reference's database.
///
/// `Default` is a reserved marker for references that carry no database name
/// and rely on the connection's default database. It never compares equal to a
/// named database, even one literally called `default`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DatabaseKey {
    /// The connection's default database.
    Default,
    /// An explicitly named database.
    Named(String),
}

impl DatabaseKey {
    /// Return the database name, or `None` for the default database.
    pub fn name(&self) -> Option<&str> {
        match self {
            DatabaseKey::Default => None,
            DatabaseKey::Named(name) => Some(name),
        }
    }
}

/// A single table mention found by the upstream extractor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableReference {
    /// Database qualifier; `None` means the default database.
    pub database_name: Option<String>,
    /// Table identifier. Never empty.
    pub table_name: String,
}

impl TableReference {
    /// Build a reference, normalizing an empty database name to `None`.
    pub fn new(database_name: Option<&str>, table_name: impl Into<String>) -> Self {
        Self {
            database_name: database_name
                .filter(|name| !name.is_empty())
                .map(ToString::to_string),
            table_name: table_name.into(),
        }
    }

    /// Whether the reference names its database explicitly.
    pub fn has_database(&self) -> bool {
        self.database_name.is_some()
    }

    /// Database grouping key of this reference.
    pub fn database_key(&self) -> DatabaseKey {
        self.database_name
            .clone()
            .map_or(DatabaseKey::Default, DatabaseKey::Named)
    }

    /// Deduplication identity of this reference.
    pub fn qualified_key(&self) -> QualifiedTableKey {
        QualifiedTableKey {
            database: self.database_key(),
            table: self.table_name.clone(),
        }
    }
}

/// Identity of a table reference: database (or default) plus table name.
///
/// Renders as `db.table` when qualified and as `table` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QualifiedTableKey {
    /// Database the table belongs to.
    pub database: DatabaseKey,
    /// Bare table name.
    pub table: String,
}

impl fmt::Display for QualifiedTableKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.database {
            DatabaseKey::Default => write!(f, "{}", self.table),
            DatabaseKey::Named(db) => write!(f, "{db}.{}", self.table),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_database_name_is_treated_as_default() {
        let reference = TableReference::new(Some(""), "users");
        assert!(!reference.has_database());
        assert_eq!(reference.database_key(), DatabaseKey::Default);
        assert_eq!(reference.qualified_key().to_string(), "users");
    }

    #[test]
    fn qualified_key_renders_database_prefix() {
        let reference = TableReference::new(Some("mydb"), "orders");
        assert_eq!(reference.qualified_key().to_string(), "mydb.orders");
    }

    #[test]
    fn database_literally_named_default_is_not_the_default_marker() {
        let named = TableReference::new(Some("default"), "t").database_key();
        assert_ne!(named, DatabaseKey::Default);
        assert_eq!(named.name(), Some("default"));
    }

    #[test]
    fn default_key_orders_before_every_named_database() {
        for name in ["0db", "!db", "-db", "", "mydb"] {
            assert!(DatabaseKey::Default < DatabaseKey::Named(name.to_string()));
        }
    }
}
