use tracing::debug;

use crate::classifier::cte::KnownCteSet;
use crate::classifier::predicate::{Predicate, ReferenceMatch};
use crate::input::reference::TableReference;

/// A named, predicate-backed expectation about the extracted references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    /// Display name.
    pub name: String,
    /// Condition that must hold for the scenario to pass.
    pub predicate: Predicate,
}

impl Scenario {
    /// Create a scenario.
    pub fn new(name: impl Into<String>, predicate: Predicate) -> Self {
        Self {
            name: name.into(),
            predicate,
        }
    }
}

/// Outcome of one scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioVerdict {
    /// Scenario display name.
    pub name: String,
    /// Whether the predicate held.
    pub passed: bool,
}

/// Ordered list of scenarios.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenarioCatalog {
    scenarios: Vec<Scenario>,
}

impl ScenarioCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a scenario, keeping declaration order.
    pub fn with(mut self, name: impl Into<String>, predicate: Predicate) -> Self {
        self.scenarios.push(Scenario::new(name, predicate));
        self
    }

    /// Scenarios exercised by the MySQL extraction test suite.
    ///
    /// Alias handling and EXISTS subqueries leave no trace in the extracted
    /// table list, so they have no predicate here.
    pub fn builtin() -> Self {
        use Predicate::{All, Exists};

        Self::new()
            .with("单表查询", Exists(ReferenceMatch::table(["users"])))
            .with(
                "带数据库名查询",
                Exists(ReferenceMatch::qualified("mydb", "orders")),
            )
            .with(
                "多表JOIN",
                All(vec![
                    Exists(ReferenceMatch::table(["orders"])),
                    Exists(ReferenceMatch::table(["customers"])),
                ]),
            )
            .with(
                "跨数据库JOIN",
                All(vec![
                    Exists(ReferenceMatch::database("sales_db")),
                    Exists(ReferenceMatch::database("mydb")),
                ]),
            )
            .with(
                "INSERT语句",
                Exists(ReferenceMatch::table([
                    "users",
                    "archive_orders",
                    "sales_summary",
                ])),
            )
            .with(
                "INSERT SELECT",
                Exists(ReferenceMatch::table(["archive_orders"])),
            )
            .with(
                "UPDATE语句",
                Exists(ReferenceMatch::table(["users", "products", "orders"])),
            )
            .with("UPDATE多表", Exists(ReferenceMatch::table(["customers"])))
            .with(
                "DELETE语句",
                Exists(ReferenceMatch::table(["temp_logs", "old_records"])),
            )
            .with(
                "DELETE多表",
                Exists(ReferenceMatch::qualified("sales_db", "order_details")),
            )
            .with("WITH CTE", Exists(ReferenceMatch::known_cte()))
            .with("嵌套CTE", Exists(ReferenceMatch::table(["user_totals"])))
            .with(
                "UNION查询",
                Exists(ReferenceMatch::table(["customers", "suppliers"])),
            )
            .with("跨库UNION", Exists(ReferenceMatch::database("archive_db")))
            .with("子查询", Exists(ReferenceMatch::table(["employees"])))
            .with("IN子查询", Exists(ReferenceMatch::table(["products"])))
            .with(
                "REPLACE语句",
                Exists(ReferenceMatch::table(["user_settings"])),
            )
            .with(
                "REPLACE SELECT",
                Exists(ReferenceMatch::table(["product_cache"])),
            )
    }

    /// Evaluate every scenario in declaration order.
    pub fn classify(
        &self,
        references: &[TableReference],
        ctes: &KnownCteSet,
    ) -> Vec<ScenarioVerdict> {
        self.scenarios
            .iter()
            .map(|scenario| {
                let passed = scenario.predicate.evaluate(references, ctes);
                debug!(scenario = %scenario.name, passed, "evaluated scenario");
                ScenarioVerdict {
                    name: scenario.name.clone(),
                    passed,
                }
            })
            .collect()
    }
}
