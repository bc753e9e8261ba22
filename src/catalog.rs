pub mod labs;
pub mod record;

use std::collections::BTreeSet;

use crate::catalog::labs::LabDirectory;
use crate::catalog::record::{ModelRecord, Tier};
use crate::io::csv_rows::RawRow;

/// The full set of model records for the session.
///
/// Built once after load and read-only from then on. Sorting hands out a
/// fresh ordered view of borrows; nothing reorders or mutates this vec.
#[derive(Debug, Default)]
pub struct Catalog {
    records: Vec<ModelRecord>,
}

impl Catalog {
    /// Enriches each raw row into a record, keeping the csv's row order.
    /// Rows without a Name cell have no identity and are dropped here.
    pub fn from_rows(rows: Vec<RawRow>, labs: &LabDirectory) -> Self {
        let records = rows
            .into_iter()
            .map(|row| ModelRecord::from_row(row, labs))
            .filter(|record| !record.name.is_empty())
            .collect();

        Catalog { records }
    }

    pub fn records(&self) -> &[ModelRecord] {
        &self.records
    }

    pub fn get(&self, name: &str) -> Option<&ModelRecord> {
        self.records.iter().find(|record| record.name == name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every model name, for select-all.
    pub fn all_names(&self) -> BTreeSet<String> {
        self.records
            .iter()
            .map(|record| record.name.clone())
            .collect()
    }

    /// The names that start out selected: everything the csv didn't
    /// explicitly opt out with Selected = "no".
    pub fn default_selection(&self) -> BTreeSet<String> {
        self.records
            .iter()
            .filter(|record| record.is_selected_by_default())
            .map(|record| record.name.clone())
            .collect()
    }

    /// Membership of one price tier, recomputed from input prices.
    pub fn tier_members(&self, tier: Tier) -> BTreeSet<String> {
        self.records
            .iter()
            .filter(|record| record.tier() == tier)
            .map(|record| record.name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, input: &str) -> RawRow {
        [
            ("Name".to_owned(), name.to_owned()),
            ("Input".to_owned(), input.to_owned()),
            ("Output".to_owned(), "$1".to_owned()),
            ("Lab".to_owned(), "x".to_owned()),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn keeps_row_order_and_drops_nameless_rows() {
        let mut nameless = row("", "$1");
        nameless.remove("Name");

        let catalog = Catalog::from_rows(
            vec![row("b", "$1"), nameless, row("a", "$2")],
            &LabDirectory::default(),
        );

        let names: Vec<&str> = catalog.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn tiers_partition_the_catalog() {
        let catalog = Catalog::from_rows(
            vec![
                row("cheap", "$0.50"),
                row("edge-low", "$1.00"),
                row("mid", "$5.00"),
                row("edge-high", "$10.00"),
                row("rich", "$30.00"),
            ],
            &LabDirectory::default(),
        );

        let low = catalog.tier_members(Tier::Low);
        let mid = catalog.tier_members(Tier::Mid);
        let high = catalog.tier_members(Tier::High);

        assert_eq!(low.len() + mid.len() + high.len(), catalog.len());
        assert!(low.contains("cheap"));
        assert!(mid.contains("edge-low"));
        assert!(mid.contains("mid"));
        assert!(high.contains("edge-high"));
        assert!(high.contains("rich"));
        assert!(low.is_disjoint(&mid) && mid.is_disjoint(&high) && low.is_disjoint(&high));
    }
}
