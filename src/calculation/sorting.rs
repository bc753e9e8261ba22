use std::cmp::Ordering;

use itertools::Itertools;

use crate::catalog::record::ModelRecord;
use crate::prelude::*;

/// What a sort can key on. The named variants are the table's own columns;
/// anything else sorts on the raw csv cell of that header, when both rows
/// have one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SortColumn {
    Name,
    Input,
    Output,
    Lab,
    Combined,
    Intelligence,
    Value,
    Raw(String),
}

impl SortColumn {
    /// Column ids arrive as plain strings from the cli (and from table
    /// widgets in general), so this never fails; an unknown id just
    /// becomes a raw-cell sort. Matching is case-insensitive for the
    /// known names.
    pub fn parse(id: &str) -> Self {
        match id.to_lowercase().as_str() {
            "name" => SortColumn::Name,
            "input" => SortColumn::Input,
            "output" => SortColumn::Output,
            "lab" => SortColumn::Lab,
            "combined" => SortColumn::Combined,
            "intelligence" => SortColumn::Intelligence,
            "value" => SortColumn::Value,
            _ => SortColumn::Raw(id.to_owned()),
        }
    }
}

/// Single-column sort. At most one of these is active at a time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SortRule {
    pub column: SortColumn,
    pub descending: bool,
}

impl Default for SortRule {
    /// The dashboard opens sorted by combined price, cheap first.
    fn default() -> Self {
        SortRule {
            column: SortColumn::Combined,
            descending: false,
        }
    }
}

/// Orders a view of the records without touching their storage.
///
/// The sort is stable, so equal keys keep their catalog order. Descending
/// only flips the comparator's answer, never its semantics. No rule means
/// the natural load order comes back as-is.
pub fn sort_records<'a>(
    records: &'a [ModelRecord],
    rule: Option<&SortRule>,
) -> Vec<&'a ModelRecord> {
    let Some(rule) = rule else {
        return records.iter().collect();
    };

    records
        .iter()
        .sorted_by(|a, b| {
            let ordering = compare(&rule.column, a, b);

            if rule.descending {
                ordering.reverse()
            } else {
                ordering
            }
        })
        .collect()
}

fn compare(column: &SortColumn, a: &ModelRecord, b: &ModelRecord) -> Ordering {
    match column {
        SortColumn::Name => lexicographic(&a.name, &b.name),
        SortColumn::Input => a.input_price.total_cmp(&b.input_price),
        SortColumn::Output => a.output_price.total_cmp(&b.output_price),
        SortColumn::Lab => lexicographic(&a.lab_full_name, &b.lab_full_name),
        SortColumn::Combined => a.combined_price.total_cmp(&b.combined_price),
        SortColumn::Intelligence => a.intelligence.total_cmp(&b.intelligence),
        SortColumn::Value => a.value.total_cmp(&b.value),
        SortColumn::Raw(header) => match (a.raw_field(header), b.raw_field(header)) {
            (Some(left), Some(right)) => lexicographic(left, right),
            // A cell only one row has tells us nothing; treat as equal
            // and let stability keep the load order.
            _ => Ordering::Equal,
        },
    }
}

/// Case-insensitive first, bytes as the tiebreak. Not a full locale
/// collation, but close enough to the browser's localeCompare for ascii
/// model names.
fn lexicographic(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
