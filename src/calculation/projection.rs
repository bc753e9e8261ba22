use crate::calculation::sorting::sort_records;
use crate::catalog::Catalog;
use crate::prelude::*;
use crate::store::BoardState;

/// The reduced shape a chart widget needs: all four metrics, every time.
/// Which of them gets drawn is the renderer's business (display mode),
/// not this projection's.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow {
    pub name: String,
    pub input: f64,
    pub output: f64,
    pub combined: f64,
    pub value: f64,
}

/// One table line. The table never hides anything; deselected rows are
/// listed with `selected` false and it's up to the widget what to do
/// with that.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub selected: bool,
    pub name: String,
    pub lab: String,
    pub input: String,
    pub output: String,
    pub combined: f64,
    pub intelligence: f64,
    pub value: f64,
    pub release_date: String,
    /// External model page, when the csv row carried a slug.
    pub link: Option<String>,
}

/// Sorts the catalog by the current rule, keeps only selected rows, maps
/// to the chart shape. An uninitialized selection projects to nothing.
pub fn chart_rows(catalog: &Catalog, state: &BoardState) -> Vec<ChartRow> {
    sort_records(catalog.records(), state.sorting.as_ref())
        .into_iter()
        .filter(|record| state.selection.contains(&record.name))
        .map(|record| ChartRow {
            name: record.name.clone(),
            input: record.input_price,
            output: record.output_price,
            combined: record.combined_price,
            value: record.value,
        })
        .collect()
}

/// Sorts the catalog by the current rule and lists every row, each with
/// its selection membership.
pub fn table_rows(catalog: &Catalog, state: &BoardState) -> Vec<TableRow> {
    sort_records(catalog.records(), state.sorting.as_ref())
        .into_iter()
        .map(|record| TableRow {
            selected: state.selection.contains(&record.name),
            name: record.name.clone(),
            lab: record.lab_full_name.clone(),
            input: record.input_raw.clone(),
            output: record.output_raw.clone(),
            combined: record.combined_price,
            intelligence: record.intelligence,
            value: record.value,
            release_date: record.formatted_release_date.clone(),
            link: record.openrouter_link.clone(),
        })
        .collect()
}
