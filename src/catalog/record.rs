use std::collections::HashMap;

use jiff::civil::Date;

use crate::calculation::pricing::{combined_price, parse_number, parse_price, value_score};
use crate::catalog::labs::LabDirectory;
use crate::config::defaults::{HIGH_TIER_FLOOR, LOW_TIER_CEILING, OPENROUTER_BASE_URL};
use crate::io::csv_rows::RawRow;
use crate::prelude::*;

// The csv header names, verbatim. Spaces included, that's how the file is.
const COL_NAME: &str = "Name";
const COL_INPUT: &str = "Input";
const COL_OUTPUT: &str = "Output";
const COL_LAB: &str = "Lab";
const COL_SLUG: &str = "Slug";
const COL_RELEASE_DATE: &str = "Release Date";
const COL_SELECTED: &str = "Selected";
const COL_INTELLIGENCE: &str = "Artificial Analysis Intelligence Index";

/// Price bucket, decided by the input price alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Low,
    Mid,
    High,
}

impl Tier {
    /// The boundaries go right: exactly $1 is mid, exactly $10 is high.
    pub fn of(input_price: f64) -> Self {
        if input_price < LOW_TIER_CEILING {
            Tier::Low
        } else if input_price < HIGH_TIER_FLOOR {
            Tier::Mid
        } else {
            Tier::High
        }
    }
}

/// One row of the catalog.
///
/// The raw fields are what the csv said, untouched. The derived fields are
/// computed exactly once, right here in `from_row`, as pure functions of the
/// raw ones. Nothing ever writes to a record after that, so the two halves
/// cannot drift apart.
#[derive(Debug, Clone, Serialize)]
pub struct ModelRecord {
    // Raw.
    pub name: String,
    pub lab: String,
    pub input_raw: String,
    pub output_raw: String,
    pub slug: Option<String>,
    pub release_date_raw: Option<String>,
    pub selected_raw: Option<String>,
    pub intelligence_raw: Option<String>,
    /// Columns we don't model, preserved verbatim. Sortable by header name.
    pub extra: HashMap<String, String>,

    // Derived.
    pub input_price: f64,
    pub output_price: f64,
    pub combined_price: f64,
    pub intelligence: f64,
    pub value: f64,
    pub lab_full_name: String,
    pub formatted_release_date: String,
    pub openrouter_link: Option<String>,
}

impl ModelRecord {
    /// Consumes one parsed csv row. Cells the flexible reader never saw
    /// default to empty, which the price parser then coerces to zero.
    pub fn from_row(mut row: RawRow, labs: &LabDirectory) -> Self {
        let name = row.remove(COL_NAME).unwrap_or_default();
        let lab = row.remove(COL_LAB).unwrap_or_default();
        let input_raw = row.remove(COL_INPUT).unwrap_or_default();
        let output_raw = row.remove(COL_OUTPUT).unwrap_or_default();
        let slug = row.remove(COL_SLUG).filter(|s| !s.is_empty());
        let release_date_raw = row.remove(COL_RELEASE_DATE).filter(|s| !s.is_empty());
        let selected_raw = row.remove(COL_SELECTED).filter(|s| !s.is_empty());
        let intelligence_raw = row.remove(COL_INTELLIGENCE).filter(|s| !s.is_empty());

        let input_price = parse_price(&input_raw);
        let output_price = parse_price(&output_raw);
        let combined = combined_price(&input_raw, &output_raw);
        let intelligence = intelligence_raw.as_deref().map(parse_number).unwrap_or(0.0);
        let value = value_score(intelligence, combined);
        let lab_full_name = labs.full_name(&lab).to_owned();
        let formatted_release_date = format_release_date(release_date_raw.as_deref());
        let openrouter_link = build_link(slug.as_deref(), labs.canonical_slug(&lab));

        ModelRecord {
            name,
            lab,
            input_raw,
            output_raw,
            slug,
            release_date_raw,
            selected_raw,
            intelligence_raw,
            extra: row,
            input_price,
            output_price,
            combined_price: combined,
            intelligence,
            value,
            lab_full_name,
            formatted_release_date,
            openrouter_link,
        }
    }

    pub fn tier(&self) -> Tier {
        Tier::of(self.input_price)
    }

    /// Everything is in the default selection unless the csv opted it out
    /// with the literal string "no".
    pub fn is_selected_by_default(&self) -> bool {
        self.selected_raw.as_deref() != Some("no")
    }

    /// Raw cell lookup by header name, named columns first, then the
    /// preserved extras. This is what the unrecognized-column sort reads.
    pub fn raw_field(&self, header: &str) -> Option<&str> {
        let named = match header {
            COL_NAME => Some(self.name.as_str()),
            COL_LAB => Some(self.lab.as_str()),
            COL_INPUT => Some(self.input_raw.as_str()),
            COL_OUTPUT => Some(self.output_raw.as_str()),
            COL_SLUG => self.slug.as_deref(),
            COL_RELEASE_DATE => self.release_date_raw.as_deref(),
            COL_SELECTED => self.selected_raw.as_deref(),
            COL_INTELLIGENCE => self.intelligence_raw.as_deref(),
            _ => None,
        };

        named.or_else(|| self.extra.get(header).map(String::as_str))
    }
}

/// External page for the model, when the csv gave us a slug to build one
/// from. The lab part goes through the directory's canonical slug.
fn build_link(model_slug: Option<&str>, lab_slug: &str) -> Option<String> {
    let model_slug = model_slug?;

    Some(format!("{OPENROUTER_BASE_URL}/{lab_slug}/{model_slug}"))
}

/// "2024-04-09" -> "Apr 9, 2024".
///
/// Absent (or a bare "-") renders as "-". A date jiff can't read passes
/// through verbatim; better to show the odd cell than hide it.
fn format_release_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty() && *s != "-") else {
        return "-".to_owned();
    };

    match raw.parse::<Date>() {
        Ok(date) => date.strftime("%b %-d, %Y").to_string(),
        Err(_) => raw.to_owned(),
    }
}
