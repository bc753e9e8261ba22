use std::collections::HashMap;

use csv::ReaderBuilder;

use crate::error::Error;
use crate::prelude::*;

/// One data row: header name -> raw cell, both verbatim.
pub type RawRow = HashMap<String, String>;

/// A parsed csv resource: the header row plus one mapping per data row.
#[derive(Debug)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl CsvTable {
    /// The prices csv is useless without its identity and price columns.
    /// Checked against the header, not per row; short rows are fine.
    pub fn require_columns(&self, required: &[&str], source_name: &str) -> Result<(), Error> {
        for column in required {
            if !self.headers.iter().any(|header| header == column) {
                return Err(Error::MissingColumn {
                    source_name: source_name.to_owned(),
                    column: (*column).to_owned(),
                });
            }
        }

        Ok(())
    }
}

/// Parses comma-delimited text with a header row.
///
/// Quoting is off on purpose: the source format carries no escaping, so a
/// quote character is just a character. That also means embedded commas
/// are not supported; a known limitation of the format, not something to
/// fix silently here.
///
/// Rows shorter than the header simply lack those keys, and cells past
/// the header are dropped, same as zipping the header over each line.
pub fn parse_table(csv_text: &str) -> AppResult<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .quoting(false)
        .flexible(true)
        .from_reader(csv_text.trim().as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .into_diagnostic()
        .wrap_err("Could not read the csv header row.")?
        .iter()
        .map(str::to_owned)
        .collect();

    let mut rows = Vec::new();

    for record in reader.records() {
        let record = record
            .into_diagnostic()
            .wrap_err("Could not read a csv data row.")?;

        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(header, cell)| (header.clone(), cell.to_owned()))
            .collect();

        rows.push(row);
    }

    Ok(CsvTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_names_are_kept_verbatim() {
        let table = parse_table("Name,Artificial Analysis Intelligence Index\nm,42").unwrap();

        assert_eq!(
            table.headers,
            vec!["Name", "Artificial Analysis Intelligence Index"]
        );
        assert_eq!(
            table.rows[0].get("Artificial Analysis Intelligence Index"),
            Some(&"42".to_owned())
        );
    }

    #[test]
    fn quotes_are_just_characters() {
        let table = parse_table("Name,Input\n\"quoted\",$1").unwrap();

        assert_eq!(table.rows[0].get("Name"), Some(&"\"quoted\"".to_owned()));
    }

    #[test]
    fn short_rows_lack_the_missing_keys() {
        let table = parse_table("Name,Input,Output\nm,$1").unwrap();

        assert_eq!(table.rows[0].get("Input"), Some(&"$1".to_owned()));
        assert_eq!(table.rows[0].get("Output"), None);
    }

    #[test]
    fn missing_required_column_is_a_load_error() {
        let table = parse_table("Name,Input\nm,$1").unwrap();

        assert!(table.require_columns(&["Name", "Input"], "test.csv").is_ok());
        assert!(table.require_columns(&["Output"], "test.csv").is_err());
    }

    #[test]
    fn empty_body_parses_to_no_rows() {
        let table = parse_table("Name,Input,Output,Lab").unwrap();

        assert!(table.rows.is_empty());
    }
}
