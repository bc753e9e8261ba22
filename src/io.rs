pub mod csv_rows;
pub mod source;
