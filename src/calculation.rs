pub mod board_report;
pub mod pricing;
pub mod projection;
pub mod sorting;
