pub mod dataset;
pub mod summary_report;
