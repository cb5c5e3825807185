pub mod chart_text;
pub mod summary_text;
