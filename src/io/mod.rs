pub mod history;
pub mod reporting;
