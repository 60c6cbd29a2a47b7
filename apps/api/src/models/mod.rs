pub mod reconstruction;
pub mod report;
