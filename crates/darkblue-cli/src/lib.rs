pub mod replay;
pub mod report;
pub mod sweep;
