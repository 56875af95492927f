//! Output module
//! Report structures and format rendering

pub mod formatter;
pub mod report;
