//! Spreadsheet assembly: content classification, cell addressing, a dense
//! grid with derived styles, and the two CSV encodings.

pub mod address;
pub mod classify;
pub mod delimited;
pub mod grid;
pub mod report;
pub mod structured;
pub mod style;
