//! Terminal presentation: themes, status messages and result rendering.

pub mod alert;
pub mod output_format;
pub mod results;
pub mod theme;
