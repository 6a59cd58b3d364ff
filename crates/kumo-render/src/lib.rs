#![forbid(unsafe_code)]

//! Output stage for kumo word-cloud layouts: standalone SVG documents and
//! `word,frequency,pos` CSV exports.

pub mod csv;
pub mod svg;

pub use csv::export_csv;
pub use svg::{SvgRenderOptions, render_svg};
