//! Core extraction logic for the DRT sheet

pub mod columns;
pub mod extractor;
pub mod fields;

pub use columns::{detect_orbital_columns, ColumnSelection};
pub use extractor::{extract_config, Extractor};
pub use fields::{extract_point_group, extract_symmetry, spin_from_multiplicity};
