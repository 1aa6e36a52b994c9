//! Excel access for the DRT worksheet
//!
//! - Import: first worksheet of an .xlsx file → `Grid`
//! - Layout: fixed cell positions read from that grid

mod importer;
pub mod layout;

pub use importer::Grid;
pub use layout::{CellRef, DrtLayout};
