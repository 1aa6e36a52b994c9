//! drt-parse - DRT spreadsheet to chemistry input script
//!
//! Reads the fixed-layout distinct row table (DRT) worksheet, validates the
//! handful of scalar fields it carries, and writes the `set key value` script
//! consumed by the downstream MCSCF/MRCI driver.
//!
//! # Pipeline
//!
//! 1. Resolve the input and snapshot it at `Scripts/DRT.xlsx`
//! 2. Load the first worksheet into a [`Grid`]
//! 3. Detect the populated orbital columns from the header row
//! 4. Extract and validate every field in one pass
//! 5. Write `Scripts/input_values.txt`
//!
//! # Example
//!
//! ```no_run
//! use drt_parse::cli::{run, Paths};
//! use drt_parse::excel::DrtLayout;
//!
//! let report = run(None, &Paths::default(), &DrtLayout::default())?;
//! println!("{}", report.config.spin_state);
//! # Ok::<(), drt_parse::error::DrtError>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod excel;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{DrtError, DrtResult, FieldError};
pub use excel::Grid;
pub use types::{CellValue, DrtConfig, OrbitalVector, PointGroup, SpinState};
