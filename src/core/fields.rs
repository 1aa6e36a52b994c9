//! Scalar field parsers for the DRT sheet

use crate::error::{DrtError, DrtResult};
use crate::types::{CellValue, PointGroup, SpinState};
use regex::Regex;

/// Last whitespace-separated token of the title cell, lowercased
pub fn extract_point_group(cell: &CellValue) -> DrtResult<PointGroup> {
    let text = cell.to_trimmed_string();
    let token = text
        .split_whitespace()
        .last()
        .ok_or_else(|| DrtError::Validation(format!("no point group token in '{text}'")))?
        .to_lowercase();

    PointGroup::from_token(&token)
        .ok_or_else(|| DrtError::Validation(format!("Invalid point group extracted: {token}")))
}

/// Integer inside the first parenthesised group, e.g. "B1 (2)" → 2
pub fn extract_symmetry(cell: &CellValue) -> DrtResult<u32> {
    let text = cell.to_string();
    let pattern = Regex::new(r"\((\d+)\)")
        .map_err(|e| DrtError::Validation(format!("invalid symmetry pattern: {e}")))?;

    let digits = pattern
        .captures(&text)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| DrtError::Validation(format!("Could not extract symmetry from '{text}'")))?;

    digits
        .as_str()
        .parse::<u32>()
        .map_err(|_| DrtError::Validation(format!("symmetry index out of range in '{text}'")))
}

/// Multiplicity 1 → Singlet, 3 → Triplet; anything else is rejected
pub fn spin_from_multiplicity(cell: &CellValue) -> DrtResult<SpinState> {
    let multiplicity = cell
        .to_integer()
        .map_err(|_| DrtError::Validation(format!("Invalid multiplicity: {cell}")))?;

    SpinState::from_multiplicity(multiplicity).ok_or_else(|| {
        DrtError::Validation(format!(
            "Invalid multiplicity '{multiplicity}': must be 1 or 3"
        ))
    })
}
