use calamine::Data;
use std::fmt;
use thiserror::Error;

//==============================================================================
// Cell Values
//==============================================================================

/// A single spreadsheet cell, typed the way the DRT sheet mixes them
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Bool(bool),
    Empty,
}

/// Placeholder written for cells that hold nothing
pub const EMPTY_CELL_TEXT: &str = "nan";

/// Why a cell could not be coerced
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CellError {
    #[error("cannot convert empty cell to an integer")]
    Empty,

    #[error("cannot convert '{0}' to an integer")]
    NotAnInteger(String),
}

impl CellValue {
    /// True when the cell carries no usable text (empty, or whitespace only)
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Coerce to an integer. Numbers truncate toward zero; text must parse.
    pub fn to_integer(&self) -> Result<i64, CellError> {
        match self {
            CellValue::Number(n) if n.is_finite() => Ok(n.trunc() as i64),
            CellValue::Number(n) => Err(CellError::NotAnInteger(n.to_string())),
            CellValue::Bool(b) => Ok(i64::from(*b)),
            CellValue::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| CellError::NotAnInteger(s.clone())),
            CellValue::Empty => Err(CellError::Empty),
        }
    }

    /// Text representation with surrounding whitespace removed
    pub fn to_trimmed_string(&self) -> String {
        self.to_string().trim().to_string()
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Empty => f.write_str(EMPTY_CELL_TEXT),
        }
    }
}

impl From<&Data> for CellValue {
    fn from(cell: &Data) -> Self {
        match cell {
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Float(f) => CellValue::Number(*f),
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
            Data::Error(e) => CellValue::Text(e.to_string()),
            Data::Empty => CellValue::Empty,
        }
    }
}

//==============================================================================
// Configuration Record
//==============================================================================

/// Molecular point group supported by the downstream DRT input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointGroup {
    C2v,
    Cs,
}

impl PointGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            PointGroup::C2v => "c2v",
            PointGroup::Cs => "cs",
        }
    }

    /// Match an already-lowercased token
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "c2v" => Some(PointGroup::C2v),
            "cs" => Some(PointGroup::Cs),
            _ => None,
        }
    }
}

impl fmt::Display for PointGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Spin state derived from the multiplicity column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinState {
    Singlet,
    Triplet,
}

impl SpinState {
    pub fn from_multiplicity(multiplicity: i64) -> Option<Self> {
        match multiplicity {
            1 => Some(SpinState::Singlet),
            3 => Some(SpinState::Triplet),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpinState::Singlet => "Singlet",
            SpinState::Triplet => "Triplet",
        }
    }
}

impl fmt::Display for SpinState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The nine orbital occupation vectors, in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrbitalVector {
    ScfDocc,
    ScfOpsh,
    McscfDocc,
    McscfCas,
    MrciFc,
    MrciFv,
    MrciDocc,
    MrciAux,
    MrciInt,
}

impl OrbitalVector {
    pub const ALL: [OrbitalVector; 9] = [
        OrbitalVector::ScfDocc,
        OrbitalVector::ScfOpsh,
        OrbitalVector::McscfDocc,
        OrbitalVector::McscfCas,
        OrbitalVector::MrciFc,
        OrbitalVector::MrciFv,
        OrbitalVector::MrciDocc,
        OrbitalVector::MrciAux,
        OrbitalVector::MrciInt,
    ];

    /// Variable name in the output script
    pub fn name(&self) -> &'static str {
        match self {
            OrbitalVector::ScfDocc => "scf_docc",
            OrbitalVector::ScfOpsh => "scf_opsh",
            OrbitalVector::McscfDocc => "mcscf_docc",
            OrbitalVector::McscfCas => "mcscf_cas",
            OrbitalVector::MrciFc => "mrci_fc",
            OrbitalVector::MrciFv => "mrci_fv",
            OrbitalVector::MrciDocc => "mrci_docc",
            OrbitalVector::MrciAux => "mrci_aux",
            OrbitalVector::MrciInt => "mrci_int",
        }
    }
}

/// Fully validated values read from one DRT sheet
#[derive(Debug, Clone, PartialEq)]
pub struct DrtConfig {
    pub point_group: PointGroup,
    pub num_electrons: i64,
    pub spin_state: SpinState,
    pub spatial_symmetry: u32,
    pub num_unique_atoms: i64,
    /// Joined vectors, indexed in `OrbitalVector::ALL` order
    pub orbitals: [String; 9],
}

impl DrtConfig {
    pub fn orbital(&self, vector: OrbitalVector) -> &str {
        &self.orbitals[vector as usize]
    }
}
