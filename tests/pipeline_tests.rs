//! End-to-end pipeline tests against generated .xlsx workbooks

mod common;

use common::{Cell, DrtSheet, SAMPLE_OUTPUT};
use drt_parse::cli::{run, InputSource, Paths};
use drt_parse::excel::DrtLayout;
use drt_parse::{DrtError, Grid, PointGroup, SpinState};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn workspace() -> (TempDir, Paths) {
    let dir = TempDir::new().unwrap();
    let paths = Paths::under(dir.path());
    (dir, paths)
}

// ═══════════════════════════════════════════════════════════════════════════
// SUCCESSFUL RUNS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_run_with_canonical_input_writes_expected_document() {
    let (_dir, paths) = workspace();
    DrtSheet::sample().save(&paths.canonical_input);

    let report = run(None, &paths, &DrtLayout::default()).unwrap();

    assert_eq!(report.source, InputSource::Existing);
    assert_eq!(report.columns, vec![2, 3]);
    assert_eq!(report.config.point_group, PointGroup::C2v);
    assert_eq!(report.config.spin_state, SpinState::Triplet);
    assert_eq!(fs::read_to_string(&paths.output).unwrap(), SAMPLE_OUTPUT);
}

#[test]
fn test_run_copies_user_path_to_canonical_location() {
    let (dir, paths) = workspace();
    let user_file = dir.path().join("incoming/my_drt.xlsx");
    DrtSheet::sample().save(&user_file);

    let report = run(Some(user_file.clone()), &paths, &DrtLayout::default()).unwrap();

    assert_eq!(report.source, InputSource::Copied(user_file.clone()));
    assert_eq!(
        fs::read(&paths.canonical_input).unwrap(),
        fs::read(&user_file).unwrap()
    );
    let output = fs::read_to_string(&paths.output).unwrap();
    assert!(output.contains("set spin_state \"Triplet\""));
    assert!(output.contains("set spatial_symmetry 2"));
    assert!(output.contains("set num_unique_atoms 5"));
    assert!(output.contains("set group_symmetry \"c2v\""));
}

#[test]
fn test_run_twice_is_byte_identical() {
    let (_dir, paths) = workspace();
    DrtSheet::sample().save(&paths.canonical_input);

    run(None, &paths, &DrtLayout::default()).unwrap();
    let first = fs::read(&paths.output).unwrap();
    run(None, &paths, &DrtLayout::default()).unwrap();
    let second = fs::read(&paths.output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_singlet_cs_sheet() {
    let (_dir, paths) = workspace();
    DrtSheet::sample()
        .set(0, 0, Cell::Text("Molecule in cs"))
        .set(18, 1, Cell::Number(1.0))
        .save(&paths.canonical_input);

    let report = run(None, &paths, &DrtLayout::default()).unwrap();

    assert_eq!(report.config.point_group, PointGroup::Cs);
    assert_eq!(report.config.spin_state, SpinState::Singlet);
}

#[test]
fn test_missing_orbital_cells_render_placeholder() {
    let (_dir, paths) = workspace();
    DrtSheet::sample().clear(4, 3).save(&paths.canonical_input);

    run(None, &paths, &DrtLayout::default()).unwrap();

    let output = fs::read_to_string(&paths.output).unwrap();
    assert!(output.contains("set scf_opsh \"1 nan\""), "{output}");
}

#[test]
fn test_grid_load_reads_absolute_positions() {
    let (dir, _paths) = workspace();
    let file = dir.path().join("sheet.xlsx");
    DrtSheet::default()
        .set(2, 2, Cell::Text("a1"))
        .set(4, 3, Cell::Number(7.0))
        .save(&file);

    let grid = Grid::load(&file).unwrap();

    assert_eq!(grid.height(), 5);
    assert_eq!(grid.width(), 4);
    assert_eq!(grid.row(2).unwrap()[2].to_string(), "a1");
    assert_eq!(grid.row(4).unwrap()[3].to_string(), "7");
}

// ═══════════════════════════════════════════════════════════════════════════
// FAILURES
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_missing_user_path_fails_before_parsing() {
    let (dir, paths) = workspace();
    let missing = dir.path().join("missing.xlsx");

    let err = run(Some(missing), &paths, &DrtLayout::default()).unwrap_err();

    assert!(matches!(err, DrtError::MissingFile(_)));
    assert!(!paths.canonical_input.exists());
    assert!(!paths.output.exists());
}

#[test]
fn test_default_path_without_file_is_load_error() {
    let (_dir, paths) = workspace();

    let err = run(None, &paths, &DrtLayout::default()).unwrap_err();

    assert!(matches!(err, DrtError::Load { .. }));
}

#[test]
fn test_corrupt_workbook_is_load_error() {
    let (_dir, paths) = workspace();
    fs::create_dir_all(paths.canonical_input.parent().unwrap()).unwrap();
    fs::write(&paths.canonical_input, b"this is not a zip archive").unwrap();

    let err = run(None, &paths, &DrtLayout::default()).unwrap_err();

    assert!(matches!(err, DrtError::Load { .. }));
    assert!(err.to_string().starts_with("ERROR reading Excel file"));
}

#[test]
fn test_no_orbital_headers_is_config_error() {
    let (_dir, paths) = workspace();
    DrtSheet::sample()
        .clear(2, 2)
        .clear(2, 3)
        .save(&paths.canonical_input);

    let err = run(None, &paths, &DrtLayout::default()).unwrap_err();

    assert!(matches!(err, DrtError::Config(_)));
    assert!(!paths.output.exists());
}

#[test]
fn test_invalid_fields_are_reported_together() {
    let (_dir, paths) = workspace();
    DrtSheet::sample()
        .set(0, 0, Cell::Text("Point Group D2h"))
        .set(18, 1, Cell::Number(2.0))
        .set(18, 3, Cell::Text("B1"))
        .save(&paths.canonical_input);

    let err = run(None, &paths, &DrtLayout::default()).unwrap_err();

    let fields: Vec<_> = err.field_errors().iter().map(|f| f.field).collect();
    assert_eq!(fields, ["group_symmetry", "spin_state", "spatial_symmetry"]);
    let message = err.to_string();
    assert!(message.contains("Invalid point group extracted: d2h"), "{message}");
    assert!(message.contains("Invalid multiplicity '2': must be 1 or 3"), "{message}");
    assert!(message.contains("Could not extract symmetry from 'B1'"), "{message}");
    assert!(!paths.output.exists());
}

#[test]
fn test_truncated_sheet_fails_extraction() {
    let (_dir, paths) = workspace();
    let mut sheet = DrtSheet::sample();
    sheet.cells.retain(|(row, _, _)| *row < 12);
    sheet.save(&paths.canonical_input);

    let err = run(None, &paths, &DrtLayout::default()).unwrap_err();

    assert!(matches!(err, DrtError::Extraction(_)));
    assert!(err.to_string().contains("mrci_int: row 15 is out of range"));
}
