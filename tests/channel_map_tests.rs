//! Channel Map Loading Tests
//!
//! Covers the TOML file path of the channel-name configuration: full files,
//! partial overrides falling back to reference defaults, and parse/IO
//! failures surfacing as typed errors.

use std::io::Write;

use well_targets::config::{ChannelMap, ChannelMapError};
use well_targets::{LogTable, TargetEngine};

fn write_toml(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_load_partial_file_keeps_defaults() {
    let file = write_toml(
        r#"
depth = "MD"
resistivity = "RES_DEEP"
gas = "TOTGAS"
"#,
    );

    let map = ChannelMap::load_from_file(file.path()).expect("load");
    assert_eq!(map.depth, "MD");
    assert_eq!(map.resistivity, "RES_DEEP");
    assert_eq!(map.gas, "TOTGAS");
    // Untouched keys keep the reference dataset headers
    assert_eq!(map.bulk_density, "Bulk Density - Compensated kg/m3");
    assert_eq!(map.phi_combined, "PHI_COMBINED");
}

#[test]
fn test_invalid_toml_is_a_parse_error() {
    let file = write_toml("depth = [not toml");
    let err = ChannelMap::load_from_file(file.path()).expect_err("should fail");
    assert!(matches!(err, ChannelMapError::Parse { .. }));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let err = ChannelMap::load_from_file(&dir.path().join("does_not_exist.toml"))
        .expect_err("should fail");
    assert!(matches!(err, ChannelMapError::Io { .. }));
}

#[test]
fn test_engine_honours_remapped_channel_names() {
    let file = write_toml(
        r#"
resistivity = "RES"
gas = "GAS"
fluid_class = "FLUID"
"#,
    );
    let map = ChannelMap::load_from_file(file.path()).expect("load");
    let engine = TargetEngine::new(map);

    let mut table = LogTable::new(vec![1500.0]).expect("valid depth");
    table.insert_numeric("RES", vec![150.0]).expect("insert");
    table.insert_numeric("GAS", vec![1.0]).expect("insert");

    let result = engine.compute_all_targets(&table);
    let classes = result.category("FLUID").expect("remapped output column");
    assert_eq!(classes.len(), 1);
    assert_eq!(
        classes[0].expect("classifier is total").as_str(),
        "Potential Reservoir"
    );
}
