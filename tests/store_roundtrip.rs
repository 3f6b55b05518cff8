use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use shape_reach::config::Shape;
use shape_reach::core::grid::Grid;
use shape_reach::store::{ShapeSet, StoreError};

fn unique_temp_dir(name: &str) -> PathBuf {
    let base = std::env::temp_dir().join("shape_reach_tests").join(name);
    let _ = fs::create_dir_all(&base);

    let pid = std::process::id();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();

    for i in 0..1000u32 {
        let p = base.join(format!("{pid}-{nanos}-{i}"));
        if fs::create_dir(&p).is_ok() {
            return p;
        }
    }

    panic!(
        "failed to create a unique temp dir under {}",
        base.display()
    );
}

fn sorted(mut grids: Vec<Shape>) -> Vec<Shape> {
    grids.sort_unstable();
    grids
}

#[test]
fn shape_set_roundtrips() {
    let dir = unique_temp_dir("shape_set_roundtrips");
    let path = dir.join("store.bin");

    let set = ShapeSet {
        halves: sorted(vec![
            Shape::empty(),
            "S---:----:----:----".parse().unwrap(),
            "SS--:----:----:----".parse().unwrap(),
        ]),
        shapes: sorted(vec![
            "cccc:SSSS:----:----".parse().unwrap(),
            "P-P-:----:----:----".parse().unwrap(),
        ]),
    };
    set.save(&path).unwrap();

    let loaded = ShapeSet::load(&path).unwrap();
    assert_eq!(loaded, set);
}

#[test]
fn empty_shape_set_roundtrips() {
    let dir = unique_temp_dir("empty_shape_set_roundtrips");
    let path = dir.join("store.bin");

    let set = ShapeSet::<4, 4> {
        halves: Vec::new(),
        shapes: Vec::new(),
    };
    set.save(&path).unwrap();

    // Two empty sections are exactly two zero counts.
    assert_eq!(fs::metadata(&path).unwrap().len(), 8);
    assert_eq!(ShapeSet::<4, 4>::load(&path).unwrap(), set);
}

#[test]
fn wide_configuration_uses_eight_byte_values() {
    let dir = unique_temp_dir("wide_configuration");
    let path = dir.join("store.bin");

    assert_eq!(Grid::<4, 8>::VALUE_BYTES, 8);

    let mut grid = Grid::<4, 8>::empty();
    grid.set(3, 7, shape_reach::core::cell::Cell::Filled);
    let set = ShapeSet::<4, 8> {
        halves: vec![Grid::empty()],
        shapes: vec![grid.collapse()],
    };
    set.save(&path).unwrap();

    // counts (2 x u32) + two 8-byte values.
    assert_eq!(fs::metadata(&path).unwrap().len(), 8 + 16);
    assert_eq!(ShapeSet::<4, 8>::load(&path).unwrap(), set);
}

#[test]
fn truncated_file_is_rejected() {
    let dir = unique_temp_dir("truncated_file");
    let path = dir.join("store.bin");

    let set = ShapeSet::<4, 4> {
        halves: sorted(vec![
            Shape::empty(),
            "S---:----:----:----".parse().unwrap(),
        ]),
        shapes: vec!["SS--:----:----:----".parse().unwrap()],
    };
    set.save(&path).unwrap();

    let bytes = fs::read(&path).unwrap();
    let cut = dir.join("cut.bin");
    fs::write(&cut, &bytes[..bytes.len() - 2]).unwrap();

    match ShapeSet::<4, 4>::load(&cut) {
        Err(StoreError::Truncated { section, .. }) => assert_eq!(section, "shapes"),
        other => panic!("expected a truncation error, got {other:?}"),
    }
}

#[test]
fn missing_file_reports_the_open_stage() {
    let dir = unique_temp_dir("missing_file");
    match ShapeSet::<4, 4>::load(&dir.join("absent.bin")) {
        Err(StoreError::Io { stage, .. }) => assert_eq!(stage, "open"),
        other => panic!("expected an io error, got {other:?}"),
    }
}
