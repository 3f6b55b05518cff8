use shape_reach::config::Shape;
use shape_reach::core::cell::Cell;
use shape_reach::core::grid::ParseShapeError;

fn sample_shapes() -> Vec<Shape> {
    [
        "----:----:----:----",
        "S---:----:----:----",
        "SSSS:----:----:----",
        "Sc-P:----:----:----",
        "P-P-:SS--:----:----",
        "cccc:SSSS:P---:---S",
    ]
    .iter()
    .map(|s| s.parse().unwrap())
    .collect()
}

#[test]
fn empty_grid_renders_and_parses() {
    let empty = Shape::empty();
    assert_eq!(empty.to_string(), "----:----:----:----");
    assert_eq!("----:----:----:----".parse::<Shape>().unwrap(), empty);
}

#[test]
fn short_form_round_trips() {
    for shape in sample_shapes() {
        assert_eq!(shape.to_string().parse::<Shape>().unwrap(), shape);
    }
}

#[test]
fn full_form_round_trips() {
    for shape in sample_shapes() {
        let full = shape.to_text(true);
        assert_eq!(full.len(), 2 * 16 + 3);
        assert_eq!(full.parse::<Shape>().unwrap(), shape);
    }
}

#[test]
fn parse_reads_cells_in_layer_major_order() {
    let shape: Shape = "Sc-P:----:----:-S--".parse().unwrap();
    assert_eq!(shape.get(0, 0), Cell::Filled);
    assert_eq!(shape.get(0, 1), Cell::Crystal);
    assert_eq!(shape.get(0, 2), Cell::Empty);
    assert_eq!(shape.get(0, 3), Cell::Pin);
    assert_eq!(shape.get(3, 1), Cell::Filled);
}

#[test]
fn game_part_glyphs_parse_as_filled() {
    // Concrete part kinds all read as Filled; only `-`, `P` and `c` are
    // special.
    let a: Shape = "CRWS:----:----:----".parse().unwrap();
    let b: Shape = "SSSS:----:----:----".parse().unwrap();
    assert_eq!(a, b);
}

#[test]
fn wrong_length_is_rejected() {
    let err = "----".parse::<Shape>().unwrap_err();
    assert_eq!(err, ParseShapeError::BadLength { len: 4, short: 19, full: 35 });
}

#[test]
fn missing_separator_is_rejected() {
    let err = "-".repeat(19).parse::<Shape>().unwrap_err();
    assert_eq!(err, ParseShapeError::MissingSeparator { index: 4 });
}

#[test]
fn rotate_full_turn_is_identity() {
    for shape in sample_shapes() {
        assert_eq!(shape.rotate(4), shape);
        assert_eq!(shape.rotate(1).rotate(1).rotate(1).rotate(1), shape);
        assert_eq!(shape.rotate(3), shape.rotate(1).rotate(2));
    }
}

#[test]
fn flip_is_involutive() {
    for shape in sample_shapes() {
        assert_eq!(shape.flip().flip(), shape);
    }
}

#[test]
fn rotate_moves_parts_down_one() {
    let mut shape = Shape::empty();
    shape.set(0, 1, Cell::Filled);
    shape.set(2, 3, Cell::Crystal);
    let rotated = shape.rotate(1);
    assert_eq!(rotated.get(0, 0), Cell::Filled);
    assert_eq!(rotated.get(2, 2), Cell::Crystal);
    // Part 0 wraps to the last part.
    let mut wrap = Shape::empty();
    wrap.set(1, 0, Cell::Pin);
    assert_eq!(wrap.rotate(1).get(1, 3), Cell::Pin);
}

#[test]
fn flip_mirrors_parts() {
    let mut shape = Shape::empty();
    shape.set(0, 0, Cell::Filled);
    shape.set(1, 1, Cell::Pin);
    let flipped = shape.flip();
    assert_eq!(flipped.get(0, 3), Cell::Filled);
    assert_eq!(flipped.get(1, 2), Cell::Pin);
}

#[test]
fn order_follows_packed_value() {
    let a: Shape = "S---:----:----:----".parse().unwrap();
    let b: Shape = "-S--:----:----:----".parse().unwrap();
    assert!(a < b);
    assert_eq!(a.raw() < b.raw(), a < b);
}

#[test]
fn layers_counts_up_to_topmost_occupied() {
    assert_eq!(Shape::empty().layers(), 0);
    assert_eq!("S---:----:----:----".parse::<Shape>().unwrap().layers(), 1);
    assert_eq!("S---:----:S---:----".parse::<Shape>().unwrap().layers(), 3);
    assert_eq!("P---:P---:P---:P---".parse::<Shape>().unwrap().layers(), 4);
}
