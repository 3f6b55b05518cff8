use rustc_hash::FxHashSet;

use shape_reach::core::grid::Grid;
use shape_reach::query::CreatabilityQuery;
use shape_reach::search::exhaustive::Searcher;
use shape_reach::search::progress::NoProgress;
use shape_reach::store::ShapeSet;

// A two-layer grid keeps the state space small enough to run the full
// search in a test.
type Small = Grid<2, 4>;

fn run_small() -> (Searcher<2, 4>, ShapeSet<2, 4>) {
    let mut searcher = Searcher::<2, 4>::new();
    searcher.run(&mut NoProgress);
    let counts = searcher.counts();
    let set = {
        let mut s = Searcher::<2, 4>::new();
        s.run(&mut NoProgress);
        s.into_shape_set()
    };
    assert_eq!(counts.halves, set.halves.len());
    assert_eq!(counts.residual_shapes, set.shapes.len());
    (searcher, set)
}

#[test]
fn search_is_deterministic() {
    let (_, a) = run_small();
    let (_, b) = run_small();
    assert_eq!(a, b);
}

#[test]
fn search_finds_something() {
    let (searcher, set) = run_small();
    let counts = searcher.counts();
    assert!(counts.shapes > 0);
    assert!(counts.halves > 1);
    assert!(counts.sectors > 1);
    assert_eq!(searcher.halves().len(), counts.halves);
    // The empty half is always catalogued.
    assert!(set.halves.contains(&Small::empty()));
}

#[test]
fn result_arrays_are_sorted_and_unique() {
    let (_, set) = run_small();
    assert!(set.halves.windows(2).all(|w| w[0] < w[1]));
    assert!(set.shapes.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn categories_are_mutually_exclusive() {
    let (_, set) = run_small();
    let halves: FxHashSet<Small> = set.halves.iter().copied().collect();
    let west = Small::WEST_MASK;

    // No category-2 shape can be split into two catalogued halves at any
    // angle; those shapes belong to category 1.
    for &shape in &set.shapes {
        for angle in 0..2 {
            let left = shape.rotate(angle).masked(west).canonical_half();
            let right = shape.rotate(angle + 2).masked(west).canonical_half();
            assert!(
                !(halves.contains(&left) && halves.contains(&right)),
                "{shape} is catalogued in both categories"
            );
        }
    }
}

#[test]
fn everything_stored_is_canonical_and_stable() {
    let (_, set) = run_small();
    for &half in &set.halves {
        assert_eq!(half.canonical_half(), half);
        assert_eq!(half.collapse(), half);
        assert_eq!(half.raw() & !Small::WEST_MASK, 0);
    }
    for &shape in &set.shapes {
        assert_eq!(shape.canonical(), shape);
        assert_eq!(shape.collapse(), shape);
    }
}

#[test]
fn simple_shapes_are_creatable() {
    let (_, set) = run_small();
    let query = CreatabilityQuery::new(set);

    assert!(query.is_creatable(Small::empty()));
    assert!(query.is_creatable("S---:----".parse().unwrap()));
    assert!(query.is_creatable("SSSS:----".parse().unwrap()));
    assert!(query.is_creatable("P---:----".parse().unwrap()));
    assert!(query.is_creatable("SSSS:SSSS".parse().unwrap()));
}

#[test]
fn floating_shapes_are_not_creatable() {
    let (_, set) = run_small();
    let query = CreatabilityQuery::new(set);

    // Gravity would collapse these, so no construction reaches them.
    assert!(!query.is_creatable("----:S---".parse().unwrap()));
    assert!(!query.is_creatable("----:SSSS".parse().unwrap()));
}

/// Full run at the default four-layer configuration. Slow; invoke with
/// `cargo test --release -- --ignored`.
#[test]
#[ignore]
fn default_configuration_search_completes() {
    let mut searcher = Searcher::<4, 4>::new();
    searcher.run(&mut NoProgress);
    let counts = searcher.counts();
    assert!(counts.shapes > 0);
    assert!(counts.halves > 1);

    let set = searcher.into_shape_set();
    assert!(set.halves.windows(2).all(|w| w[0] < w[1]));
    assert!(set.shapes.windows(2).all(|w| w[0] < w[1]));

    let query = CreatabilityQuery::new(set);
    assert!(query.is_creatable("SSSS:----:----:----".parse().unwrap()));
    assert!(!query.is_creatable("----:----:----:SSSS".parse().unwrap()));
}
