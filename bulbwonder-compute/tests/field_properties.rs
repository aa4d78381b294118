use bulbwonder_compute::{FieldComputer, GridSpec, IterationParams, VoxelField};

fn compute(grid: GridSpec, params: IterationParams) -> VoxelField {
    FieldComputer::new().compute(grid, params).unwrap()
}

#[test]
fn shape_matches_grid() {
    for grid in [
        GridSpec::cubic(1),
        GridSpec::cubic(6),
        GridSpec::new(7, 3, 5),
        GridSpec::new(1, 9, 2),
    ] {
        let field = compute(grid, IterationParams::default());
        assert_eq!(field.shape(), grid.shape());
        assert_eq!(field.len(), grid.voxel_count());
    }
}

#[test]
fn repeated_computation_is_bit_identical() {
    let grid = GridSpec::cubic(12);
    let params = IterationParams::new(25, 7.5);
    let first = compute(grid, params);
    let second = compute(grid, params);
    assert_eq!(first.values(), second.values());
}

#[test]
fn centre_voxel_never_escapes() {
    for power in [2.0, 3.5, 8.0, 12.0] {
        let field = compute(GridSpec::cubic(8), IterationParams::new(50, power));
        assert_eq!(field.get(4, 4, 4), Some(0), "power {power}");
    }
}

#[test]
fn single_iteration_cap_yields_empty_field() {
    // Outside the threshold: no step taken, 0. Inside: one step hits the cap, 0.
    let field = compute(GridSpec::cubic(10), IterationParams::new(1, 8.0));
    assert_eq!(field.escaped_count(), 0);
    assert!(field.values().iter().all(|&v| v == 0));
}

#[test]
fn values_stay_below_iteration_cap() {
    for cap in [2, 3, 7, 20] {
        let field = compute(GridSpec::cubic(10), IterationParams::new(cap, 8.0));
        assert!(field.max_value() < cap, "cap {cap}");
    }
}

#[test]
fn raising_iteration_cap_keeps_escaped_values() {
    let grid = GridSpec::cubic(12);
    let caps = [5, 10, 20, 40];
    let fields: Vec<_> = caps
        .iter()
        .map(|&cap| compute(grid, IterationParams::new(cap, 8.0)))
        .collect();

    for pair in fields.windows(2) {
        let (lower, higher) = (&pair[0], &pair[1]);
        for (&before, &after) in lower.values().iter().zip(higher.values()) {
            if before > 0 {
                assert_eq!(after, before);
            }
        }
        assert!(higher.escaped_count() >= lower.escaped_count());
    }
}

#[test]
fn four_cubed_power_eight_regression() {
    let field = compute(GridSpec::cubic(4), IterationParams::new(20, 8.0));

    // (-1, -1, -1): r² = 3 is already past the threshold
    assert_eq!(field.get(0, 0, 0), Some(0));
    assert_eq!(field.get(0, 1, 1), Some(1));
    assert_eq!(field.get(1, 1, 1), Some(2));
    assert_eq!(field.get(3, 1, 3), Some(2));
    assert_eq!(field.get(1, 1, 3), Some(4));
    assert_eq!(field.get(1, 2, 3), Some(5));
    // Settles near r² = 0.52 and never leaves
    assert_eq!(field.get(1, 1, 2), Some(0));
    assert_eq!(field.get(2, 2, 2), Some(0));
    assert_eq!(field.max_value(), 5);
}

#[test]
fn parallel_matches_sequential() {
    let grid = GridSpec::new(17, 13, 11);
    let params = IterationParams::new(30, 6.0);

    let sequential = FieldComputer::sequential().compute(grid, params).unwrap();
    let global = FieldComputer::new().compute(grid, params).unwrap();
    let dedicated = FieldComputer::with_threads(3)
        .unwrap()
        .compute(grid, params)
        .unwrap();

    assert_eq!(global, sequential);
    assert_eq!(dedicated, sequential);
}

#[test]
fn nan_power_is_absorbed_per_voxel() {
    // The first step goes NaN and ends the loop, so every voxel that starts
    // inside the threshold records 1 and everything else stays 0.
    let grid = GridSpec::cubic(6);
    let field = compute(grid, IterationParams::new(10, f64::NAN));
    for index in 0..grid.voxel_count() {
        let (i, j, k) = grid.position_of(index);
        let inside = grid.normalized_coordinate(i, j, k).norm_sq() < 2.0;
        assert_eq!(field.values()[index], inside as u32, "voxel ({i},{j},{k})");
    }
}
