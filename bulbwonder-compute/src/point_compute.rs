use bulbwonder_core::Point3;

/// Computes the field value at a single sample point.
///
/// This is the lowest-level abstraction - pure computation with no loops.
/// [`FieldRenderer`](crate::FieldRenderer) adds the grid iteration and the
/// work split across threads, hence the `Sync` bound.
pub trait VoxelPointComputer: Sync {
    fn compute(&self, point: Point3<f64>) -> u32;
}
