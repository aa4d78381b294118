use crate::VoxelPointComputer;
use bulbwonder_core::{IterationParams, Point3};

/// Mandelbulb escape-time computer with f64 arithmetic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MandelbulbComputer {
    params: IterationParams,
}

impl MandelbulbComputer {
    pub fn new(params: IterationParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &IterationParams {
        &self.params
    }
}

impl VoxelPointComputer for MandelbulbComputer {
    #[inline]
    fn compute(&self, point: Point3<f64>) -> u32 {
        escape_iterations(point, &self.params)
    }
}

/// Iterate the Mandelbulb map from `origin`, adding `origin` back each step.
///
/// Returns the iteration at which `x² + y² + z²` reached `threshold`, or 0 if
/// the cap was hit first. A point that starts at or beyond the threshold never
/// iterates and also returns 0. NaN is not special-cased: it fails the bound
/// check and ends the loop like an escape.
pub fn escape_iterations(origin: Point3<f64>, params: &IterationParams) -> u32 {
    let (x0, y0, z0) = origin.into_parts();
    let power = params.power;

    let mut x = x0;
    let mut y = y0;
    let mut z = z0;
    let mut iteration = 0;

    while x * x + y * y + z * z < params.threshold && iteration < params.max_iterations {
        let r = (x * x + y * y + z * z).sqrt();
        let theta = (x * x + y * y).sqrt().atan2(z);
        let phi = y.atan2(x);

        let r = r.powf(power);
        let sin_theta = (theta * power).sin();
        x = r * sin_theta * (phi * power).cos() + x0;
        y = r * sin_theta * (phi * power).sin() + y0;
        z = r * (theta * power).cos() + z0;

        iteration += 1;
    }

    if iteration < params.max_iterations {
        iteration
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(max_iterations: u32) -> IterationParams {
        IterationParams::new(max_iterations, 8.0)
    }

    #[test]
    fn origin_never_escapes() {
        // r = 0 keeps every step at the origin
        let origin = Point3::new(0.0, 0.0, 0.0);
        assert_eq!(escape_iterations(origin, &params(100)), 0);
        assert_eq!(escape_iterations(origin, &params(1000)), 0);
    }

    #[test]
    fn point_outside_threshold_never_iterates() {
        // r² = 3 >= 2: loop body never runs, iteration stays 0
        let corner = Point3::new(-1.0, -1.0, -1.0);
        assert_eq!(escape_iterations(corner, &params(20)), 0);
    }

    #[test]
    fn point_near_edge_escapes_in_one_step() {
        // r² = 1.5 -> 29.58 after one step
        let p = Point3::new(-1.0, -0.5, -0.5);
        assert_eq!(escape_iterations(p, &params(20)), 1);
    }

    #[test]
    fn escape_on_last_permitted_step_records_zero() {
        // Escapes at iteration 2, so a cap of 2 swallows it
        let p = Point3::new(-0.5, -0.5, -0.5);
        assert_eq!(escape_iterations(p, &params(20)), 2);
        assert_eq!(escape_iterations(p, &params(3)), 2);
        assert_eq!(escape_iterations(p, &params(2)), 0);
    }

    #[test]
    fn larger_threshold_delays_escape() {
        let p = Point3::new(-1.0, -0.5, -0.5);
        let wide = params(20).with_threshold(100.0);
        // 29.58 after one step is still inside 100, the second step leaves
        assert_eq!(escape_iterations(p, &wide), 2);
        // Squared-radius comparison: 1.5 >= 1.0 means no iteration at all
        let narrow = params(20).with_threshold(1.0);
        assert_eq!(escape_iterations(p, &narrow), 0);
    }

    #[test]
    fn nan_step_counts_as_escape() {
        // NaN power poisons the first step; NaN fails `< threshold`
        let nan_power = IterationParams::new(20, f64::NAN);
        assert_eq!(escape_iterations(Point3::new(0.0, 0.0, 0.0), &nan_power), 1);
        assert_eq!(escape_iterations(Point3::new(0.1, 0.2, 0.3), &nan_power), 1);
    }

    #[test]
    fn computer_delegates_to_kernel() {
        let computer = MandelbulbComputer::new(params(20));
        let p = Point3::new(-0.5, 0.0, 0.5);
        assert_eq!(computer.compute(p), escape_iterations(p, computer.params()));
    }
}
