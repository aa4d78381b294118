use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3<T> {
    x: T,
    y: T,
    z: T,
}

impl<T> Point3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    pub fn x(&self) -> &T {
        &self.x
    }

    pub fn y(&self) -> &T {
        &self.y
    }

    pub fn z(&self) -> &T {
        &self.z
    }

    pub fn into_parts(self) -> (T, T, T) {
        (self.x, self.y, self.z)
    }

    /// x² + y² + z²
    pub fn norm_sq(&self) -> T
    where
        T: Add<Output = T> + Mul<Output = T> + Clone,
    {
        self.x.clone() * self.x.clone()
            + self.y.clone() * self.y.clone()
            + self.z.clone() * self.z.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_and_parts() {
        let p = Point3::new(1.0, -2.0, 3.5);
        assert_eq!(*p.x(), 1.0);
        assert_eq!(*p.y(), -2.0);
        assert_eq!(*p.z(), 3.5);
        assert_eq!(p.into_parts(), (1.0, -2.0, 3.5));
    }

    #[test]
    fn norm_sq_sums_squares() {
        assert_eq!(Point3::new(-1.0, -1.0, -1.0).norm_sq(), 3.0);
        assert_eq!(Point3::new(2_i64, 3, 6).norm_sq(), 49);
    }
}
