use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, Point3};

/// Grid axis, used to name the offending dimension in validation errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Width,
    Height,
    Depth,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::Width => "width",
            Axis::Height => "height",
            Axis::Depth => "depth",
        };
        f.write_str(name)
    }
}

/// Voxel lattice sampled over roughly [-1, 1]^3.
///
/// Storage order is row-major over (i, j, k) with `k` varying fastest:
/// `index = (i * height + j) * depth + k`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSpec {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
}

impl GridSpec {
    pub fn new(width: u32, height: u32, depth: u32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Equal-sided grid, the conventional shape.
    pub fn cubic(resolution: u32) -> Self {
        Self::new(resolution, resolution, resolution)
    }

    pub fn shape(&self) -> (u32, u32, u32) {
        (self.width, self.height, self.depth)
    }

    /// Total voxel count. Saturates for grids that [`GridSpec::validate`]
    /// would reject as too large.
    pub fn voxel_count(&self) -> usize {
        self.checked_voxel_count().unwrap_or(usize::MAX)
    }

    /// Voxel count, or `None` if the field could not be addressed in memory.
    pub fn checked_voxel_count(&self) -> Option<usize> {
        let count = (self.width as usize)
            .checked_mul(self.height as usize)?
            .checked_mul(self.depth as usize)?;
        let bytes = count.checked_mul(std::mem::size_of::<u32>())?;
        (bytes <= isize::MAX as usize).then_some(count)
    }

    /// Number of voxels in one slab of constant `i`.
    pub fn slab_len(&self) -> usize {
        self.height as usize * self.depth as usize
    }

    /// Reject grids with a zero-sized axis or more voxels than fit in memory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (axis, size) in [
            (Axis::Width, self.width),
            (Axis::Height, self.height),
            (Axis::Depth, self.depth),
        ] {
            if size == 0 {
                return Err(ConfigError::ZeroDimension { axis });
            }
        }
        if self.checked_voxel_count().is_none() {
            return Err(ConfigError::TooLarge {
                shape: self.shape(),
            });
        }
        Ok(())
    }

    #[inline]
    pub fn index_of(&self, i: u32, j: u32, k: u32) -> usize {
        (i as usize * self.height as usize + j as usize) * self.depth as usize + k as usize
    }

    /// Inverse of [`GridSpec::index_of`].
    #[inline]
    pub fn position_of(&self, index: usize) -> (u32, u32, u32) {
        let depth = self.depth as usize;
        let height = self.height as usize;
        let k = index % depth;
        let j = (index / depth) % height;
        let i = index / (depth * height);
        (i as u32, j as u32, k as u32)
    }

    /// Map a voxel to its sample point.
    ///
    /// `x = (i - width/2) * 2 / width`, likewise for y and z. The halving is a
    /// real division, so odd sizes sample half a step off the lattice centre.
    #[inline]
    pub fn normalized_coordinate(&self, i: u32, j: u32, k: u32) -> Point3<f64> {
        Point3::new(
            normalize_axis(i, self.width),
            normalize_axis(j, self.height),
            normalize_axis(k, self.depth),
        )
    }
}

#[inline]
fn normalize_axis(index: u32, size: u32) -> f64 {
    let size = size as f64;
    (index as f64 - size / 2.0) * 2.0 / size
}
