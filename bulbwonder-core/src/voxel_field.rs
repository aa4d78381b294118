use serde::{Deserialize, Serialize};

use crate::{FieldError, GridSpec};

/// Escape iteration count per voxel.
///
/// 0 means the voxel never escaped (or started outside the threshold);
/// anything else is the iteration at which it escaped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawVoxelField")]
pub struct VoxelField {
    grid: GridSpec,
    values: Vec<u32>,
}

/// Unchecked wire form, validated through [`VoxelField::from_values`].
#[derive(Deserialize)]
struct RawVoxelField {
    grid: GridSpec,
    values: Vec<u32>,
}

impl TryFrom<RawVoxelField> for VoxelField {
    type Error = FieldError;

    fn try_from(raw: RawVoxelField) -> Result<Self, Self::Error> {
        Self::from_values(raw.grid, raw.values)
    }
}

impl VoxelField {
    /// Wrap precomputed values laid out as [`GridSpec::index_of`] describes.
    pub fn from_values(grid: GridSpec, values: Vec<u32>) -> Result<Self, FieldError> {
        let expected = grid.voxel_count();
        if values.len() != expected {
            return Err(FieldError::ShapeMismatch {
                shape: grid.shape(),
                expected,
                actual: values.len(),
            });
        }
        Ok(Self { grid, values })
    }

    /// All-zero field, ready to be filled in place.
    pub fn zeroed(grid: GridSpec) -> Self {
        Self {
            grid,
            values: vec![0; grid.voxel_count()],
        }
    }

    pub fn grid(&self) -> GridSpec {
        self.grid
    }

    pub fn shape(&self) -> (u32, u32, u32) {
        self.grid.shape()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at (i, j, k), or `None` outside the grid.
    pub fn get(&self, i: u32, j: u32, k: u32) -> Option<u32> {
        if i >= self.grid.width || j >= self.grid.height || k >= self.grid.depth {
            return None;
        }
        Some(self.values[self.grid.index_of(i, j, k)])
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut [u32] {
        &mut self.values
    }

    pub fn into_values(self) -> Vec<u32> {
        self.values
    }

    /// Number of voxels that escaped (value > 0).
    pub fn escaped_count(&self) -> usize {
        self.values.iter().filter(|&&v| v > 0).count()
    }

    pub fn max_value(&self) -> u32 {
        self.values.iter().copied().max().unwrap_or(0)
    }

    /// Escaped voxels as `(i, j, k, value)` in storage order.
    pub fn occupied(&self) -> impl Iterator<Item = (u32, u32, u32, u32)> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v > 0)
            .map(move |(index, &v)| {
                let (i, j, k) = self.grid.position_of(index);
                (i, j, k, v)
            })
    }
}
