use bulbwonder_core::VoxelField;
use serde::{Deserialize, Serialize};

use crate::{FieldSink, SessionConfig};

/// Escaped voxels flattened into parallel position and intensity arrays.
///
/// Voxels with value 0 are interior (or never sampled) and are left out; the
/// escape iteration becomes the point's intensity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointCloud {
    pub positions: Vec<[u32; 3]>,
    pub intensities: Vec<u32>,
}

impl PointCloud {
    pub fn from_field(field: &VoxelField) -> Self {
        let capacity = field.escaped_count();
        let mut cloud = Self {
            positions: Vec::with_capacity(capacity),
            intensities: Vec::with_capacity(capacity),
        };
        for (i, j, k, value) in field.occupied() {
            cloud.positions.push([i, j, k]);
            cloud.intensities.push(value);
        }
        cloud
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Smallest and largest intensity, for normalizing a color map.
    pub fn intensity_range(&self) -> Option<(u32, u32)> {
        let min = self.intensities.iter().copied().min()?;
        let max = self.intensities.iter().copied().max()?;
        Some((min, max))
    }
}

/// Sink that keeps the point cloud of the most recent field.
#[derive(Clone, Debug, Default)]
pub struct PointCloudSink {
    latest: Option<(SessionConfig, PointCloud)>,
    frames: usize,
}

impl PointCloudSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest(&self) -> Option<&(SessionConfig, PointCloud)> {
        self.latest.as_ref()
    }

    /// Number of fields presented so far.
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl FieldSink for PointCloudSink {
    fn present(&mut self, config: &SessionConfig, field: &VoxelField) {
        self.latest = Some((*config, PointCloud::from_field(field)));
        self.frames += 1;
    }
}
