use crate::VoxelPointComputer;
use bulbwonder_core::{GridSpec, VoxelField};
use rayon::prelude::*;

/// Renderer that wraps a [`VoxelPointComputer`], adding grid iteration.
///
/// The output buffer is split into slabs of constant `i`; each slab is owned
/// by exactly one worker, so no voxel is written twice and nothing is shared.
#[derive(Clone, Debug)]
pub struct FieldRenderer<C: VoxelPointComputer> {
    computer: C,
}

impl<C: VoxelPointComputer> FieldRenderer<C> {
    pub fn new(computer: C) -> Self {
        Self { computer }
    }

    /// Fill the grid using the current rayon pool.
    pub fn render(&self, grid: GridSpec) -> VoxelField {
        let mut field = VoxelField::zeroed(grid);
        let slab_len = grid.slab_len();
        if field.is_empty() {
            return field;
        }

        field
            .values_mut()
            .par_chunks_mut(slab_len)
            .enumerate()
            .for_each(|(i, slab)| self.render_slab(grid, i as u32, slab));

        field
    }

    /// Fill the grid on the calling thread only.
    pub fn render_sequential(&self, grid: GridSpec) -> VoxelField {
        let mut field = VoxelField::zeroed(grid);
        let slab_len = grid.slab_len();
        if field.is_empty() {
            return field;
        }

        for (i, slab) in field.values_mut().chunks_mut(slab_len).enumerate() {
            self.render_slab(grid, i as u32, slab);
        }

        field
    }

    fn render_slab(&self, grid: GridSpec, i: u32, slab: &mut [u32]) {
        let depth = grid.depth as usize;
        for j in 0..grid.height {
            let row = &mut slab[j as usize * depth..(j as usize + 1) * depth];
            for (k, value) in row.iter_mut().enumerate() {
                let point = grid.normalized_coordinate(i, j, k as u32);
                *value = self.computer.compute(point);
            }
        }
    }
}
