//! Static terrain grid mesh built once from a height function.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::params::TerrainParams;

/// Vertex data for terrain mesh (position + UV coordinates)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// Triangulated terrain grid
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    /// One unit normal per vertex
    pub normals: Vec<[f32; 3]>,
    pub x_size: usize,
    pub z_size: usize,
    pub grid_spacing: f32,
}

/// Build a terrain grid of `x_size` by `z_size` cells.
///
/// Vertices are laid out row-major (z outer, x inner), each at
/// `(x, noise(x * scale, z * scale) * amplitude, z)` in grid units scaled by
/// `grid_spacing_m`. Each cell emits two triangles:
/// `(v, v + x_size + 1, v + 1)` and `(v + 1, v + x_size + 1, v + x_size + 2)`.
/// A zero dimension yields an empty mesh.
///
/// # Arguments
/// * `x_size` - Cells along X
/// * `z_size` - Cells along Z
/// * `params` - Noise scale, amplitude and spacing
/// * `noise` - Deterministic height function over noise coordinates
pub fn build_grid<F>(x_size: usize, z_size: usize, params: &TerrainParams, noise: F) -> TerrainMesh
where
    F: Fn(f32, f32) -> f32,
{
    if x_size == 0 || z_size == 0 {
        return TerrainMesh {
            vertices: Vec::new(),
            indices: Vec::new(),
            normals: Vec::new(),
            x_size,
            z_size,
            grid_spacing: params.grid_spacing_m,
        };
    }

    let spacing = params.grid_spacing_m;
    let mut vertices = Vec::with_capacity((x_size + 1) * (z_size + 1));

    for z in 0..=z_size {
        for x in 0..=x_size {
            let height = noise(x as f32 * params.noise_scale, z as f32 * params.noise_scale)
                * params.amplitude_m;

            vertices.push(Vertex {
                position: [x as f32 * spacing, height, z as f32 * spacing],
                uv: [x as f32 / x_size as f32, z as f32 / z_size as f32],
            });
        }
    }

    let row = (x_size + 1) as u32;
    let mut indices = Vec::with_capacity(x_size * z_size * 6);
    let mut vert = 0u32;

    for _ in 0..z_size {
        for _ in 0..x_size {
            indices.extend_from_slice(&[
                vert,
                vert + row,
                vert + 1,
                vert + 1,
                vert + row,
                vert + row + 1,
            ]);
            vert += 1;
        }
        // Skip the last vertex of the row
        vert += 1;
    }

    let normals = recalculate_normals(&vertices, &indices);

    TerrainMesh {
        vertices,
        indices,
        normals,
        x_size,
        z_size,
        grid_spacing: spacing,
    }
}

/// Build the terrain described by `params` with seeded Perlin heights
pub fn build_from_params(params: &TerrainParams) -> TerrainMesh {
    let noise = crate::noise::TerrainNoise::new(params.noise_seed);
    build_grid(params.x_size, params.z_size, params, |x, z| noise.sample(x, z))
}

/// Area-weighted vertex normals from triangle faces.
///
/// Vertices touched by no triangle (or only degenerate ones) get +Y.
pub fn recalculate_normals(vertices: &[Vertex], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut sums = vec![Vec3::ZERO; vertices.len()];

    for tri in indices.chunks_exact(3) {
        let [i0, i1, i2] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let v0 = Vec3::from_array(vertices[i0].position);
        let v1 = Vec3::from_array(vertices[i1].position);
        let v2 = Vec3::from_array(vertices[i2].position);

        // Cross product length is twice the area, which weights the sum
        let face = (v1 - v0).cross(v2 - v0);
        sums[i0] += face;
        sums[i1] += face;
        sums[i2] += face;
    }

    sums.into_iter()
        .map(|n| n.try_normalize().unwrap_or(Vec3::Y).to_array())
        .collect()
}

impl TerrainMesh {
    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex at lattice point (x, z), if inside the grid
    pub fn vertex_at(&self, x: usize, z: usize) -> Option<&Vertex> {
        if x > self.x_size || z > self.z_size || self.vertices.is_empty() {
            return None;
        }
        self.vertices.get(z * (self.x_size + 1) + x)
    }

    /// Range of vertex heights as (min, max); `None` for an empty mesh
    pub fn height_range(&self) -> Option<(f32, f32)> {
        self.vertices.iter().map(|v| v.position[1]).fold(None, |acc, h| match acc {
            None => Some((h, h)),
            Some((lo, hi)) => Some((lo.min(h), hi.max(h))),
        })
    }

    /// Vertex buffer as raw bytes, ready for upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index buffer as raw bytes, ready for upload
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(_: f32, _: f32) -> f32 {
        0.0
    }

    #[test]
    fn test_two_by_two_counts() {
        let mesh = build_grid(2, 2, &TerrainParams::default(), flat);
        assert_eq!(mesh.vertices.len(), 9);
        assert_eq!(mesh.indices.len(), 24);
        assert_eq!(mesh.normals.len(), 9);
        assert_eq!(mesh.triangle_count(), 8);
    }

    #[test]
    fn test_rectangular_counts() {
        let mesh = build_grid(3, 5, &TerrainParams::default(), flat);
        assert_eq!(mesh.vertices.len(), 4 * 6);
        assert_eq!(mesh.indices.len(), 3 * 5 * 6);
    }

    #[test]
    fn test_zero_sized_grid_is_empty() {
        for (x, z) in [(0, 0), (0, 4), (4, 0)] {
            let mesh = build_grid(x, z, &TerrainParams::default(), flat);
            assert!(mesh.vertices.is_empty());
            assert!(mesh.indices.is_empty());
            assert!(mesh.normals.is_empty());
            assert_eq!(mesh.height_range(), None);
        }
    }

    #[test]
    fn test_first_cell_and_row_skip() {
        let mesh = build_grid(2, 2, &TerrainParams::default(), flat);
        // First cell
        assert_eq!(&mesh.indices[0..6], &[0, 3, 1, 1, 3, 4]);
        // Second cell, same row
        assert_eq!(&mesh.indices[6..12], &[1, 4, 2, 2, 4, 5]);
        // First cell of second row starts past the row's last vertex
        assert_eq!(&mesh.indices[12..18], &[3, 6, 4, 4, 6, 7]);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
    }

    #[test]
    fn test_vertex_positions_row_major() {
        let params = TerrainParams {
            noise_scale: 0.5,
            amplitude_m: 3.0,
            ..TerrainParams::default()
        };
        let mesh = build_grid(2, 1, &params, |x, z| x + 10.0 * z);

        // Vertex 4 is (x=1, z=1): noise(0.5, 0.5) * 3
        assert_eq!(mesh.vertices[4].position, [1.0, (0.5 + 5.0) * 3.0, 1.0]);
        assert_eq!(mesh.vertices[2].position[0], 2.0);
        assert_eq!(mesh.vertices[2].position[2], 0.0);
        assert_eq!(mesh.vertex_at(1, 1), Some(&mesh.vertices[4]));
        assert_eq!(mesh.vertex_at(3, 0), None);
    }

    #[test]
    fn test_heights_are_deterministic() {
        let params = TerrainParams::default();
        let a = build_from_params(&params);
        let b = build_from_params(&params);
        assert_eq!(a, b);

        let max = params.amplitude_m;
        let (lo, hi) = a.height_range().unwrap();
        assert!(lo >= 0.0 && hi <= max);
    }

    #[test]
    fn test_flat_grid_normals_point_up() {
        let mesh = build_grid(3, 3, &TerrainParams::default(), flat);
        for n in &mesh.normals {
            assert!((Vec3::from_array(*n) - Vec3::Y).length() < 1e-6);
        }
    }

    #[test]
    fn test_sloped_grid_normals_lean_downhill() {
        // Height rises along +X, so normals tilt toward -X
        let mesh = build_grid(3, 3, &TerrainParams::default(), |x, _| x);
        for n in &mesh.normals {
            assert!(n[0] < 0.0);
            assert!(n[1] > 0.0);
        }
    }

    #[test]
    fn test_buffer_bytes() {
        let mesh = build_grid(2, 2, &TerrainParams::default(), flat);
        assert_eq!(mesh.vertex_bytes().len(), 9 * std::mem::size_of::<Vertex>());
        assert_eq!(mesh.index_bytes().len(), 24 * 4);
    }
}
