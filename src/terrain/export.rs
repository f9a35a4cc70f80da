//! Writing terrain meshes out for inspection or external renderers.

use std::fs;
use std::path::Path;

use image::{GrayImage, Luma};

use super::mesh::TerrainMesh;
use crate::error::{Error, Result};

/// Magic bytes at the start of a raw mesh buffer file
pub const MESH_MAGIC: &[u8; 4] = b"RBTM";

/// Grayscale heightmap, one pixel per lattice point, black = lowest vertex.
///
/// Row 0 of the image is z = 0. A flat mesh exports as mid gray.
pub fn heightmap_image(mesh: &TerrainMesh) -> Option<GrayImage> {
    let (lo, hi) = mesh.height_range()?;
    let span = hi - lo;
    let width = (mesh.x_size + 1) as u32;
    let height = (mesh.z_size + 1) as u32;

    Some(GrayImage::from_fn(width, height, |x, z| {
        let h = mesh.vertices[z as usize * width as usize + x as usize].position[1];
        let level = if span > 0.0 { (h - lo) / span } else { 0.5 };
        Luma([(level * 255.0).round() as u8])
    }))
}

/// Save the heightmap as PNG
pub fn write_heightmap_png(mesh: &TerrainMesh, path: &Path) -> Result<()> {
    let image = heightmap_image(mesh)
        .ok_or_else(|| Error::InvalidConfig("cannot export an empty terrain".to_string()))?;
    image.save(path)?;
    log::info!(
        "Wrote {}x{} heightmap to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}

/// Raw buffer file: magic, vertex count (u32 LE), index count (u32 LE),
/// then the vertex buffer and index buffer as laid out in memory.
pub fn encode_mesh_buffers(mesh: &TerrainMesh) -> Vec<u8> {
    let vertex_bytes = mesh.vertex_bytes();
    let index_bytes = mesh.index_bytes();

    let mut out = Vec::with_capacity(12 + vertex_bytes.len() + index_bytes.len());
    out.extend_from_slice(MESH_MAGIC);
    out.extend_from_slice(&(mesh.vertices.len() as u32).to_le_bytes());
    out.extend_from_slice(&(mesh.indices.len() as u32).to_le_bytes());
    out.extend_from_slice(vertex_bytes);
    out.extend_from_slice(index_bytes);
    out
}

/// Save the raw vertex and index buffers
pub fn write_mesh_buffers(mesh: &TerrainMesh, path: &Path) -> Result<()> {
    let bytes = encode_mesh_buffers(mesh);
    fs::write(path, &bytes).map_err(|e| Error::io(path, e))?;
    log::info!(
        "Wrote {} vertices, {} indices ({} bytes) to {}",
        mesh.vertices.len(),
        mesh.indices.len(),
        bytes.len(),
        path.display()
    );
    Ok(())
}
