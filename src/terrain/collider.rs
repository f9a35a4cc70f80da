//! Height-field collision geometry registered from a terrain mesh.

use glam::Vec3;

use super::mesh::TerrainMesh;

/// Height field matching the mesh's triangulation
#[derive(Debug, Clone)]
pub struct TerrainCollider {
    heights: Vec<f32>,
    x_size: usize,
    z_size: usize,
    spacing: f32,
    origin: Vec3,
}

impl TerrainCollider {
    /// Register collision geometry for `mesh` placed at the world origin
    pub fn from_mesh(mesh: &TerrainMesh) -> Self {
        Self {
            heights: mesh.vertices.iter().map(|v| v.position[1]).collect(),
            x_size: mesh.x_size,
            z_size: mesh.z_size,
            spacing: mesh.grid_spacing,
            origin: Vec3::ZERO,
        }
    }

    /// Move the collider so the mesh's (0, 0) lattice point sits at `origin`
    pub fn with_origin(mut self, origin: Vec3) -> Self {
        self.origin = origin;
        self
    }

    /// World-space footprint as (min corner, max corner) on the XZ plane
    pub fn footprint(&self) -> (Vec3, Vec3) {
        let extent = Vec3::new(
            self.x_size as f32 * self.spacing,
            0.0,
            self.z_size as f32 * self.spacing,
        );
        (self.origin, self.origin + extent)
    }

    fn lattice_height(&self, x: usize, z: usize) -> f32 {
        self.heights[z * (self.x_size + 1) + x]
    }

    /// Terrain surface height at world (x, z).
    ///
    /// Interpolates over the same diagonal split the mesh uses. Returns
    /// `None` outside the footprint or for an empty mesh.
    pub fn height_at(&self, x: f32, z: f32) -> Option<f32> {
        if self.heights.is_empty() || self.spacing <= 0.0 {
            return None;
        }

        let gx = (x - self.origin.x) / self.spacing;
        let gz = (z - self.origin.z) / self.spacing;
        if !(0.0..=self.x_size as f32).contains(&gx) || !(0.0..=self.z_size as f32).contains(&gz) {
            return None;
        }

        // Far edges belong to the last cell
        let cx = (gx.floor() as usize).min(self.x_size - 1);
        let cz = (gz.floor() as usize).min(self.z_size - 1);
        let fx = gx - cx as f32;
        let fz = gz - cz as f32;

        let h00 = self.lattice_height(cx, cz);
        let h10 = self.lattice_height(cx + 1, cz);
        let h01 = self.lattice_height(cx, cz + 1);
        let h11 = self.lattice_height(cx + 1, cz + 1);

        let local = if fx + fz <= 1.0 {
            h00 + fx * (h10 - h00) + fz * (h01 - h00)
        } else {
            h11 + (1.0 - fx) * (h01 - h11) + (1.0 - fz) * (h10 - h11)
        };
        Some(self.origin.y + local)
    }

    /// Point is on or below the terrain surface
    pub fn is_touching(&self, point: Vec3) -> bool {
        self.height_at(point.x, point.z)
            .is_some_and(|ground| point.y <= ground)
    }
}

/// Edge-triggered ground contact tracking
#[derive(Debug, Clone, Default)]
pub struct ContactTracker {
    touching: bool,
    contacts: usize,
}

impl ContactTracker {
    /// Update with the current point; returns true when a new contact begins
    pub fn update(&mut self, collider: &TerrainCollider, point: Vec3) -> bool {
        let touching = collider.is_touching(point);
        let entered = touching && !self.touching;
        if entered {
            self.contacts += 1;
            log::info!("Collided with ground at ({:.2}, {:.2})", point.x, point.z);
        }
        self.touching = touching;
        entered
    }

    /// Number of contacts begun so far
    pub fn contacts(&self) -> usize {
        self.contacts
    }
}
