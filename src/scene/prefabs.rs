use glam::{Vec3, Vec4};
use hecs::{Entity, World};

use crate::components::{LocalTransform, MeshHandle, Tint};
use crate::grid::{build_grid_mesh, GridParams};
use crate::renderer::MeshStore;

/// Build a grid mesh from `params`, upload it, and spawn an entity
/// displaying it at `position` with `tint`. Each call owns its own
/// MeshData and GPU buffers; nothing is shared between grids.
pub fn spawn_grid(
    world: &mut World,
    meshes: &mut MeshStore,
    params: &GridParams,
    position: Vec3,
    tint: Vec4,
) -> Entity {
    let data = build_grid_mesh(params);
    println!(
        "grid: {} cells, {} vertices, {} triangles",
        params.cells,
        data.vertex_count(),
        data.triangle_count()
    );
    let handle = meshes.add(&data);
    world.spawn((LocalTransform::new(position), handle, Tint(tint)))
}
