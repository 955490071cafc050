use glam::{Vec3, Vec4};
use hecs::{Entity, World};

use crate::components::Backdrop;
use crate::grid::GridParams;
use crate::renderer::MeshStore;
use crate::scene::prefabs::spawn_grid;

const PRIMARY_TINT: Vec4 = Vec4::new(0.55, 0.85, 1.0, 1.0);
const BACKDROP_TINT: Vec4 = Vec4::new(1.0, 1.0, 1.0, 0.22);

/// Populate the viewer scene: the primary grid from the CLI parameters
/// plus a finer, faint backdrop grid slightly behind it.
/// Returns the mesh store (owns all GPU mesh data) and the primary
/// grid entity.
pub fn load_viewer_scene(world: &mut World, params: &GridParams) -> (MeshStore, Entity) {
    let mut meshes = MeshStore::new();

    let primary = spawn_grid(world, &mut meshes, params, Vec3::ZERO, PRIMARY_TINT);

    let backdrop_params = GridParams {
        cells: params.cells.saturating_mul(2),
        world_size: params.world_size,
        thickness: params.thickness * 0.5,
    };
    let backdrop = spawn_grid(
        world,
        &mut meshes,
        &backdrop_params,
        Vec3::new(0.0, 0.0, -0.02 * params.world_size),
        BACKDROP_TINT,
    );
    world.insert_one(backdrop, Backdrop).unwrap();

    (meshes, primary)
}
