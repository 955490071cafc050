pub mod mesh;
pub mod shader;

use glam::Mat4;
use hecs::World;
use mesh::GpuMesh;
use shader::ShaderProgram;

use crate::components::{Hidden, LocalTransform, MeshHandle, Tint};
use crate::grid::{MeshConsumer, MeshData};

const VERT_SRC: &str = include_str!("../../shaders/grid.vert");
const FRAG_SRC: &str = include_str!("../../shaders/grid.frag");

const BACKGROUND: [f32; 3] = [0.06, 0.07, 0.09];

/// Holds all uploaded meshes. Entities reference meshes by MeshHandle index.
pub struct MeshStore {
    meshes: Vec<GpuMesh>,
}

impl MeshStore {
    pub fn new() -> Self {
        Self { meshes: Vec::new() }
    }

    /// Upload `data` into a fresh GpuMesh and return its handle.
    pub fn add(&mut self, data: &MeshData) -> MeshHandle {
        let mut mesh = GpuMesh::new();
        mesh.accept(data);
        let handle = MeshHandle(self.meshes.len());
        self.meshes.push(mesh);
        handle
    }

    pub fn get(&self, handle: MeshHandle) -> &GpuMesh {
        &self.meshes[handle.0]
    }

    pub fn get_mut(&mut self, handle: MeshHandle) -> &mut GpuMesh {
        &mut self.meshes[handle.0]
    }
}

pub struct Renderer {
    shader: ShaderProgram,
}

impl Renderer {
    pub fn init() -> Self {
        unsafe {
            // Flat alpha-blended overlay: the fading stroke tips need
            // blending, and nothing in the scene writes depth.
            gl::Disable(gl::DEPTH_TEST);
            gl::Enable(gl::BLEND);
            gl::BlendFunc(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);
            gl::ClearColor(BACKGROUND[0], BACKGROUND[1], BACKGROUND[2], 1.0);
        }

        let shader =
            ShaderProgram::from_sources(VERT_SRC, FRAG_SRC).expect("Failed to compile shaders");

        Self { shader }
    }

    pub fn draw_scene(&mut self, world: &World, meshes: &MeshStore, view: &Mat4, proj: &Mat4) {
        unsafe {
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }

        self.shader.bind();
        self.shader.set_mat4("u_view", view);
        self.shader.set_mat4("u_projection", proj);

        for (_entity, (transform, mesh_handle, tint, hidden)) in world
            .query::<(&LocalTransform, &MeshHandle, &Tint, Option<&Hidden>)>()
            .iter()
        {
            if hidden.is_some() {
                continue;
            }
            self.shader.set_mat4("u_model", &transform.matrix());
            self.shader.set_vec4("u_tint", tint.0.to_array());
            meshes.get(*mesh_handle).draw();
        }
    }
}
