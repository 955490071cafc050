use gl::types::*;
use std::mem;
use std::ptr;

use crate::grid::{MeshConsumer, MeshData};

/// Floats per interleaved vertex: position (3) + RGBA color (4).
const VERTEX_STRIDE: usize = 7;

/// GPU-side copy of a generated mesh: a VAO with one interleaved vertex
/// buffer and one u32 index buffer. Starts empty; `accept` uploads
/// (replacing any previous upload) and `release` tears down. Dropping
/// releases.
pub struct GpuMesh {
    vao: GLuint,
    vbo: GLuint,
    ebo: GLuint,
    index_count: i32,
}

impl GpuMesh {
    pub fn new() -> Self {
        Self {
            vao: 0,
            vbo: 0,
            ebo: 0,
            index_count: 0,
        }
    }

    pub fn draw(&self) {
        if self.vao == 0 {
            return;
        }
        unsafe {
            gl::BindVertexArray(self.vao);
            gl::DrawElements(gl::TRIANGLES, self.index_count, gl::UNSIGNED_INT, ptr::null());
            gl::BindVertexArray(0);
        }
    }
}

impl MeshConsumer for GpuMesh {
    fn accept(&mut self, mesh: &MeshData) {
        self.release();

        let mut interleaved = Vec::with_capacity(mesh.positions.len() * VERTEX_STRIDE);
        for (p, c) in mesh.positions.iter().zip(&mesh.colors) {
            interleaved.extend_from_slice(&[p.x, p.y, p.z, c.x, c.y, c.z, c.w]);
        }

        unsafe {
            gl::GenVertexArrays(1, &mut self.vao);
            gl::GenBuffers(1, &mut self.vbo);
            gl::GenBuffers(1, &mut self.ebo);

            gl::BindVertexArray(self.vao);

            gl::BindBuffer(gl::ARRAY_BUFFER, self.vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                (interleaved.len() * mem::size_of::<f32>()) as GLsizeiptr,
                interleaved.as_ptr() as *const _,
                gl::STATIC_DRAW,
            );

            gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, self.ebo);
            gl::BufferData(
                gl::ELEMENT_ARRAY_BUFFER,
                (mesh.indices.len() * mem::size_of::<u32>()) as GLsizeiptr,
                mesh.indices.as_ptr() as *const _,
                gl::STATIC_DRAW,
            );

            let stride = (VERTEX_STRIDE * mem::size_of::<f32>()) as GLsizei;

            // position attribute (location 0)
            gl::VertexAttribPointer(0, 3, gl::FLOAT, gl::FALSE, stride, ptr::null());
            gl::EnableVertexAttribArray(0);

            // color attribute (location 1)
            gl::VertexAttribPointer(
                1,
                4,
                gl::FLOAT,
                gl::FALSE,
                stride,
                (3 * mem::size_of::<f32>()) as *const _,
            );
            gl::EnableVertexAttribArray(1);

            gl::BindVertexArray(0);
        }

        self.index_count = mesh.indices.len() as i32;
    }

    fn release(&mut self) {
        if self.vao == 0 {
            return;
        }
        unsafe {
            gl::DeleteVertexArrays(1, &self.vao);
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteBuffers(1, &self.ebo);
        }
        self.vao = 0;
        self.vbo = 0;
        self.ebo = 0;
        self.index_count = 0;
    }
}

impl Drop for GpuMesh {
    fn drop(&mut self) {
        self.release();
    }
}
