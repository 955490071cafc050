use glam::{Mat4, Quat, Vec3, Vec4};

/// Spatial transform with position, rotation, and scale.
pub struct LocalTransform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl LocalTransform {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

/// Index into the MeshStore resource.
#[derive(Clone, Copy)]
pub struct MeshHandle(pub usize);

/// RGBA multiplier applied on top of the mesh's own vertex colors.
pub struct Tint(pub Vec4);

/// Marker: entity is skipped by the renderer.
pub struct Hidden;

/// Marker: the faint reference grid behind the primary one.
pub struct Backdrop;
