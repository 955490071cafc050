use glam::{Mat4, Vec3};

/// Orbit camera centered on the grid origin. Left-drag orbits, the
/// wheel zooms; distance is clamped so the grid never clips away.
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub sensitivity: f32,
    pub fov: f32,
}

impl OrbitCamera {
    /// `distance` should be proportional to the grid's world size so
    /// the whole overlay is in view on startup.
    pub fn new(distance: f32) -> Self {
        Self {
            yaw: 90.0,
            pitch: 0.0,
            distance,
            min_distance: distance * 0.05,
            max_distance: distance * 10.0,
            sensitivity: 0.25,
            fov: 45.0,
        }
    }

    pub fn orbit(&mut self, mouse_dx: f32, mouse_dy: f32) {
        self.yaw += mouse_dx * self.sensitivity;
        self.pitch -= mouse_dy * self.sensitivity;
        self.pitch = self.pitch.clamp(-89.0, 89.0);
    }

    pub fn zoom(&mut self, wheel_dy: f32) {
        self.distance = (self.distance * 0.9_f32.powf(wheel_dy))
            .clamp(self.min_distance, self.max_distance);
    }

    pub fn position(&self) -> Vec3 {
        let yaw_rad = self.yaw.to_radians();
        let pitch_rad = self.pitch.to_radians();
        Vec3::new(
            yaw_rad.cos() * pitch_rad.cos(),
            pitch_rad.sin(),
            yaw_rad.sin() * pitch_rad.cos(),
        ) * self.distance
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), Vec3::ZERO, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        let near = self.min_distance * 0.5;
        let far = self.max_distance * 4.0;
        Mat4::perspective_rh_gl(self.fov.to_radians(), aspect, near, far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_orientation_faces_the_grid_plane() {
        let camera = OrbitCamera::new(2.0);
        let pos = camera.position();
        // Starts on the +Z axis, looking straight at the XY plane.
        assert!(pos.x.abs() < 1e-5);
        assert!(pos.y.abs() < 1e-5);
        assert!((pos.z - 2.0).abs() < 1e-5);
    }

    #[test]
    fn zoom_respects_distance_clamp() {
        let mut camera = OrbitCamera::new(1.0);
        camera.zoom(1000.0);
        assert_eq!(camera.distance, camera.min_distance);
        camera.zoom(-1000.0);
        assert_eq!(camera.distance, camera.max_distance);
    }

    #[test]
    fn pitch_is_clamped_at_the_poles() {
        let mut camera = OrbitCamera::new(1.0);
        camera.orbit(0.0, -10_000.0);
        assert_eq!(camera.pitch, 89.0);
        camera.orbit(0.0, 10_000.0);
        assert_eq!(camera.pitch, -89.0);
    }
}
