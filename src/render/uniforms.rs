use bytemuck::{Pod, Zeroable};
use ultraviolet::Mat4;

use super::camera::Camera;

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Uniforms {
    pub view_proj: [[f32; 4]; 4],
    pub camera_pos: [f32; 3],
    pub time: f32,
    pub sky_color: [f32; 3],
    pub _pad: f32,
}

impl Uniforms {
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::identity().into(),
            camera_pos: [0.0, 0.0, 0.0],
            time: 0.0,
            sky_color: [0.55, 0.72, 0.92],
            _pad: 0.0,
        }
    }

    pub fn update(&mut self, camera: &Camera, time: f32) {
        self.view_proj = camera.view_projection_matrix().into();
        self.camera_pos = camera.position.into();
        self.time = time;
    }
}

impl Default for Uniforms {
    fn default() -> Self {
        Self::new()
    }
}
