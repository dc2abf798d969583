use cgmath::{perspective, Deg, Matrix4, Rad, SquareMatrix, Vector3};
use winit::event::{DeviceEvent, KeyEvent};

use super::{camera_controller::CameraController, fly_camera::FlyCamera};

/// Converts cgmath's OpenGL clip space (z in [-1, 1]) to wgpu's (z in [0, 1]).
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

pub trait Camera {
    fn build_view_matrix(&self) -> Matrix4<f32>;
    fn eye(&self) -> Vector3<f32>;
}

/// Perspective projection kept separate from the camera so a window resize
/// never touches orientation state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub aspect: f32,
    pub fovy: Rad<f32>,
    pub znear: f32,
    pub zfar: f32,
}

impl Projection {
    pub fn new<F: Into<Rad<f32>>>(width: u32, height: u32, fovy: F, znear: f32, zfar: f32) -> Self {
        Self {
            aspect: aspect_ratio(width, height),
            fovy: fovy.into(),
            znear,
            zfar,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = aspect_ratio(width, height);
    }

    pub fn calc_matrix(&self) -> Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar)
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(1024, 576, Deg(45.0), 0.1, 100.0)
    }
}

// A minimized window reports a zero height.
fn aspect_ratio(width: u32, height: u32) -> f32 {
    width as f32 / height.max(1) as f32
}

/// Owns the camera together with the controller feeding it input.
pub struct CameraManager {
    pub camera: FlyCamera,
    pub controller: CameraController,
}

impl CameraManager {
    pub fn new(camera: FlyCamera, controller: CameraController) -> Self {
        Self { camera, controller }
    }

    pub fn process_event(&mut self, event: &DeviceEvent) {
        self.controller.process_events(event, &mut self.camera);
    }

    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        self.controller.process_keyed_events(event);
    }

    /// Apply held movement keys for this frame.
    pub fn update(&mut self, delta_time: f32) {
        self.controller.update_camera(&mut self.camera, delta_time);
    }

    /// Get the view projection matrix from the camera
    pub fn get_view_proj_matrix(&self, projection: &Projection) -> Matrix4<f32> {
        projection.calc_matrix() * self.camera.build_view_matrix()
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug, PartialEq)]
pub struct CameraUniform {
    /// The eye position of the camera in homogenous coordinates.
    ///
    /// Homogenous coordinates are used to fullfill the 16 byte alignment requirement.
    pub view_position: [f32; 4],

    /// Contains the view projection matrix.
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn update_view_proj<C: Camera>(&mut self, camera: &C, projection: &Projection) {
        self.view_position = camera.eye().extend(1.0).into();
        self.view_proj = (projection.calc_matrix() * camera.build_view_matrix()).into();
    }
}

impl Default for CameraUniform {
    /// Creates a default [CameraUniform].
    fn default() -> Self {
        Self {
            view_position: [0.0; 4],
            view_proj: Matrix4::identity().into(),
        }
    }
}
