use super::camera_utils::Camera;
use cgmath::*;

/// Pitch is kept strictly inside ±90° so `front` never lines up with
/// `world_up`, which would collapse `right` to zero.
pub const PITCH_LIMIT: f32 = 89.0;
pub const DEFAULT_SPEED: f32 = 2.5;
pub const DEFAULT_SENSITIVITY: f32 = 0.1;

/// Movement keys held during a frame.
///
/// Any combination may be active; opposite directions cancel and diagonals are
/// not normalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Movement {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl Movement {
    pub fn is_idle(&self) -> bool {
        !(self.forward || self.backward || self.left || self.right)
    }
}

/// Free-look camera driven by yaw and pitch Euler angles (in degrees).
///
/// The `front`/`right`/`up` basis is recomputed inside every method that
/// changes an angle, so it is never stale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlyCamera {
    position: Vector3<f32>,
    front: Vector3<f32>,
    up: Vector3<f32>,
    right: Vector3<f32>,
    world_up: Vector3<f32>,
    yaw: f32,
    pitch: f32,
    speed: f32,
    sensitivity: f32,
}

impl Camera for FlyCamera {
    fn build_view_matrix(&self) -> Matrix4<f32> {
        self.view_matrix()
    }

    fn eye(&self) -> Vector3<f32> {
        self.position
    }
}

impl FlyCamera {
    /// Create a camera at `position` looking along `yaw`/`pitch`.
    ///
    /// `world_up` must not be the zero vector. `pitch` is clamped like any
    /// later update.
    pub fn new(position: Vector3<f32>, world_up: Vector3<f32>, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            front: Vector3::zero(), // Derived in `update_camera_vectors()` below.
            up: Vector3::zero(),
            right: Vector3::zero(),
            world_up,
            yaw,
            pitch: clamp_pitch(pitch),
            speed: DEFAULT_SPEED,
            sensitivity: DEFAULT_SENSITIVITY,
        };
        camera.update_camera_vectors();
        camera
    }

    fn update_camera_vectors(&mut self) {
        let (sin_yaw, cos_yaw) = Rad::from(Deg(self.yaw)).0.sin_cos();
        let (sin_pitch, cos_pitch) = Rad::from(Deg(self.pitch)).0.sin_cos();

        self.front = Vector3::new(cos_yaw * cos_pitch, sin_pitch, sin_yaw * cos_pitch).normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }

    /// Move along the current basis for `delta_time` seconds.
    pub fn apply_motion(&mut self, movement: Movement, delta_time: f32) {
        let velocity = self.speed * delta_time;

        if movement.forward {
            self.position += self.front * velocity;
        }
        if movement.backward {
            self.position -= self.front * velocity;
        }
        if movement.left {
            self.position -= self.right * velocity;
        }
        if movement.right {
            self.position += self.right * velocity;
        }
    }

    /// Turn by a pointer delta scaled by the sensitivity.
    pub fn apply_look_delta(&mut self, dx: f32, dy: f32) {
        self.set_orientation(
            self.yaw + dx * self.sensitivity,
            self.pitch + dy * self.sensitivity,
        );
    }

    /// Set both angles directly. Pitch is clamped to ±[`PITCH_LIMIT`].
    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = clamp_pitch(pitch);
        self.update_camera_vectors();
    }

    /// Right-handed look-at from the position towards `position + front`.
    pub fn view_matrix(&self) -> Matrix4<f32> {
        let eye = Point3::from_vec(self.position);
        Matrix4::look_at_rh(eye, eye + self.front, self.up)
    }

    /// The view matrix with translation removed, for drawing a skybox that
    /// stays centered on the viewer.
    pub fn skybox_view_matrix(&self) -> Matrix4<f32> {
        let mut view = self.view_matrix();
        view.w = Vector4::unit_w();
        view
    }

    pub fn set_position(&mut self, position: Vector3<f32>) {
        self.position = position;
    }

    /// No validation: negative speeds invert the controls.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    /// No validation: negative sensitivity inverts the look axes.
    pub fn set_sensitivity(&mut self, sensitivity: f32) {
        self.sensitivity = sensitivity;
    }

    pub fn position(&self) -> Vector3<f32> {
        self.position
    }

    pub fn front(&self) -> Vector3<f32> {
        self.front
    }

    pub fn right(&self) -> Vector3<f32> {
        self.right
    }

    pub fn up(&self) -> Vector3<f32> {
        self.up
    }

    pub fn world_up(&self) -> Vector3<f32> {
        self.world_up
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }
}

fn clamp_pitch(pitch: f32) -> f32 {
    pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT)
}
