use winit::{
    event::{DeviceEvent, ElementState, KeyEvent},
    keyboard::{KeyCode, PhysicalKey},
};

use super::fly_camera::{FlyCamera, Movement};

/// Translates winit input into [`FlyCamera`] updates.
///
/// Keyboard events only record which movement keys are held; the snapshot is
/// applied once per frame in [`CameraController::update_camera`]. Mouse motion
/// turns the camera as soon as it arrives.
#[derive(Debug)]
pub struct CameraController {
    movement: Movement,
    look_enabled: bool,
}

impl CameraController {
    pub fn new() -> Self {
        Self {
            movement: Movement::default(),
            look_enabled: true,
        }
    }

    pub fn process_events(&mut self, event: &DeviceEvent, camera: &mut FlyCamera) {
        if let DeviceEvent::MouseMotion { delta } = event {
            if self.look_enabled {
                // Screen y grows downwards; pitch grows upwards.
                camera.apply_look_delta(delta.0 as f32, -delta.1 as f32);
            }
        }
    }

    pub fn process_keyed_events(&mut self, event: &KeyEvent) -> bool {
        match event.physical_key {
            PhysicalKey::Code(code) => self.process_key(code, event.state),
            PhysicalKey::Unidentified(_) => false,
        }
    }

    /// Record a key transition. Returns `true` if the key moves the camera.
    pub fn process_key(&mut self, code: KeyCode, state: ElementState) -> bool {
        let pressed = state == ElementState::Pressed;
        match code {
            KeyCode::KeyW | KeyCode::ArrowUp => self.movement.forward = pressed,
            KeyCode::KeyS | KeyCode::ArrowDown => self.movement.backward = pressed,
            KeyCode::KeyA | KeyCode::ArrowLeft => self.movement.left = pressed,
            KeyCode::KeyD | KeyCode::ArrowRight => self.movement.right = pressed,
            _ => return false,
        }
        true
    }

    /// Move the camera by the keys currently held.
    pub fn update_camera(&self, camera: &mut FlyCamera, delta_time: f32) {
        if !self.movement.is_idle() {
            camera.apply_motion(self.movement, delta_time);
        }
    }

    pub fn movement(&self) -> Movement {
        self.movement
    }

    /// Ignore mouse motion, e.g. while the cursor is released to a UI.
    pub fn set_look_enabled(&mut self, enabled: bool) {
        self.look_enabled = enabled;
    }

    /// Forget held keys, e.g. after the window loses focus.
    pub fn release_all(&mut self) {
        self.movement = Movement::default();
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{InnerSpace, Vector3, Zero};

    fn camera() -> FlyCamera {
        FlyCamera::new(Vector3::zero(), Vector3::unit_y(), -90.0, 0.0)
    }

    #[test]
    fn test_keys_build_movement_snapshot() {
        let mut controller = CameraController::new();
        assert!(controller.process_key(KeyCode::KeyW, ElementState::Pressed));
        assert!(controller.process_key(KeyCode::ArrowRight, ElementState::Pressed));
        assert!(!controller.process_key(KeyCode::KeyQ, ElementState::Pressed));

        assert_eq!(
            controller.movement(),
            Movement {
                forward: true,
                right: true,
                ..Default::default()
            }
        );

        controller.process_key(KeyCode::KeyW, ElementState::Released);
        assert!(!controller.movement().forward);
        assert!(controller.movement().right);

        controller.release_all();
        assert!(controller.movement().is_idle());
    }

    #[test]
    fn test_update_moves_camera() {
        let mut controller = CameraController::new();
        let mut camera = camera();

        controller.process_key(KeyCode::KeyS, ElementState::Pressed);
        controller.update_camera(&mut camera, 2.0);
        assert!((camera.position() - Vector3::new(0.0, 0.0, 5.0)).magnitude() < 1e-5);
    }

    #[test]
    fn test_mouse_motion_inverts_y() {
        let mut controller = CameraController::new();
        let mut camera = camera();

        controller.process_events(&DeviceEvent::MouseMotion { delta: (10.0, 20.0) }, &mut camera);
        assert!((camera.yaw() - -89.0).abs() < 1e-5);
        assert!((camera.pitch() - -2.0).abs() < 1e-5);
    }

    #[test]
    fn test_look_can_be_disabled() {
        let mut controller = CameraController::new();
        let mut camera = camera();
        controller.set_look_enabled(false);

        controller.process_events(&DeviceEvent::MouseMotion { delta: (10.0, 20.0) }, &mut camera);
        assert_eq!(camera.yaw(), -90.0);
    }
}
