use super::constants::{
    CAMERA_DISTANCE, CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_ROTATION_STEP,
    ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE, ORBIT_PHI_EPSILON, ORBIT_ROTATE_SPEED,
    ORBIT_ZOOM_SPEED,
};
use super::math::{rotate_clockwise, rotate_counter_clockwise};
use super::settings::Settings;
use glam::{Mat4, Vec3};

/// Spherical orbit around `target`; `phi` is measured from +Y, `theta` around
/// Y starting at +Z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitControls {
    pub target: Vec3,
    pub distance: f32,
    pub phi: f32,
    pub theta: f32,
}

impl OrbitControls {
    pub fn new(distance: f32, phi: f32) -> Self {
        Self {
            target: Vec3::ZERO,
            distance,
            phi,
            theta: 0.0,
        }
    }

    pub fn eye(&self) -> Vec3 {
        let (sp, cp) = self.phi.sin_cos();
        let (st, ct) = self.theta.sin_cos();
        self.target + self.distance * Vec3::new(sp * st, cp, sp * ct)
    }

    /// Re-derive the spherical state from an externally moved eye.
    pub fn set_eye(&mut self, eye: Vec3) {
        let offset = eye - self.target;
        let distance = offset.length();
        if distance <= f32::EPSILON {
            return;
        }
        self.distance = distance;
        self.phi = (offset.y / distance).clamp(-1.0, 1.0).acos();
        self.theta = offset.x.atan2(offset.z);
    }

    /// Pointer drag in pixels; a full viewport height drag turns by
    /// `ORBIT_ROTATE_SPEED` radians.
    pub fn rotate(&mut self, dx_px: f32, dy_px: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        self.theta -= dx_px / h * ORBIT_ROTATE_SPEED;
        self.phi = (self.phi - dy_px / h * ORBIT_ROTATE_SPEED)
            .clamp(ORBIT_PHI_EPSILON, std::f32::consts::PI - ORBIT_PHI_EPSILON);
    }

    pub fn zoom(&mut self, wheel_delta: f32) {
        let factor = (1.0 + wheel_delta * ORBIT_ZOOM_SPEED).max(0.1);
        self.distance = (self.distance * factor).clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
    }
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new(CAMERA_DISTANCE, std::f32::consts::FRAC_PI_2)
    }
}

/// Orbit camera plus the toggle-driven extras: axis rotations, a fire-once
/// recenter and an optional periodic recenter.
#[derive(Clone, Debug)]
pub struct CameraRig {
    pub controls: OrbitControls,
    original: OrbitControls,
    eye: Vec3,
    pub aspect: f32,
    auto_recenter_frames: Option<u32>,
    frame: u32,
}

impl CameraRig {
    pub fn new(aspect: f32, auto_recenter_frames: Option<u32>) -> Self {
        let controls = OrbitControls::default();
        Self {
            controls,
            original: controls,
            eye: controls.eye(),
            aspect,
            auto_recenter_frames: auto_recenter_frames.filter(|&n| n > 0),
            frame: 0,
        }
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    pub fn target(&self) -> Vec3 {
        self.controls.target
    }

    pub fn original_eye(&self) -> Vec3 {
        self.original.eye()
    }

    pub fn original_target(&self) -> Vec3 {
        self.original.target
    }

    pub fn recenter(&mut self) {
        self.controls = self.original;
        self.eye = self.controls.eye();
    }

    /// One frame of camera motion. Returns true when a recenter happened.
    ///
    /// Axis rotations all start from the eye as the orbit controls left it,
    /// so with opposing toggles on the later one wins for shared components.
    pub fn update(&mut self, settings: &mut Settings) -> bool {
        let snapshot = self.controls.eye();
        let (x, y, z) = (snapshot.x, snapshot.y, snapshot.z);
        let mut eye = snapshot;
        let a = CAMERA_ROTATION_STEP;

        if settings.rotate_x {
            (eye.x, eye.z) = rotate_clockwise(x, z, a);
        }
        if settings.rotate_y {
            (eye.y, eye.z) = rotate_clockwise(y, z, a);
        }
        if settings.rotate_anti_x {
            (eye.x, eye.z) = rotate_counter_clockwise(x, z, a);
        }
        if settings.rotate_anti_y {
            (eye.y, eye.z) = rotate_counter_clockwise(y, z, a);
        }
        if eye != snapshot {
            self.controls.set_eye(eye);
        }
        self.eye = eye;

        let mut recentered = false;
        if settings.take_centre() {
            self.recenter();
            recentered = true;
        }
        if let Some(period) = self.auto_recenter_frames {
            if self.frame % period == 0 {
                self.recenter();
                recentered = true;
            }
            self.frame = (self.frame + 1) % period;
        }
        recentered
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.controls.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            CAMERA_FOV_DEG.to_radians(),
            self.aspect.max(1e-3),
            CAMERA_NEAR,
            CAMERA_FAR,
        )
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
