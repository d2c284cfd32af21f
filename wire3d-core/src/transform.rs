/// Yaw/pitch rotation state and basis-vector frames
use nalgebra::Vector3;

/// Rotation state as yaw and pitch (in radians)
///
/// Yaw rotates about the vertical axis, pitch about the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    pub yaw: f32,
    pub pitch: f32,
}

impl Orientation {
    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self { yaw, pitch }
    }

    pub fn zero() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Rotate by delta amounts (in radians)
    pub fn rotate(&mut self, dyaw: f32, dpitch: f32) {
        self.yaw += dyaw;
        self.pitch += dpitch;
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::zero()
    }
}

/// Three orthonormal axes describing a rotated coordinate frame
#[derive(Debug, Clone, Copy)]
pub struct Basis {
    pub ihat: Vector3<f32>,
    pub jhat: Vector3<f32>,
    pub khat: Vector3<f32>,
}

impl Basis {
    pub fn identity() -> Self {
        Self {
            ihat: Vector3::x(),
            jhat: Vector3::y(),
            khat: Vector3::z(),
        }
    }

    /// Build the combined frame for a yaw-then-pitch rotation.
    ///
    /// Yaw is the outer rotation: the pitch frame's axes are re-expressed
    /// through the yaw frame. Swapping the order gives a different
    /// orientation whenever both angles are nonzero.
    pub fn from_yaw_pitch(yaw: f32, pitch: f32) -> Self {
        let (sin_yaw, cos_yaw) = yaw.sin_cos();
        let (sin_pitch, cos_pitch) = pitch.sin_cos();

        let yawed = Self {
            ihat: Vector3::new(cos_yaw, 0.0, sin_yaw),
            jhat: Vector3::new(0.0, 1.0, 0.0),
            khat: Vector3::new(-sin_yaw, 0.0, cos_yaw),
        };
        let pitched = Self {
            ihat: Vector3::new(1.0, 0.0, 0.0),
            jhat: Vector3::new(0.0, cos_pitch, -sin_pitch),
            khat: Vector3::new(0.0, sin_pitch, cos_pitch),
        };

        Self {
            ihat: yawed.apply(&pitched.ihat),
            jhat: yawed.apply(&pitched.jhat),
            khat: yawed.apply(&pitched.khat),
        }
    }

    /// Treat `v`'s components as coordinates in this frame and return the
    /// corresponding vector in the ambient frame.
    pub fn apply(&self, v: &Vector3<f32>) -> Vector3<f32> {
        self.ihat * v.x + self.jhat * v.y + self.khat * v.z
    }
}

impl Default for Basis {
    fn default() -> Self {
        Self::identity()
    }
}
