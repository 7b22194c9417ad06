//! The slice of the content object's transform this crate reads and writes.

use nalgebra::Vector3;

/// Local scale and local position of the content virtual object.
///
/// The host engine owns the full transform hierarchy; the scaler only ever
/// touches these two fields, and only while both markers are tracked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Per-axis scale relative to the parent marker.
    pub local_scale: Vector3<f32>,
    /// Position relative to the parent marker.
    pub local_position: Vector3<f32>,
}

impl Transform {
    #[inline]
    pub fn new(local_scale: Vector3<f32>, local_position: Vector3<f32>) -> Self {
        Self {
            local_scale,
            local_position,
        }
    }

    /// Unit scale at the parent's origin.
    #[inline]
    pub fn identity() -> Self {
        Self::new(Vector3::repeat(1.0), Vector3::zeros())
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
