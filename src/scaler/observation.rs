//! Per-frame marker snapshots and the distance probe.

use nalgebra::Point3;

/// Tracked state of one AR marker for a single frame.
///
/// The host tracking engine refreshes marker pose and visibility before the
/// scaler runs; an observation is the immutable snapshot of that state the
/// scaler consumes. Identity is positional: the caller decides which
/// observation plays the content role and which the reference role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerObservation {
    /// Whether the tracking engine currently sees the marker.
    pub is_tracked: bool,
    /// World-space position of the marker. Only meaningful while tracked.
    pub position: Point3<f32>,
}

impl MarkerObservation {
    #[inline]
    pub fn new(is_tracked: bool, position: Point3<f32>) -> Self {
        Self {
            is_tracked,
            position,
        }
    }

    /// Snapshot of a visible marker at `position`.
    #[inline]
    pub fn tracked(position: Point3<f32>) -> Self {
        Self::new(true, position)
    }

    /// Snapshot of a marker the engine has lost sight of.
    #[inline]
    pub fn untracked() -> Self {
        Self::new(false, Point3::origin())
    }
}

impl Default for MarkerObservation {
    fn default() -> Self {
        Self::untracked()
    }
}

/// Euclidean distance between two markers, `0.0` if either is untracked.
///
/// The zero sentinel keeps the probe total; under the tracking gate in
/// [`DistanceScaler::update`](crate::DistanceScaler::update) the untracked
/// branch never runs.
pub fn marker_distance(content: &MarkerObservation, reference: &MarkerObservation) -> f32 {
    if content.is_tracked && reference.is_tracked {
        nalgebra::distance(&content.position, &reference.position)
    } else {
        0.0
    }
}
