//! Trait for host-engine marker tracking handles.

use nalgebra::Point3;

use crate::scaler::MarkerObservation;

/// Trait for a host tracking engine's view of one AR marker.
///
/// Implement this for the engine object that knows a marker's visibility
/// and world pose. The engine is expected to refresh that state before the
/// scaler runs each frame; the scaler only ever reads it.
///
/// # Example
///
/// ```ignore
/// use arscale_rs::MarkerTracker;
/// use nalgebra::Point3;
///
/// struct EngineMarker {
///     // Your engine's marker handle here
/// }
///
/// impl MarkerTracker for EngineMarker {
///     fn is_tracked(&self) -> bool {
///         // Ask the engine whether the marker is currently visible
///         true
///     }
///
///     fn position(&self) -> Point3<f32> {
///         // Ask the engine for the marker's world-space position
///         Point3::origin()
///     }
/// }
/// ```
pub trait MarkerTracker {
    /// Whether the engine currently sees the marker.
    fn is_tracked(&self) -> bool;

    /// The marker's world-space position. Only meaningful while tracked.
    fn position(&self) -> Point3<f32>;

    /// Snapshot both fields for this frame.
    fn observation(&self) -> MarkerObservation {
        MarkerObservation::new(self.is_tracked(), self.position())
    }
}

/// A stored snapshot acts as its own tracker. Useful for tests and for
/// hosts that already deliver marker state as plain per-frame data.
impl MarkerTracker for MarkerObservation {
    fn is_tracked(&self) -> bool {
        self.is_tracked
    }

    fn position(&self) -> Point3<f32> {
        self.position
    }

    fn observation(&self) -> MarkerObservation {
        *self
    }
}
