//! Main distance-to-scale update loop.

use log::debug;
use nalgebra::Vector3;
use thiserror::Error;

use crate::scaler::observation::{MarkerObservation, marker_distance};
use crate::scaler::policy::scale_multiplier;
use crate::scaler::scaler_state::ScalerState;
use crate::scaler::transform::Transform;

/// Configuration for the [`DistanceScaler`].
#[derive(Debug, Clone)]
pub struct ScalerConfig {
    /// Divisor for the growth bound: updates stop once any scale axis falls
    /// to `original_scale / min_scale`. Negative by default, which puts the
    /// bound below zero where a positive scale never reaches it.
    pub min_scale: f32,
    /// Emit one debug log line per tracked frame with the marker distance.
    pub log_distance: bool,
}

impl Default for ScalerConfig {
    fn default() -> Self {
        Self {
            min_scale: -2.0,
            log_distance: true,
        }
    }
}

/// Construction-time configuration failures.
///
/// Lost tracking is not an error; it is the [`ScalerState::Idle`] steady
/// state. Everything that can go wrong is rejected before the first frame.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("reference not set: content marker tracker")]
    MissingContentTracker,
    #[error("reference not set: reference marker tracker")]
    MissingReferenceTracker,
    #[error("reference not set: content transform")]
    MissingTransform,
    #[error("min scale divisor must be finite and non-zero, got {0}")]
    InvalidMinScale(f32),
}

/// What one call to [`DistanceScaler::update`] did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// One or both markers untracked; scale and position untouched.
    Idle,
    /// Both markers tracked; the object was repositioned, and the scale
    /// delta was applied unless the growth bound blocked it.
    Tracked {
        /// Distance between the two markers this frame.
        distance: f32,
        /// Multiplier chosen by the distance policy.
        multiplier: f32,
        /// Whether the accumulator actually changed the scale.
        scale_applied: bool,
    },
}

/// Adjusts the content object's scale from the distance between two markers.
///
/// Owns the content transform for the lifetime of the scaler. The host calls
/// [`update`](Self::update) once per rendering frame with fresh marker
/// snapshots and reads the resulting transform back; there is no internal
/// scheduling and no work between frames.
#[derive(Debug)]
pub struct DistanceScaler {
    transform: Transform,
    original_scale: Vector3<f32>,
    scale_bound: Vector3<f32>,
    state: ScalerState,
    config: ScalerConfig,
}

impl DistanceScaler {
    /// Create a scaler for the content object currently described by
    /// `transform`.
    ///
    /// The transform's scale is captured as the original scale and never
    /// re-read; the growth bound `original_scale / min_scale` is fixed here
    /// as well.
    pub fn new(transform: Transform, config: ScalerConfig) -> Result<Self, ConfigError> {
        if !config.min_scale.is_finite() || config.min_scale == 0.0 {
            return Err(ConfigError::InvalidMinScale(config.min_scale));
        }

        let original_scale = transform.local_scale;
        let scale_bound = original_scale / config.min_scale;

        Ok(Self {
            transform,
            original_scale,
            scale_bound,
            state: ScalerState::Idle,
            config,
        })
    }

    /// Run one frame.
    ///
    /// Proceeds only when both markers are tracked; an untracked frame is a
    /// silent no-op that leaves the transform bit-identical. On a tracked
    /// frame the scale delta is accumulated under the growth bound and the
    /// object is re-seated above the marker whether or not the delta landed.
    pub fn update(
        &mut self,
        content: &MarkerObservation,
        reference: &MarkerObservation,
    ) -> FrameOutcome {
        if !(content.is_tracked && reference.is_tracked) {
            self.state = ScalerState::Idle;
            return FrameOutcome::Idle;
        }

        self.state = ScalerState::Tracking;

        let distance = marker_distance(content, reference);
        if self.config.log_distance {
            debug!("distance content <-> reference = {distance}");
        }

        let multiplier = scale_multiplier(distance);
        let scale_applied = self.accumulate(multiplier);
        self.reposition();

        FrameOutcome::Tracked {
            distance,
            multiplier,
            scale_applied,
        }
    }

    /// Add `multiplier` to every scale axis, unless the bound has been hit.
    ///
    /// The check is all-or-nothing: if any axis has fallen to the bound the
    /// whole frame's delta is dropped, with no per-axis clamping and no
    /// resumption once an axis recovers.
    fn accumulate(&mut self, multiplier: f32) -> bool {
        let scale = self.transform.local_scale;
        let bound = self.scale_bound;

        let within = scale.x > bound.x && scale.y > bound.y && scale.z > bound.z;
        if within {
            self.transform.local_scale += Vector3::repeat(multiplier);
        }
        within
    }

    /// Re-seat the object so it floats just above the marker surface.
    ///
    /// Only the vertical axis is derived from the scale; x and z keep
    /// whatever the host last placed there.
    fn reposition(&mut self) {
        let position = self.transform.local_position;
        self.transform.local_position = Vector3::new(
            position.x,
            self.transform.local_scale.y * 0.5 + 0.25,
            position.z,
        );
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    /// Scale captured at construction.
    pub fn original_scale(&self) -> Vector3<f32> {
        self.original_scale
    }

    /// Per-axis bound below which accumulation stops.
    pub fn scale_bound(&self) -> Vector3<f32> {
        self.scale_bound
    }

    pub fn state(&self) -> ScalerState {
        self.state
    }

    pub fn config(&self) -> &ScalerConfig {
        &self.config
    }
}
