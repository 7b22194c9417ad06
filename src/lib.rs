//! Distance-driven scale control for virtual content anchored to AR markers.
//!
//! The host application owns the tracking engine and the frame loop; this
//! crate owns the arithmetic in between. Each frame the host feeds in the
//! tracked state of two markers (the *content* marker carrying the virtual
//! object and a second *reference* marker) and the [`DistanceScaler`] maps
//! the distance between them to a per-axis scale delta, applies it to the
//! content object's transform under a precomputed growth bound, and
//! re-seats the object above the marker surface.
//!
//! Two ways in:
//! - call [`DistanceScaler::update`] directly with per-frame
//!   [`MarkerObservation`] snapshots, or
//! - implement [`MarkerTracker`] for your engine's marker handles and let a
//!   [`ScalePipeline`] (built via [`PipelineBuilder`]) do the snapshotting.

pub mod integration;
pub mod scaler;

pub use integration::{MarkerTracker, PipelineBuilder, ScalePipeline};
pub use scaler::{
    ConfigError, DistanceScaler, FrameOutcome, MarkerObservation, ScalerConfig, ScalerState,
    Transform, marker_distance, scale_multiplier,
};
