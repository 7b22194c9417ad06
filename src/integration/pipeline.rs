//! ScalePipeline for combining marker tracking with the scaler.

use crate::scaler::{ConfigError, DistanceScaler, FrameOutcome, ScalerConfig, Transform};

use super::MarkerTracker;

/// A combined unit that bundles two marker trackers with a
/// [`DistanceScaler`].
///
/// This struct provides a convenient way to run the end-to-end per-frame
/// step: snapshot both markers from the host engine, then feed them through
/// the scaler.
#[derive(Debug)]
pub struct ScalePipeline<C: MarkerTracker, R: MarkerTracker> {
    content: C,
    reference: R,
    scaler: DistanceScaler,
}

impl<C: MarkerTracker, R: MarkerTracker> ScalePipeline<C, R> {
    /// Create a pipeline from two tracker handles and a prepared scaler.
    pub fn new(content: C, reference: R, scaler: DistanceScaler) -> Self {
        Self {
            content,
            reference,
            scaler,
        }
    }

    /// Create a pipeline with the default scaler configuration for the
    /// content object currently described by `transform`.
    pub fn with_default_config(
        content: C,
        reference: R,
        transform: Transform,
    ) -> Result<Self, ConfigError> {
        let scaler = DistanceScaler::new(transform, ScalerConfig::default())?;
        Ok(Self::new(content, reference, scaler))
    }

    /// Run one frame: snapshot both markers and update the scaler.
    pub fn process_frame(&mut self) -> FrameOutcome {
        let content = self.content.observation();
        let reference = self.reference.observation();
        self.scaler.update(&content, &reference)
    }

    /// Get a reference to the content object's transform.
    pub fn transform(&self) -> &Transform {
        self.scaler.transform()
    }

    /// Get a reference to the content marker tracker.
    pub fn content_tracker(&self) -> &C {
        &self.content
    }

    /// Get a mutable reference to the content marker tracker.
    pub fn content_tracker_mut(&mut self) -> &mut C {
        &mut self.content
    }

    /// Get a reference to the reference marker tracker.
    pub fn reference_tracker(&self) -> &R {
        &self.reference
    }

    /// Get a mutable reference to the reference marker tracker.
    pub fn reference_tracker_mut(&mut self) -> &mut R {
        &mut self.reference
    }

    /// Get a reference to the underlying scaler.
    pub fn scaler(&self) -> &DistanceScaler {
        &self.scaler
    }

    /// Get a mutable reference to the underlying scaler.
    pub fn scaler_mut(&mut self) -> &mut DistanceScaler {
        &mut self.scaler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaler::MarkerObservation;
    use nalgebra::Point3;

    struct MockTracker {
        tracked: bool,
        position: Point3<f32>,
    }

    impl MarkerTracker for MockTracker {
        fn is_tracked(&self) -> bool {
            self.tracked
        }

        fn position(&self) -> Point3<f32> {
            self.position
        }
    }

    #[test]
    fn test_pipeline_tracked_frame() {
        let content = MockTracker {
            tracked: true,
            position: Point3::origin(),
        };
        let reference = MockTracker {
            tracked: true,
            position: Point3::new(0.0, 0.0, 2.2),
        };

        let mut pipeline =
            ScalePipeline::with_default_config(content, reference, Transform::identity()).unwrap();
        let outcome = pipeline.process_frame();

        match outcome {
            FrameOutcome::Tracked {
                multiplier,
                scale_applied,
                ..
            } => {
                assert_eq!(multiplier, -0.005);
                assert!(scale_applied);
            }
            FrameOutcome::Idle => panic!("expected a tracked frame"),
        }
        assert!((pipeline.transform().local_scale.x - 0.995).abs() < 1e-6);
    }

    #[test]
    fn test_pipeline_idle_frame() {
        let content = MockTracker {
            tracked: true,
            position: Point3::origin(),
        };
        let reference = MockTracker {
            tracked: false,
            position: Point3::origin(),
        };

        let mut pipeline =
            ScalePipeline::with_default_config(content, reference, Transform::identity()).unwrap();

        assert_eq!(pipeline.process_frame(), FrameOutcome::Idle);
        assert_eq!(*pipeline.transform(), Transform::identity());
    }

    #[test]
    fn test_pipeline_tracker_toggle() {
        // Observations implement MarkerTracker, so plain snapshots can
        // drive the pipeline and be swapped between frames.
        let mut pipeline = ScalePipeline::with_default_config(
            MarkerObservation::tracked(Point3::origin()),
            MarkerObservation::untracked(),
            Transform::identity(),
        )
        .unwrap();

        assert_eq!(pipeline.process_frame(), FrameOutcome::Idle);

        *pipeline.reference_tracker_mut() =
            MarkerObservation::tracked(Point3::new(3.0, 0.0, 0.0));
        match pipeline.process_frame() {
            FrameOutcome::Tracked { multiplier, .. } => assert_eq!(multiplier, -0.0005),
            FrameOutcome::Idle => panic!("expected a tracked frame"),
        }
    }
}
