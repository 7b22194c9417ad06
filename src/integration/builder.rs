//! Builder for assembling a validated ScalePipeline.

use crate::scaler::{ConfigError, DistanceScaler, ScalerConfig, Transform};

use super::{MarkerTracker, ScalePipeline};

/// Builder for a [`ScalePipeline`].
///
/// All three object references are required; `build` rejects an incomplete
/// assembly with the specific [`ConfigError`] for the missing piece instead
/// of deferring the failure to the first frame.
pub struct PipelineBuilder<C: MarkerTracker, R: MarkerTracker> {
    content: Option<C>,
    reference: Option<R>,
    transform: Option<Transform>,
    config: ScalerConfig,
}

impl<C: MarkerTracker, R: MarkerTracker> PipelineBuilder<C, R> {
    /// Create an empty builder with the default configuration.
    pub fn new() -> Self {
        Self {
            content: None,
            reference: None,
            transform: None,
            config: ScalerConfig::default(),
        }
    }

    /// Set the tracker handle for the content marker.
    pub fn content_tracker(mut self, tracker: C) -> Self {
        self.content = Some(tracker);
        self
    }

    /// Set the tracker handle for the reference marker.
    pub fn reference_tracker(mut self, tracker: R) -> Self {
        self.reference = Some(tracker);
        self
    }

    /// Set the content object's current transform. Its scale becomes the
    /// scaler's original scale.
    pub fn transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Override the scaler configuration.
    pub fn config(mut self, config: ScalerConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate the assembly and build the pipeline.
    pub fn build(self) -> Result<ScalePipeline<C, R>, ConfigError> {
        let content = self.content.ok_or(ConfigError::MissingContentTracker)?;
        let reference = self.reference.ok_or(ConfigError::MissingReferenceTracker)?;
        let transform = self.transform.ok_or(ConfigError::MissingTransform)?;
        let scaler = DistanceScaler::new(transform, self.config)?;
        Ok(ScalePipeline::new(content, reference, scaler))
    }
}

impl<C: MarkerTracker, R: MarkerTracker> Default for PipelineBuilder<C, R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaler::MarkerObservation;
    use nalgebra::Point3;

    #[test]
    fn test_builder_complete() {
        let pipeline = PipelineBuilder::new()
            .content_tracker(MarkerObservation::tracked(Point3::origin()))
            .reference_tracker(MarkerObservation::tracked(Point3::new(1.0, 0.0, 0.0)))
            .transform(Transform::identity())
            .build();

        assert!(pipeline.is_ok());
    }

    #[test]
    fn test_builder_missing_content() {
        let err = PipelineBuilder::<MarkerObservation, MarkerObservation>::new()
            .reference_tracker(MarkerObservation::untracked())
            .transform(Transform::identity())
            .build()
            .unwrap_err();

        assert_eq!(err, ConfigError::MissingContentTracker);
    }

    #[test]
    fn test_builder_missing_reference() {
        let err = PipelineBuilder::<MarkerObservation, MarkerObservation>::new()
            .content_tracker(MarkerObservation::untracked())
            .transform(Transform::identity())
            .build()
            .unwrap_err();

        assert_eq!(err, ConfigError::MissingReferenceTracker);
    }

    #[test]
    fn test_builder_missing_transform() {
        let err = PipelineBuilder::new()
            .content_tracker(MarkerObservation::untracked())
            .reference_tracker(MarkerObservation::untracked())
            .build()
            .unwrap_err();

        assert_eq!(err, ConfigError::MissingTransform);
    }

    #[test]
    fn test_builder_invalid_config() {
        let err = PipelineBuilder::new()
            .content_tracker(MarkerObservation::untracked())
            .reference_tracker(MarkerObservation::untracked())
            .transform(Transform::identity())
            .config(ScalerConfig {
                min_scale: 0.0,
                log_distance: false,
            })
            .build()
            .unwrap_err();

        assert_eq!(err, ConfigError::InvalidMinScale(0.0));
    }
}
