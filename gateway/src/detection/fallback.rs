use common::detection::{BoundingBox, DetectionResult};
use std::time::Duration;
use tokio::time::sleep;

/// Produces the fixed mock result set served when the backend cannot answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackGenerator {
    delay: Duration,
}

impl FallbackGenerator {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
        }
    }

    pub async fn generate(&self) -> Vec<DetectionResult> {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        Self::detections()
    }

    pub fn detections() -> Vec<DetectionResult> {
        vec![
            DetectionResult::new("fire extinguisher", 0.89, Some(BoundingBox::new(120.0, 80.0, 60.0, 120.0))),
            DetectionResult::new("toolbox", 0.76, Some(BoundingBox::new(300.0, 150.0, 100.0, 80.0))),
            DetectionResult::new("oxygen tank", 0.82, Some(BoundingBox::new(450.0, 100.0, 80.0, 150.0))),
        ]
    }
}
