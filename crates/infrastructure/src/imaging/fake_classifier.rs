use async_trait::async_trait;
use domain::{CameraImage, DomainError, ImageClassifier};
use std::collections::VecDeque;
use tokio::sync::Mutex;

/// Stand-in for the external image-analysis service.
///
/// Reports scripted confidence scores (percent) in order and falls back to
/// a fixed default once the script runs out. An image is a cat when its
/// score reaches the threshold passed by the caller.
#[derive(Debug)]
pub struct FakeImageClassifier {
    default_score: f32,
    scripted_scores: Mutex<VecDeque<f32>>,
    thresholds_seen: Mutex<Vec<f32>>,
}

impl FakeImageClassifier {
    pub fn new(default_score: f32) -> Self {
        Self {
            default_score,
            scripted_scores: Mutex::new(VecDeque::new()),
            thresholds_seen: Mutex::new(Vec::new()),
        }
    }

    pub fn with_scores(default_score: f32, scores: impl IntoIterator<Item = f32>) -> Self {
        let mut classifier = Self::new(default_score);
        classifier.scripted_scores = Mutex::new(scores.into_iter().collect());
        classifier
    }

    /// Queue the score reported for the next image
    pub async fn push_score(&self, score: f32) {
        self.scripted_scores.lock().await.push_back(score);
    }

    /// Every threshold the classifier has been asked to apply, oldest first
    pub async fn thresholds_seen(&self) -> Vec<f32> {
        self.thresholds_seen.lock().await.clone()
    }
}

#[async_trait]
impl ImageClassifier for FakeImageClassifier {
    async fn image_contains_cat(
        &self,
        image: &CameraImage,
        confidence_threshold: f32,
    ) -> Result<bool, DomainError> {
        if image.data().is_empty() {
            return Err(DomainError::Classifier("Image contains no data".to_string()));
        }

        self.thresholds_seen.lock().await.push(confidence_threshold);
        let score = self
            .scripted_scores
            .lock()
            .await
            .pop_front()
            .unwrap_or(self.default_score);

        tracing::debug!(
            score,
            confidence_threshold,
            dimensions = ?image.dimensions(),
            "Fake classifier scored image"
        );
        Ok(score >= confidence_threshold)
    }
}
