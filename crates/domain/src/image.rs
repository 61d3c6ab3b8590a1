use crate::DomainError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single frame captured by the camera.
///
/// The controller never inspects pixels itself; frames are handed to an
/// [`ImageClassifier`] untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraImage {
    data: Vec<u8>,
    width: Option<u32>,
    height: Option<u32>,
}

impl CameraImage {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            width: None,
            height: None,
        }
    }

    pub fn with_dimensions(data: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            data,
            width: Some(width),
            height: Some(height),
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.width.zip(self.height)
    }
}

/// External image-analysis capability
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait ImageClassifier: Send + Sync {
    /// Returns true when the classifier is at least `confidence_threshold`
    /// percent sure the image shows a cat
    async fn image_contains_cat(
        &self,
        image: &CameraImage,
        confidence_threshold: f32,
    ) -> Result<bool, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_require_both_sides() {
        let image = CameraImage::new(vec![0u8; 4]);
        assert_eq!(image.dimensions(), None);
        assert_eq!(image.data(), &[0u8; 4]);

        let image = CameraImage::with_dimensions(vec![0u8; 4], 2, 2);
        assert_eq!(image.dimensions(), Some((2, 2)));
    }

    #[tokio::test]
    async fn test_mock_classifier_receives_threshold() {
        let mut classifier = MockImageClassifier::new();
        classifier
            .expect_image_contains_cat()
            .withf(|_, threshold| (*threshold - 50.0).abs() < f32::EPSILON)
            .times(1)
            .returning(|_, _| Ok(true));

        let found = classifier
            .image_contains_cat(&CameraImage::default(), 50.0)
            .await
            .unwrap();
        assert!(found);
    }
}
