pub mod fake_classifier;

pub use fake_classifier::FakeImageClassifier;
