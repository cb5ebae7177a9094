pub mod classifier_trait;
pub mod nearest_neighbor;

pub use classifier_trait::Classifier;
pub use nearest_neighbor::NearestNeighborClassifier;
