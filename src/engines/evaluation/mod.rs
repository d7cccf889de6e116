pub mod distance;
pub mod classifier;
pub mod evaluator;
pub mod random;

pub use distance::{Euclidean, SubsetDistance};
pub use classifier::{Classifier, NearestNeighbor};
pub use evaluator::{Evaluation, LeaveOneOutEvaluator, SubsetEvaluator};
pub use random::RandomEvaluator;
