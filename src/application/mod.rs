pub mod advisor;
pub mod batch;
pub mod bootstrap;

pub use advisor::{BusinessAdvisor, Recommendation};
pub use batch::{BatchAssessor, BatchSummary};
