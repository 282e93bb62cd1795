pub mod pipeline;
pub mod simplifier;
pub mod merger;

pub use pipeline::{BacklogPipeline, PipelineReport};
pub use simplifier::Simplifier;
pub use merger::{merge, BacklogIndex, MergeStats};
