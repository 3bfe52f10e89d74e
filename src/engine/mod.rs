mod pipeline;

pub use pipeline::{PipelineOutcome, SalesPipeline};
