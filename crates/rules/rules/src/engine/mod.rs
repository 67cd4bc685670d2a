pub mod context;
pub mod executor;
pub mod scoring;
pub mod trace;

pub use context::EvalContext;
pub use executor::{collect_alerts, evaluate, evaluate_with_trace};
