//! Anomaly Scorer Core
//!
//! Scorer implementations and the scoring pipeline that wraps them.

mod difference;
mod factory;
mod norm;
mod pipeline;
mod window;

pub use difference::*;
pub use factory::*;
pub use norm::*;
pub use pipeline::*;
pub use window::*;
