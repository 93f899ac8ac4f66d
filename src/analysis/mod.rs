//! Fashion analysis: request extraction, prompt assembly and the single
//! completion call that produces recommendations.

mod prompt;
mod service;
mod types;

pub use prompt::{FASHION_CONTEXT, build_prompt};
pub use service::{FashionAnalyzer, MAX_COMPLETION_TOKENS, SAMPLING_TEMPERATURE};
pub use types::*;
