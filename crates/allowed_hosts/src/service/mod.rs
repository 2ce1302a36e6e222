pub mod rewriter;
pub mod validation;

pub use rewriter::{Outcome, rewrite};
