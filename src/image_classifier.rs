pub mod engine;
pub mod error;
#[cfg(test)]
pub mod impl_fake;
pub mod interface;
pub mod interpreter;
pub mod labels;
pub mod marshal;
pub mod model;
pub mod ranker;
