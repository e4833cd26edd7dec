mod encoder;
mod operations;
mod resource;

#[cfg(test)]
mod encoder_tests;

pub use encoder::*;
pub use operations::*;
pub use resource::*;
