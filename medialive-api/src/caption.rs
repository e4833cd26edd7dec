mod burn_in;
mod description;

#[cfg(test)]
mod burn_in_tests;

pub use burn_in::*;
pub use description::*;
