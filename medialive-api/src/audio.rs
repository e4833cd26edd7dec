mod aac;
mod ac3;
mod description;
mod eac3;
mod mp2;

pub use aac::*;
pub use ac3::*;
pub use description::*;
pub use eac3::*;
pub use mp2::*;
