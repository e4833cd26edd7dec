mod cdn;
mod group;
mod hls;
mod ms_smooth;
mod udp;

#[cfg(test)]
mod hls_tests;

pub use cdn::*;
pub use group::*;
pub use hls::*;
pub use ms_smooth::*;
pub use udp::*;
