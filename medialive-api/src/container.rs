mod dvb;
mod m2ts;
mod m3u8;

#[cfg(test)]
mod m2ts_tests;

pub use dvb::*;
pub use m2ts::*;
pub use m3u8::*;
