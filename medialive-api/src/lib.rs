#[macro_use]
mod macros;

mod common;
pub use common::*;

mod audio;
pub use audio::*;

mod video;
pub use video::*;

mod caption;
pub use caption::*;

mod container;
pub use container::*;

mod output_group;
pub use output_group::*;

mod scte35;
pub use scte35::*;

mod schedule;
pub use schedule::*;

mod multiplex;
pub use multiplex::*;

mod input;
pub use input::*;

mod input_device;
pub use input_device::*;

mod channel;
pub use channel::*;

mod tags;
pub use tags::*;
