mod destination;
mod error;
mod field_value;
mod pid;
mod tags;
mod validate;

pub use destination::*;
pub use error::*;
pub use pid::{PID_RANGE, parse_pid, parse_pid_list};
pub use tags::Tags;
pub use validate::Validate;

pub(crate) use field_value::FieldValue;
pub(crate) use pid::{check_pid, check_pid_list, check_pid_number};
pub(crate) use tags::insert_tag;
pub(crate) use validate::{check_min, check_range};
