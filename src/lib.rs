//! Control open and close times for ACP-sanctioned brevets,
//! see <https://rusa.org/octime_alg.html>.

pub mod acp_times;
pub mod brevet_distance;
pub mod brevet_time;
pub mod control_sheet;
pub mod error;

pub use acp_times::{close_time, convert_to_time, open_time, ElapsedTime};
pub use brevet_distance::BrevetDistance;
pub use brevet_time::BrevetTime;
pub use control_sheet::{ControlSheet, ControlTimes};
pub use error::{AcpError, UnknownBrevetDistance};
