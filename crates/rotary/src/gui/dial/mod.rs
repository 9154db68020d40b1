pub mod model;
pub mod view;

pub use model::{DialItem, DialModel, Release};
pub use view::draw;

pub const ICON_SIZE: i32 = 64;
pub const ICON_INACTIVE_ALPHA: f64 = 0.6;

/// Pointer travel below this many pixels counts as a tap on an item rather
/// than a drag of the wheel.
pub const TAP_THRESHOLD: f64 = 4.0;

/// Delay between the snap landing and the selection notification, so the
/// final alignment is visible before the host reacts. Direct taps skip it.
pub const SNAP_NOTIFY_DELAY_MS: u64 = 300;
