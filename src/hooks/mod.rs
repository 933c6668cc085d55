pub mod use_monitor;

pub use use_monitor::{use_monitor, UseMonitorHandle};
