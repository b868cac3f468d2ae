mod stop;

pub use stop::{channel as stop_channel, StopListener, StopTrigger};
