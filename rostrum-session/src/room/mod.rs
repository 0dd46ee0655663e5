mod room_event;
mod transport;

pub use room_event::*;
pub use transport::*;
