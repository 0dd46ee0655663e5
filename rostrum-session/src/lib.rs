mod annotation;
mod capture;
mod error;
mod room;
mod scene;
mod session;

pub use annotation::*;
pub use capture::*;
pub use error::*;
pub use room::*;
pub use scene::*;
pub use session::*;
