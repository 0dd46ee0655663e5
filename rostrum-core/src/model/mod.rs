mod annotation;
mod device;
mod peer;
mod relay;
mod room;
mod stream;
mod topology;

pub use annotation::AnnotationMark;
pub use device::{DeviceDescriptor, DeviceId, DeviceKind};
pub use peer::PeerId;
pub use relay::RelayMessage;
pub use room::RoomId;
pub use stream::{MediaStream, StreamId, TrackKind};
pub use topology::{InvalidTopologyMode, TopologyMode};
