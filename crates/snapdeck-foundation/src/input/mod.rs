mod clock;
mod dispatcher;
mod types;

pub use clock::InputClock;
pub use dispatcher::PointerDispatcher;
pub use types::{Orientation, PointerEvent, PointerEventKind, PointerId, PointerInputTarget};
