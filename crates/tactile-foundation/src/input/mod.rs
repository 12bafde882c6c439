pub mod dispatcher;
pub mod handler;
pub mod long_press;
pub mod recognizer;
pub mod types;

pub use dispatcher::{feedback_for, GestureCallbacks, GestureDispatcher};
pub use handler::{HandlerState, TouchHandler};
pub use long_press::LongPressTimer;
pub use types::{
    GestureEvent, GestureKind, PinchGesture, SwipeDirection, SwipeGesture, TouchPoint,
};

pub mod prelude {
    pub use super::handler::{HandlerState, TouchHandler};
    pub use super::types::{
        GestureEvent, GestureKind, PinchGesture, SwipeDirection, SwipeGesture, TouchPoint,
    };
}
