//! Activity layer: turns per-frame classification into one-shot,
//! user-visible activity events. Rendering and speech stay with the caller.

mod gesture;
mod star;

pub use gesture::{
    CombinedGestureDetector, GestureActivity, GestureDetector, GestureEvent, GestureProgress,
};
pub use star::StarActivity;
