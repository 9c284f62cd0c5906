//! Normalized input events.
//!
//! This module turns platform keyboard, mouse and touch records into
//! [`KeyboardEvent`] and [`PointerEvent`] values. Upstream records are
//! described by the traits in [`platform`], so hosts can feed their own event
//! types in directly.

mod event;
pub mod event_type;
mod keyboard;
pub mod platform;
mod pointer;

pub use event::InputEvent;
pub use keyboard::{KeyModifiers, KeyboardEvent};
pub use platform::{
    ClientOffset, KeyInfo, MouseInfo, RawKeyEvent, RawMouseEvent, RawTouch, RawTouchEvent,
    TouchList, TouchPoint,
};
pub use pointer::{PointerEvent, StageOrigin};
