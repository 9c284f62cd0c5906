//! Normalized input event sum type.

use crate::input::keyboard::KeyboardEvent;
use crate::input::pointer::PointerEvent;

/// A normalized input event of either family.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "family", rename_all = "lowercase")
)]
pub enum InputEvent {
    /// Keyboard event.
    Keyboard(KeyboardEvent),
    /// Mouse or touch event.
    Pointer(PointerEvent),
}

impl InputEvent {
    /// Check if this is a keyboard event.
    #[must_use]
    pub fn is_keyboard(&self) -> bool {
        matches!(self, Self::Keyboard(_))
    }

    /// Check if this is a pointer event.
    #[must_use]
    pub fn is_pointer(&self) -> bool {
        matches!(self, Self::Pointer(_))
    }

    /// Get the keyboard event if this is one.
    #[must_use]
    pub fn keyboard(&self) -> Option<&KeyboardEvent> {
        match self {
            Self::Keyboard(e) => Some(e),
            Self::Pointer(_) => None,
        }
    }

    /// Get the pointer event if this is one.
    #[must_use]
    pub fn pointer(&self) -> Option<&PointerEvent> {
        match self {
            Self::Pointer(e) => Some(e),
            Self::Keyboard(_) => None,
        }
    }

    /// Event type of the wrapped event, if assigned.
    #[must_use]
    pub fn event_type(&self) -> Option<&str> {
        match self {
            Self::Keyboard(e) => e.event_type(),
            Self::Pointer(e) => e.event_type(),
        }
    }

    /// Copy this event under a different type, keeping everything else.
    #[must_use]
    pub fn retyped(&self, event_type: &str) -> Self {
        match self {
            Self::Keyboard(e) => Self::Keyboard(e.clone_with_type(Some(event_type))),
            Self::Pointer(e) => Self::Pointer(e.clone_with_type(Some(event_type))),
        }
    }
}

impl From<KeyboardEvent> for InputEvent {
    fn from(e: KeyboardEvent) -> Self {
        Self::Keyboard(e)
    }
}

impl From<PointerEvent> for InputEvent {
    fn from(e: PointerEvent) -> Self {
        Self::Pointer(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyModifiers;

    #[test]
    fn test_event_keyboard() {
        let key = KeyboardEvent::new("keydown", 13).with_modifiers(KeyModifiers::CTRL);
        let event = InputEvent::Keyboard(key.clone());
        assert!(event.is_keyboard());
        assert!(!event.is_pointer());
        assert_eq!(event.keyboard(), Some(&key));
        assert_eq!(event.pointer(), None);
        assert_eq!(event.event_type(), Some("keydown"));
    }

    #[test]
    fn test_event_pointer() {
        let pointer = PointerEvent::new(Some("pointerdown"), 1.0, 1.0, 1.0, 1.0);
        let event: InputEvent = pointer.clone().into();
        assert!(event.is_pointer());
        assert_eq!(event.pointer(), Some(&pointer));
        assert_eq!(event.keyboard(), None);
    }

    #[test]
    fn test_retyped_keeps_payload() {
        let pointer =
            PointerEvent::new(Some("pointermove"), 4.0, 5.0, 6.0, 7.0).with_delta(1.0, 0.0);
        let drag = InputEvent::from(pointer.clone()).retyped("dragmove");
        assert_eq!(drag.event_type(), Some("dragmove"));
        let inner = drag.pointer().unwrap();
        assert_eq!(inner.x(), pointer.x());
        assert_eq!(inner.delta_x, Some(1.0));

        let key = InputEvent::from(KeyboardEvent::untyped(9)).retyped("keyup");
        assert_eq!(key.event_type(), Some("keyup"));
    }
}
