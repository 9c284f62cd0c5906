//! Pointer event types.
//!
//! A [`PointerEvent`] is the single shape used for mouse and touch input.
//! Coordinates are kept twice over: relative to the stage (the rendering
//! surface) and relative to the viewport. The stage position is always the
//! client position minus the [`StageOrigin`] supplied at construction.

use std::ptr;

use crate::error::{Error, Result};
use crate::input::event_type::normalize_mouse_type;
use crate::input::platform::{ClientOffset, MouseInfo, TouchList, TouchPoint};
use crate::log::{LogLevel, emit_log};

/// Viewport position of the stage's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StageOrigin {
    pub x: f64,
    pub y: f64,
}

impl StageOrigin {
    /// Stage placed at the viewport origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a stage origin.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert viewport coordinates to stage coordinates.
    #[must_use]
    pub fn to_stage(self, client_x: f64, client_y: f64) -> (f64, f64) {
        (client_x - self.x, client_y - self.y)
    }
}

/// A normalized pointer event.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct PointerEvent {
    /// Semantic event type, e.g. `"pointerdown"`. Unset when the source did
    /// not determine one.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "type", default, skip_serializing_if = "Option::is_none")
    )]
    pub event_type: Option<String>,
    /// X position on the stage. Also readable as [`PointerEvent::x`].
    #[cfg_attr(feature = "serde", serde(alias = "x"))]
    pub stage_x: f64,
    /// Y position on the stage. Also readable as [`PointerEvent::y`].
    #[cfg_attr(feature = "serde", serde(alias = "y"))]
    pub stage_y: f64,
    /// X position in the viewport.
    pub client_x: f64,
    /// Y position in the viewport.
    pub client_y: f64,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub delta_x: Option<f64>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub delta_y: Option<f64>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub diff_x: Option<f64>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub diff_y: Option<f64>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub is_left: Option<bool>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub is_right: Option<bool>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub is_middle: Option<bool>,
    /// Platform identifier of the touch point. Unset for mouse input.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub touch_id: Option<i64>,
    /// Position of the touch point among the active touches. Unset for mouse
    /// input.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub touch_index: Option<usize>,
}

impl PointerEvent {
    /// Create a pointer event from explicit coordinates.
    #[must_use]
    pub fn new(
        event_type: Option<&str>,
        stage_x: f64,
        stage_y: f64,
        client_x: f64,
        client_y: f64,
    ) -> Self {
        Self {
            event_type: event_type.map(str::to_owned),
            stage_x,
            stage_y,
            client_x,
            client_y,
            ..Self::default()
        }
    }

    /// Create a pointer event from anything with client coordinates.
    ///
    /// `event_type` is used as given; no mapping is applied.
    #[must_use]
    pub fn from_client_offset<O: ClientOffset + ?Sized>(
        event_type: Option<&str>,
        offset: &O,
        origin: StageOrigin,
    ) -> Self {
        let (client_x, client_y) = (offset.client_x(), offset.client_y());
        let (stage_x, stage_y) = origin.to_stage(client_x, client_y);
        Self::new(event_type, stage_x, stage_y, client_x, client_y)
    }

    /// Normalize a platform mouse event.
    ///
    /// The type is translated through
    /// [`MOUSE_TYPE_MAP`](crate::input::event_type::MOUSE_TYPE_MAP); raw types
    /// missing from the table leave the type unset.
    #[must_use]
    pub fn from_mouse_event<M: MouseInfo + ?Sized>(mouse: &M, origin: StageOrigin) -> Self {
        let raw = mouse.event_type();
        let event_type = normalize_mouse_type(raw);
        if event_type.is_none() {
            emit_log(
                LogLevel::Debug,
                &format!("unmapped mouse event type {raw:?}, leaving type unset"),
            );
        }
        Self::from_client_offset(event_type, mouse, origin)
    }

    /// Normalize one touch point of a platform touch event.
    ///
    /// `touch` must be a reference into `parent`'s touch list; its position
    /// there becomes the touch index. A copy of a touch point, even one with
    /// the same identifier, is not a member. The type is left unset.
    pub fn from_touch<L: TouchList + ?Sized>(
        touch: &L::Touch,
        parent: &L,
        origin: StageOrigin,
    ) -> Result<Self> {
        let touches = parent.touches();
        let identifier = touch.identifier();
        let Some(index) = touches.iter().position(|t| ptr::eq(t, touch)) else {
            let count = touches.len();
            emit_log(
                LogLevel::Warn,
                &format!("touch point {identifier} not found among {count} touches"),
            );
            return Err(Error::InvalidTouchReference { identifier });
        };

        let mut event = Self::from_client_offset(None, touch, origin);
        event.touch_id = Some(identifier);
        event.touch_index = Some(index);
        Ok(event)
    }

    /// Set the per-event movement delta.
    #[must_use]
    pub fn with_delta(mut self, delta_x: f64, delta_y: f64) -> Self {
        self.delta_x = Some(delta_x);
        self.delta_y = Some(delta_y);
        self
    }

    /// Set the accumulated difference.
    #[must_use]
    pub fn with_diff(mut self, diff_x: f64, diff_y: f64) -> Self {
        self.diff_x = Some(diff_x);
        self.diff_y = Some(diff_y);
        self
    }

    /// Set which buttons are involved.
    #[must_use]
    pub fn with_buttons(mut self, left: bool, right: bool, middle: bool) -> Self {
        self.is_left = Some(left);
        self.is_right = Some(right);
        self.is_middle = Some(middle);
        self
    }

    /// Copy this event, replacing the type when `event_type` is given.
    ///
    /// Every other field, set or unset, is carried over unchanged.
    #[must_use]
    pub fn clone_with_type(&self, event_type: Option<&str>) -> Self {
        Self {
            event_type: event_type
                .map(str::to_owned)
                .or_else(|| self.event_type.clone()),
            ..self.clone()
        }
    }

    /// Event type, if assigned.
    #[must_use]
    pub fn event_type(&self) -> Option<&str> {
        self.event_type.as_deref()
    }

    /// Stage X position.
    #[must_use]
    pub fn stage_x(&self) -> f64 {
        self.stage_x
    }

    /// Stage Y position.
    #[must_use]
    pub fn stage_y(&self) -> f64 {
        self.stage_y
    }

    /// Alias for [`PointerEvent::stage_x`].
    #[must_use]
    pub fn x(&self) -> f64 {
        self.stage_x
    }

    /// Alias for [`PointerEvent::stage_y`].
    #[must_use]
    pub fn y(&self) -> f64 {
        self.stage_y
    }

    /// Check if this event came from a touch point.
    #[must_use]
    pub fn is_touch(&self) -> bool {
        self.touch_id.is_some()
    }
}
