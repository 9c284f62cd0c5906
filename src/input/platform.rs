//! Upstream platform input records.
//!
//! The traits here describe the fields a host must expose for each
//! normalization path. Optional platform fields are `Option` so that an absent
//! field stays distinguishable from an explicit `false`. The `Raw*` structs
//! are owned implementations for hosts without their own event types, and for
//! replaying recorded input.

/// Anything carrying viewport-relative pointer coordinates.
pub trait ClientOffset {
    /// X position relative to the viewport.
    fn client_x(&self) -> f64;
    /// Y position relative to the viewport.
    fn client_y(&self) -> f64;
}

/// A platform key event record.
pub trait KeyInfo {
    /// Physical key code.
    fn key_code(&self) -> u32;
    /// Alt/Option state, if reported.
    fn alt_key(&self) -> Option<bool>;
    /// Control state, if reported.
    fn ctrl_key(&self) -> Option<bool>;
    /// Meta/Command state, if reported.
    fn meta_key(&self) -> Option<bool>;
    /// Shift state, if reported.
    fn shift_key(&self) -> Option<bool>;
}

/// A platform mouse event record.
pub trait MouseInfo: ClientOffset {
    /// Raw platform type name, e.g. `"mousedown"`.
    fn event_type(&self) -> &str;
}

/// One contact point of a touch event.
pub trait TouchPoint: ClientOffset {
    /// Platform identifier, stable for the lifetime of the contact.
    fn identifier(&self) -> i64;
}

/// A touch event exposing its ordered set of touch points.
pub trait TouchList {
    /// Touch point type held by this event.
    type Touch: TouchPoint;

    /// Touch points attached to the event, in platform order.
    fn touches(&self) -> &[Self::Touch];
}

impl ClientOffset for (f64, f64) {
    fn client_x(&self) -> f64 {
        self.0
    }

    fn client_y(&self) -> f64 {
        self.1
    }
}

/// Owned key event record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct RawKeyEvent {
    /// Raw platform type name, e.g. `"keydown"`.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub event_type: String,
    pub key_code: u32,
    pub alt_key: Option<bool>,
    pub ctrl_key: Option<bool>,
    pub meta_key: Option<bool>,
    pub shift_key: Option<bool>,
}

impl RawKeyEvent {
    /// Create a key record with no modifier state reported.
    #[must_use]
    pub fn new(event_type: impl Into<String>, key_code: u32) -> Self {
        Self {
            event_type: event_type.into(),
            key_code,
            ..Self::default()
        }
    }

    /// Report modifier state for all four modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, alt: bool, ctrl: bool, meta: bool, shift: bool) -> Self {
        self.alt_key = Some(alt);
        self.ctrl_key = Some(ctrl);
        self.meta_key = Some(meta);
        self.shift_key = Some(shift);
        self
    }
}

impl KeyInfo for RawKeyEvent {
    fn key_code(&self) -> u32 {
        self.key_code
    }

    fn alt_key(&self) -> Option<bool> {
        self.alt_key
    }

    fn ctrl_key(&self) -> Option<bool> {
        self.ctrl_key
    }

    fn meta_key(&self) -> Option<bool> {
        self.meta_key
    }

    fn shift_key(&self) -> Option<bool> {
        self.shift_key
    }
}

/// Owned mouse event record.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct RawMouseEvent {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub event_type: String,
    pub client_x: f64,
    pub client_y: f64,
}

impl RawMouseEvent {
    /// Create a mouse record.
    #[must_use]
    pub fn new(event_type: impl Into<String>, client_x: f64, client_y: f64) -> Self {
        Self {
            event_type: event_type.into(),
            client_x,
            client_y,
        }
    }
}

impl ClientOffset for RawMouseEvent {
    fn client_x(&self) -> f64 {
        self.client_x
    }

    fn client_y(&self) -> f64 {
        self.client_y
    }
}

impl MouseInfo for RawMouseEvent {
    fn event_type(&self) -> &str {
        &self.event_type
    }
}

/// Owned touch point record.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct RawTouch {
    pub identifier: i64,
    pub client_x: f64,
    pub client_y: f64,
}

impl RawTouch {
    /// Create a touch point record.
    #[must_use]
    pub fn new(identifier: i64, client_x: f64, client_y: f64) -> Self {
        Self {
            identifier,
            client_x,
            client_y,
        }
    }
}

impl ClientOffset for RawTouch {
    fn client_x(&self) -> f64 {
        self.client_x
    }

    fn client_y(&self) -> f64 {
        self.client_y
    }
}

impl TouchPoint for RawTouch {
    fn identifier(&self) -> i64 {
        self.identifier
    }
}

/// Owned touch event record.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawTouchEvent {
    pub touches: Vec<RawTouch>,
}

impl RawTouchEvent {
    /// Create a touch event record from its touch points.
    #[must_use]
    pub fn new(touches: Vec<RawTouch>) -> Self {
        Self { touches }
    }
}

impl TouchList for RawTouchEvent {
    type Touch = RawTouch;

    fn touches(&self) -> &[RawTouch] {
        &self.touches
    }
}
