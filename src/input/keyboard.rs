//! Keyboard event types.

use bitflags::bitflags;

use crate::input::platform::KeyInfo;

bitflags! {
    /// Keyboard modifier flags.
    ///
    /// The bit layout is part of the public contract: hosts may hand over a
    /// packed integer mask and expect alt in bit 0 through shift in bit 3.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct KeyModifiers: u8 {
        /// Alt/Option key.
        const ALT = 0b0000_0001;
        /// Control key.
        const CTRL = 0b0000_0010;
        /// Meta/Command/Windows key.
        const META = 0b0000_0100;
        /// Shift key.
        const SHIFT = 0b0000_1000;
    }
}

impl KeyModifiers {
    /// No modifiers held.
    pub const NONE: Self = Self::empty();

    /// Decompose a packed modifier mask. Bits above shift are ignored.
    #[must_use]
    pub fn from_mask(mask: u32) -> Self {
        Self::from_bits_truncate((mask & u32::from(Self::all().bits())) as u8)
    }

    /// Packed modifier mask.
    #[must_use]
    pub fn mask(self) -> u32 {
        u32::from(self.bits())
    }

    /// Build modifiers from per-key flags. Unreported flags count as released.
    #[must_use]
    pub fn from_flags(
        alt: Option<bool>,
        ctrl: Option<bool>,
        meta: Option<bool>,
        shift: Option<bool>,
    ) -> Self {
        let mut modifiers = Self::NONE;
        modifiers.set(Self::ALT, alt.unwrap_or(false));
        modifiers.set(Self::CTRL, ctrl.unwrap_or(false));
        modifiers.set(Self::META, meta.unwrap_or(false));
        modifiers.set(Self::SHIFT, shift.unwrap_or(false));
        modifiers
    }
}

/// A normalized keyboard event.
///
/// With the `serde` feature the modifiers travel as four booleans,
/// `altKey`, `ctrlKey`, `metaKey` and `shiftKey`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "KeyboardEventRecord", from = "KeyboardEventRecord")
)]
pub struct KeyboardEvent {
    /// Semantic event type, e.g. `"keydown"`. Unset until the caller assigns
    /// one for events built from raw key records.
    pub event_type: Option<String>,
    /// Physical key code. Not validated.
    pub key_code: u32,
    /// Modifier keys held.
    pub modifiers: KeyModifiers,
    /// Text of the associated input control when the event fired.
    pub input_value: Option<String>,
}

/// Wire shape of [`KeyboardEvent`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct KeyboardEventRecord {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    event_type: Option<String>,
    key_code: u32,
    #[serde(default)]
    alt_key: bool,
    #[serde(default)]
    ctrl_key: bool,
    #[serde(default)]
    meta_key: bool,
    #[serde(default)]
    shift_key: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    input_value: Option<String>,
}

#[cfg(feature = "serde")]
impl From<KeyboardEvent> for KeyboardEventRecord {
    fn from(event: KeyboardEvent) -> Self {
        Self {
            alt_key: event.alt_key(),
            ctrl_key: event.ctrl_key(),
            meta_key: event.meta_key(),
            shift_key: event.shift_key(),
            event_type: event.event_type,
            key_code: event.key_code,
            input_value: event.input_value,
        }
    }
}

#[cfg(feature = "serde")]
impl From<KeyboardEventRecord> for KeyboardEvent {
    fn from(record: KeyboardEventRecord) -> Self {
        Self {
            event_type: record.event_type,
            key_code: record.key_code,
            modifiers: KeyModifiers::from_flags(
                Some(record.alt_key),
                Some(record.ctrl_key),
                Some(record.meta_key),
                Some(record.shift_key),
            ),
            input_value: record.input_value,
        }
    }
}

impl KeyboardEvent {
    /// Create a key event with no modifiers.
    #[must_use]
    pub fn new(event_type: impl Into<String>, key_code: u32) -> Self {
        Self {
            event_type: Some(event_type.into()),
            key_code,
            modifiers: KeyModifiers::NONE,
            input_value: None,
        }
    }

    /// Create a key event whose type is not known yet.
    #[must_use]
    pub fn untyped(key_code: u32) -> Self {
        Self {
            event_type: None,
            key_code,
            modifiers: KeyModifiers::NONE,
            input_value: None,
        }
    }

    /// Create a key event from a packed modifier mask.
    #[must_use]
    pub fn from_mask(event_type: impl Into<String>, key_code: u32, mask: u32) -> Self {
        Self::new(event_type, key_code).with_modifiers(KeyModifiers::from_mask(mask))
    }

    /// Normalize a platform key record.
    ///
    /// The result has no type: a raw key record only says which key moved,
    /// so the caller assigns the semantic type afterwards.
    #[must_use]
    pub fn from_key_info<K: KeyInfo + ?Sized>(key_info: &K, input_value: Option<String>) -> Self {
        let modifiers = KeyModifiers::from_flags(
            key_info.alt_key(),
            key_info.ctrl_key(),
            key_info.meta_key(),
            key_info.shift_key(),
        );
        Self {
            event_type: None,
            key_code: key_info.key_code(),
            modifiers,
            input_value,
        }
    }

    /// Set modifier keys.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Set the associated input control value.
    #[must_use]
    pub fn with_input_value(mut self, value: impl Into<String>) -> Self {
        self.input_value = Some(value.into());
        self
    }

    /// Set the event type.
    #[must_use]
    pub fn with_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = Some(event_type.into());
        self
    }

    /// Copy this event, replacing the type when `event_type` is given.
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

    /// Check if Alt is held.
    #[must_use]
    pub fn alt_key(&self) -> bool {
        self.modifiers.contains(KeyModifiers::ALT)
    }

    /// Check if Ctrl is held.
    #[must_use]
    pub fn ctrl_key(&self) -> bool {
        self.modifiers.contains(KeyModifiers::CTRL)
    }

    /// Check if Meta is held.
    #[must_use]
    pub fn meta_key(&self) -> bool {
        self.modifiers.contains(KeyModifiers::META)
    }

    /// Check if Shift is held.
    #[must_use]
    pub fn shift_key(&self) -> bool {
        self.modifiers.contains(KeyModifiers::SHIFT)
    }

    /// Check if this matches a specific key with exactly these modifiers.
    #[must_use]
    pub fn matches(&self, key_code: u32, modifiers: KeyModifiers) -> bool {
        self.key_code == key_code && self.modifiers == modifiers
    }
}
