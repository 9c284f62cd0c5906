//! Event type names and the mouse type mapping table.

/// Pointer pressed.
pub const POINTER_DOWN: &str = "pointerdown";
/// Pointer released.
pub const POINTER_UP: &str = "pointerup";
/// Pointer moved.
pub const POINTER_MOVE: &str = "pointermove";
/// Mouse entered an element.
pub const MOUSE_OVER: &str = "mouseover";
/// Mouse left an element.
pub const MOUSE_OUT: &str = "mouseout";

/// Raw mouse event type names and the normalized names they map to.
pub static MOUSE_TYPE_MAP: [(&str, &str); 5] = [
    ("mouseup", POINTER_UP),
    ("mousedown", POINTER_DOWN),
    ("mousemove", POINTER_MOVE),
    ("mouseover", MOUSE_OVER),
    ("mouseout", MOUSE_OUT),
];

/// Map a raw platform mouse event type to its normalized name.
///
/// Returns `None` for anything not in [`MOUSE_TYPE_MAP`]. Matching is exact
/// and case sensitive, as platform type names are lowercase.
#[must_use]
pub fn normalize_mouse_type(raw: &str) -> Option<&'static str> {
    MOUSE_TYPE_MAP
        .iter()
        .find(|(from, _)| *from == raw)
        .map(|(_, to)| *to)
}
