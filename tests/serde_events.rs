//! Serialization tests for event value objects.
//!
//! Run with `cargo test --features serde`.

#![cfg(feature = "serde")]

use serde_json::{Value, json};
use stage_events::input::{RawKeyEvent, RawMouseEvent, RawTouch, RawTouchEvent};
use stage_events::{InputEvent, KeyModifiers, KeyboardEvent, PointerEvent, StageOrigin};

#[test]
fn test_pointer_uses_camel_case_and_omits_unset() {
    let origin = StageOrigin::new(50.0, 20.0);
    let event = PointerEvent::from_client_offset(None, &(150.0, 80.0), origin);
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(
        value,
        json!({
            "stageX": 100.0,
            "stageY": 60.0,
            "clientX": 150.0,
            "clientY": 80.0,
        })
    );
}

#[test]
fn test_pointer_touch_fields_serialized() {
    let parent = RawTouchEvent::new(vec![RawTouch::new(4, 1.0, 2.0)]);
    let event = PointerEvent::from_touch(&parent.touches[0], &parent, StageOrigin::ZERO)
        .unwrap()
        .clone_with_type(Some("pointerdown"))
        .with_buttons(true, false, false);
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["type"], json!("pointerdown"));
    assert_eq!(value["touchId"], json!(4));
    assert_eq!(value["touchIndex"], json!(0));
    assert_eq!(value["isLeft"], json!(true));
    assert_eq!(value["isRight"], json!(false));
    assert!(value.get("deltaX").is_none());
}

#[test]
fn test_pointer_round_trip_preserves_unset() {
    let event = PointerEvent::new(Some("pointermove"), 1.0, 2.0, 3.0, 4.0).with_delta(0.5, 0.25);
    let text = serde_json::to_string(&event).unwrap();
    let back: PointerEvent = serde_json::from_str(&text).unwrap();
    assert_eq!(back, event);
    assert_eq!(back.diff_x, None);
    assert_eq!(back.touch_index, None);
}

#[test]
fn test_pointer_accepts_x_y_aliases() {
    let back: PointerEvent =
        serde_json::from_value(json!({ "x": 7.0, "y": 9.0, "clientX": 17.0, "clientY": 19.0 }))
            .unwrap();
    assert_eq!(back.stage_x(), 7.0);
    assert_eq!(back.stage_y(), 9.0);
    assert_eq!(back.event_type(), None);
}

#[test]
fn test_keyboard_modifiers_serialize_as_flags() {
    let event = KeyboardEvent::new("keydown", 13)
        .with_modifiers(KeyModifiers::ALT | KeyModifiers::SHIFT)
        .with_input_value("hello");
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(
        value,
        json!({
            "type": "keydown",
            "keyCode": 13,
            "altKey": true,
            "ctrlKey": false,
            "metaKey": false,
            "shiftKey": true,
            "inputValue": "hello",
        })
    );
    assert!(value.get("modifiers").is_none());
}

#[test]
fn test_keyboard_round_trip() {
    let event = KeyboardEvent::new("keydown", 13)
        .with_modifiers(KeyModifiers::ALT | KeyModifiers::SHIFT)
        .with_input_value("hello");
    let text = serde_json::to_string(&event).unwrap();
    let back: KeyboardEvent = serde_json::from_str(&text).unwrap();
    assert_eq!(back, event);
    assert!(back.alt_key() && back.shift_key());
    assert!(!back.ctrl_key() && !back.meta_key());
}

#[test]
fn test_keyboard_reads_flag_fields() {
    let back: KeyboardEvent = serde_json::from_value(json!({
        "type": "keydown",
        "keyCode": 13,
        "altKey": true,
        "shiftKey": true,
    }))
    .unwrap();
    assert_eq!(back.event_type(), Some("keydown"));
    assert_eq!(back.key_code, 13);
    assert_eq!(back.modifiers, KeyModifiers::ALT | KeyModifiers::SHIFT);
    assert_eq!(back.input_value, None);
}

#[test]
fn test_keyboard_every_mask_round_trips() {
    for mask in 0..=15u32 {
        let event = KeyboardEvent::from_mask("keyup", 1, mask);
        let back: KeyboardEvent =
            serde_json::from_value(serde_json::to_value(&event).unwrap()).unwrap();
        assert_eq!(back.modifiers.mask(), mask, "mask {mask}");
    }
}

#[test]
fn test_tagged_keyboard_keeps_flags() {
    let key = KeyboardEvent::new("keydown", 17).with_modifiers(KeyModifiers::CTRL);
    let event = InputEvent::from(key);
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["family"], json!("keyboard"));
    assert_eq!(value["ctrlKey"], json!(true));

    let back: InputEvent = serde_json::from_value(value).unwrap();
    assert_eq!(back, event);
}

#[test]
fn test_untyped_keyboard_omits_type() {
    let value = serde_json::to_value(KeyboardEvent::untyped(9)).unwrap();
    assert!(value.get("type").is_none());
    assert!(value.get("inputValue").is_none());
}

#[test]
fn test_input_event_is_tagged_by_family() {
    let event = InputEvent::from(PointerEvent::new(Some("pointerup"), 0.0, 0.0, 0.0, 0.0));
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["family"], json!("pointer"));
    assert_eq!(value["type"], json!("pointerup"));
}

#[test]
fn test_recorded_raw_input_replays() {
    let mouse: RawMouseEvent =
        serde_json::from_value(json!({ "type": "mouseup", "clientX": 12.0, "clientY": 14.0 }))
            .unwrap();
    let event = PointerEvent::from_mouse_event(&mouse, StageOrigin::new(2.0, 4.0));
    assert_eq!(event.event_type(), Some("pointerup"));
    assert_eq!((event.x(), event.y()), (10.0, 10.0));

    let key: RawKeyEvent =
        serde_json::from_value(json!({ "type": "keydown", "keyCode": 17, "ctrlKey": true }))
            .unwrap();
    assert_eq!(key.ctrl_key, Some(true));
    assert_eq!(key.alt_key, None);
    let event = KeyboardEvent::from_key_info(&key, None);
    assert_eq!(event.modifiers, KeyModifiers::CTRL);

    let value: Value = serde_json::to_value(&key).unwrap();
    assert_eq!(value["keyCode"], json!(17));
}
