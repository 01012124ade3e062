use super::*;

// =============================================================
// Tool
// =============================================================

#[test]
fn tool_default_is_select() {
    assert_eq!(Tool::default(), Tool::Select);
}

#[test]
fn tool_value_roundtrips_through_from_value() {
    let tools = [
        Tool::Select,
        Tool::Rectangle,
        Tool::Circle,
        Tool::Triangle,
        Tool::Line,
        Tool::Text,
        Tool::Freeform,
        Tool::Image,
    ];
    for tool in tools {
        assert_eq!(Tool::from_value(tool.value()), Some(tool));
    }
}

#[test]
fn tool_from_value_rejects_actions() {
    assert_eq!(Tool::from_value("reset"), None);
    assert_eq!(Tool::from_value("delete"), None);
    assert_eq!(Tool::from_value("comments"), None);
    assert_eq!(Tool::from_value(""), None);
}

#[test]
fn only_pointer_tools_create_shapes() {
    assert!(Tool::Rectangle.creates_shape());
    assert!(Tool::Text.creates_shape());
    assert!(!Tool::Select.creates_shape());
    assert!(!Tool::Freeform.creates_shape());
    assert!(!Tool::Image.creates_shape());
}

// =============================================================
// Modifiers / Button / Key
// =============================================================

#[test]
fn command_is_ctrl_or_meta() {
    assert!(!Modifiers::default().command());
    assert!(Modifiers { ctrl: true, ..Modifiers::default() }.command());
    assert!(Modifiers { meta: true, ..Modifiers::default() }.command());
    assert!(!Modifiers { shift: true, alt: true, ..Modifiers::default() }.command());
}

#[test]
fn button_from_dom_codes() {
    assert_eq!(Button::from_dom(0), Button::Primary);
    assert_eq!(Button::from_dom(1), Button::Middle);
    assert_eq!(Button::from_dom(2), Button::Secondary);
    assert_eq!(Button::from_dom(7), Button::Primary);
}

#[test]
fn key_is_char_ignores_case() {
    assert!(Key("c".into()).is_char('c'));
    assert!(Key("C".into()).is_char('c'));
    assert!(!Key("cc".into()).is_char('c'));
    assert!(!Key("Control".into()).is_char('c'));
    assert!(Key("Delete".into()).is("Delete"));
}

// =============================================================
// Corner
// =============================================================

#[test]
fn corner_positions_and_opposites() {
    let b = Bounds::new(10.0, 20.0, 100.0, 50.0);
    assert_eq!(Corner::Nw.position(&b), Point::new(10.0, 20.0));
    assert_eq!(Corner::Se.position(&b), Point::new(110.0, 70.0));
    for c in Corner::ALL {
        assert_eq!(c.opposite().opposite(), c);
        assert_ne!(c.opposite(), c);
    }
}

#[test]
fn input_state_default_is_idle() {
    assert!(InputState::default().is_idle());
    assert!(!InputState::Marquee { start: Point::default(), current: Point::default() }.is_idle());
}
