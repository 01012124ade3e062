//! Canvas input mapping helpers.

#[cfg(test)]
#[path = "canvas_input_test.rs"]
mod canvas_input_test;

#[cfg(feature = "hydrate")]
use canvas::geom::Point;
use canvas::input::Modifiers;

pub fn map_modifiers(shift: bool, ctrl: bool, alt: bool, meta: bool) -> Modifiers {
    Modifiers { shift, ctrl, alt, meta }
}

/// Whether a key press inside an element with this tag belongs to the
/// element rather than the board.
pub fn is_form_tag(tag_name: &str) -> bool {
    ["INPUT", "TEXTAREA", "SELECT"].iter().any(|t| t.eq_ignore_ascii_case(tag_name))
}

#[cfg(feature = "hydrate")]
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

#[cfg(feature = "hydrate")]
pub fn mouse_point(ev: &leptos::ev::MouseEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

/// Whether the event was fired at a form field.
#[cfg(feature = "hydrate")]
pub fn targets_form_field(ev: &web_sys::Event) -> bool {
    use wasm_bindgen::JsCast;

    ev.target()
        .is_some_and(|t| t.dyn_ref::<web_sys::Element>().is_some_and(|el| is_form_tag(&el.tag_name())))
}
