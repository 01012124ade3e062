use canvas::input::Tool;

use super::*;

#[test]
fn default_element_is_select() {
    assert_eq!(DEFAULT_NAV_ELEMENT.value, "select");
    assert_eq!(Tool::from_value(DEFAULT_NAV_ELEMENT.value), Some(Tool::Select));
}

#[test]
fn every_shape_entry_maps_to_a_tool() {
    for item in SHAPE_ELEMENTS {
        assert!(Tool::from_value(item.value).is_some(), "{} has no tool", item.value);
    }
}

#[test]
fn nav_values_are_unique() {
    let mut values = Vec::new();
    for entry in NAV_ELEMENTS {
        match entry {
            NavEntry::Single(item) => values.push(item.value),
            NavEntry::Menu(items) => values.extend(items.iter().map(|i| i.value)),
        }
    }
    let total = values.len();
    values.sort_unstable();
    values.dedup();
    assert_eq!(values.len(), total);
}

#[test]
fn find_nav_item_looks_inside_menus() {
    assert_eq!(find_nav_item("circle").map(|i| i.name), Some("Circle"));
    assert_eq!(find_nav_item("reset").map(|i| i.name), Some("Reset"));
    assert!(find_nav_item("hexagon").is_none());
}

#[test]
fn font_options_include_text_defaults() {
    assert!(FONT_FAMILY_OPTIONS.iter().any(|(v, _)| *v == canvas::consts::TEXT_FONT_FAMILY));
    assert!(FONT_WEIGHT_OPTIONS.iter().any(|(v, _)| *v == canvas::consts::TEXT_FONT_WEIGHT));
    assert!(FONT_SIZE_OPTIONS.contains(&"36"));
}

#[test]
fn directions_parse() {
    for (_, value, _) in DIRECTION_OPTIONS {
        assert!(canvas::shapes::Direction::from_value(value).is_some());
    }
}
