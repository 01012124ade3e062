//! Style attributes of the selected shape as shown in the right sidebar.
//!
//! Every field is a display string: sizes are scaled and rounded to an
//! integer, absent style properties are empty.

#[cfg(test)]
#[path = "attrs_test.rs"]
mod attrs_test;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_FILL;
use crate::doc::CanvasObject;

/// Attributes of the edited shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementAttributes {
    pub width: String,
    pub height: String,
    pub font_size: String,
    pub font_family: String,
    pub font_weight: String,
    pub fill: String,
    pub stroke: String,
}

impl Default for ElementAttributes {
    fn default() -> Self {
        Self {
            width: String::new(),
            height: String::new(),
            font_size: String::new(),
            font_family: String::new(),
            font_weight: String::new(),
            fill: DEFAULT_FILL.to_owned(),
            stroke: DEFAULT_FILL.to_owned(),
        }
    }
}

impl ElementAttributes {
    /// Attributes published when `obj` becomes the single selection.
    #[must_use]
    pub fn from_object(obj: &CanvasObject) -> Self {
        Self {
            width: format_size(obj.scaled_width()),
            height: format_size(obj.scaled_height()),
            font_size: obj.font_size.map(format_size).unwrap_or_default(),
            font_family: obj.font_family.clone().unwrap_or_default(),
            font_weight: obj.font_weight.clone().unwrap_or_default(),
            fill: obj.fill.clone().unwrap_or_default(),
            stroke: obj.stroke.clone().unwrap_or_default(),
        }
    }

    /// Current value of `property`.
    #[must_use]
    pub fn get(&self, property: ShapeProperty) -> &str {
        match property {
            ShapeProperty::Width => &self.width,
            ShapeProperty::Height => &self.height,
            ShapeProperty::FontSize => &self.font_size,
            ShapeProperty::FontFamily => &self.font_family,
            ShapeProperty::FontWeight => &self.font_weight,
            ShapeProperty::Fill => &self.fill,
            ShapeProperty::Stroke => &self.stroke,
        }
    }

    /// Overwrite `property` with `value`.
    pub fn set(&mut self, property: ShapeProperty, value: impl Into<String>) {
        let slot = match property {
            ShapeProperty::Width => &mut self.width,
            ShapeProperty::Height => &mut self.height,
            ShapeProperty::FontSize => &mut self.font_size,
            ShapeProperty::FontFamily => &mut self.font_family,
            ShapeProperty::FontWeight => &mut self.font_weight,
            ShapeProperty::Fill => &mut self.fill,
            ShapeProperty::Stroke => &mut self.stroke,
        };
        *slot = value.into();
    }
}

/// An editable shape property, named as in the record format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeProperty {
    Width,
    Height,
    FontSize,
    FontFamily,
    FontWeight,
    Fill,
    Stroke,
}

impl ShapeProperty {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "width" => Some(Self::Width),
            "height" => Some(Self::Height),
            "fontSize" => Some(Self::FontSize),
            "fontFamily" => Some(Self::FontFamily),
            "fontWeight" => Some(Self::FontWeight),
            "fill" => Some(Self::Fill),
            "stroke" => Some(Self::Stroke),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
            Self::FontSize => "fontSize",
            Self::FontFamily => "fontFamily",
            Self::FontWeight => "fontWeight",
            Self::Fill => "fill",
            Self::Stroke => "stroke",
        }
    }
}

/// Round a size to an integer string (`"99.6"` → `"100"`).
#[must_use]
pub fn format_size(value: f64) -> String {
    format!("{value:.0}")
}
