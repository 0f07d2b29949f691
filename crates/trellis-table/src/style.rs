//! Presentation state shared by every table element.

use crate::error::{TableError, TableResult};
use indexmap::IndexMap;
use trellis_core::{Color, Insets};

/// Well-known property naming an element's role, e.g. `"legend-item"`.
pub const CLASS: &str = "class";

/// A value stored in an element's property map.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Flag(bool),
    Number(f64),
    Text(String),
    Color(Color),
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Flag(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

impl From<Color> for PropertyValue {
    fn from(value: Color) -> Self {
        PropertyValue::Color(value)
    }
}

/// Named properties attached to an element.
pub type PropertyMap = IndexMap<String, PropertyValue>;

/// Layout hints passed to `preferred_size` and `layout_elements`.
///
/// The built-in elements ignore them.
pub type Constraints = PropertyMap;

/// Background, insets and free-form properties of an element.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementStyle {
    background: Option<Color>,
    insets: Insets,
    properties: PropertyMap,
}

impl ElementStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`set_background`](Self::set_background).
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Builder form of [`set_insets`](Self::set_insets).
    pub fn with_insets(mut self, insets: Insets) -> TableResult<Self> {
        self.set_insets(insets)?;
        Ok(self)
    }

    pub fn background(&self) -> Option<Color> {
        self.background
    }

    /// `None` draws no background.
    pub fn set_background(&mut self, color: Option<Color>) {
        self.background = color;
    }

    pub fn insets(&self) -> Insets {
        self.insets
    }

    /// Insets must be finite and non-negative on every side.
    pub fn set_insets(&mut self, insets: Insets) -> TableResult<()> {
        if !insets.is_valid() {
            return Err(TableError::invalid(
                "insets",
                format!("insets must be finite and non-negative, got {:?}", insets),
            ));
        }
        self.insets = insets;
        Ok(())
    }

    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    /// Set a property, returning the previous value.
    pub fn set_property(
        &mut self,
        name: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Option<PropertyValue> {
        self.properties.insert(name.into(), value.into())
    }

    pub fn remove_property(&mut self, name: &str) -> Option<PropertyValue> {
        self.properties.shift_remove(name)
    }

    /// The [`CLASS`] property, if it is text.
    pub fn class(&self) -> Option<&str> {
        match self.properties.get(CLASS) {
            Some(PropertyValue::Text(class)) => Some(class),
            _ => None,
        }
    }

    pub fn set_class(&mut self, class: impl Into<String>) {
        self.set_property(CLASS, class.into());
    }
}
