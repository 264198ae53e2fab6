//! Tuning Panel Schema
//!
//! Declarative description of the rig's tuning panel. Each settings type
//! publishes a const table of [`FieldSpec`]s (key, label, optional group and
//! widget kind) and implements [`Tunable`] to read and write its fields by
//! key. [`Panel`] turns that into grouped, displayable descriptors: named
//! groups appear in declaration order, ungrouped fields come last.

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
use serde::Serialize;
use std::fmt;
use tracing::warn;

/// Widget used to edit a field
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Widget {
    Toggle,
    TextField,
    IntSlider { min: i64, max: i64 },
    FloatSlider { min: f64, max: f64 },
    Dropdown { choices: &'static [&'static str] },
}

impl Widget {
    /// Value kind the widget edits, for error messages.
    pub fn value_kind(&self) -> &'static str {
        match self {
            Self::Toggle => "boolean",
            Self::TextField => "text",
            Self::IntSlider { .. } => "integer",
            Self::FloatSlider { .. } => "number",
            Self::Dropdown { .. } => "choice",
        }
    }
}

impl fmt::Display for Widget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Toggle => write!(f, "toggle"),
            Self::TextField => write!(f, "text"),
            Self::IntSlider { min, max } => write!(f, "slider {}..{}", min, max),
            Self::FloatSlider { min, max } => write!(f, "slider {}..{}", min, max),
            Self::Dropdown { choices } => write!(f, "one of {}", choices.join("|")),
        }
    }
}

/// Field value as shown in (and accepted from) the panel
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{}", v),
            Self::Int(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Text(v) => write!(f, "{}", v),
        }
    }
}

/// One entry of a panel schema
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSpec {
    /// Dotted settings key, e.g. `belt.handle_count`
    pub key: &'static str,
    pub label: &'static str,
    /// Group (frame) the field is shown in; `None` puts it at the bottom
    pub group: Option<&'static str>,
    pub widget: Widget,
}

impl FieldSpec {
    pub const fn new(key: &'static str, label: &'static str, widget: Widget) -> Self {
        Self {
            key,
            label,
            group: None,
            widget,
        }
    }

    pub const fn in_group(mut self, group: &'static str) -> Self {
        self.group = Some(group);
        self
    }

    /// Check that a value has the widget's kind and lies within its range.
    pub fn check(&self, value: &FieldValue) -> ConfigResult<()> {
        let in_range = match (&self.widget, value) {
            (Widget::Toggle, FieldValue::Bool(_)) => true,
            (Widget::TextField, FieldValue::Text(_)) => true,
            (Widget::IntSlider { min, max }, FieldValue::Int(v)) => (*min..=*max).contains(v),
            (Widget::FloatSlider { min, max }, FieldValue::Float(v)) => {
                v.is_finite() && (*min..=*max).contains(v)
            }
            (Widget::Dropdown { choices }, FieldValue::Text(v)) => {
                choices.iter().any(|choice| *choice == v.as_str())
            }
            _ => {
                return Err(ConfigError::TypeMismatch {
                    key: self.key.to_string(),
                    expected: self.widget.value_kind().to_string(),
                })
            }
        };

        if in_range {
            Ok(())
        } else {
            Err(ConfigError::ValueOutOfRange {
                key: self.key.to_string(),
                value: value.to_string(),
            })
        }
    }

    /// Parse text input for this field and check it.
    pub fn parse(&self, raw: &str) -> SettingsResult<FieldValue> {
        let raw = raw.trim();
        let value = match self.widget {
            Widget::Toggle => match raw.to_ascii_lowercase().as_str() {
                "true" | "on" | "yes" | "1" => FieldValue::Bool(true),
                "false" | "off" | "no" | "0" => FieldValue::Bool(false),
                _ => return Err(SettingsError::invalid(self.key, "expected true or false")),
            },
            Widget::IntSlider { .. } => FieldValue::Int(
                raw.parse()
                    .map_err(|_| SettingsError::invalid(self.key, "expected an integer"))?,
            ),
            Widget::FloatSlider { .. } => FieldValue::Float(
                raw.parse()
                    .map_err(|_| SettingsError::invalid(self.key, "expected a number"))?,
            ),
            Widget::TextField | Widget::Dropdown { .. } => FieldValue::Text(raw.to_string()),
        };

        self.check(&value)?;
        Ok(value)
    }
}

/// Settings that can be edited through a panel
pub trait Tunable {
    /// Fields in declaration order.
    fn schema() -> &'static [FieldSpec];

    /// Current value of a field, `None` for unknown keys.
    fn field(&self, key: &str) -> Option<FieldValue>;

    /// Set a field, validating kind and range first.
    fn set_field(&mut self, key: &str, value: FieldValue) -> SettingsResult<()>;

    fn spec(key: &str) -> Option<&'static FieldSpec> {
        Self::schema().iter().find(|spec| spec.key == key)
    }

    /// Set a field from text input, as typed into a panel or passed on a command line.
    fn set_from_str(&mut self, key: &str, raw: &str) -> SettingsResult<()> {
        let spec = Self::spec(key).ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        let value = spec.parse(raw)?;
        self.set_field(key, value)
    }
}

/// A schema entry paired with its current value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDescriptor {
    #[serde(flatten)]
    pub spec: FieldSpec,
    pub value: FieldValue,
}

/// Fields sharing a frame; `name` is `None` for the ungrouped tail
#[derive(Debug, Clone, PartialEq)]
pub struct PanelGroup<'a> {
    pub name: Option<&'static str>,
    pub fields: Vec<&'a FieldDescriptor>,
}

/// Snapshot of a tunable value's fields, ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub title: String,
    fields: Vec<FieldDescriptor>,
}

impl Panel {
    pub fn build<T: Tunable>(title: impl Into<String>, source: &T) -> Self {
        let fields = T::schema()
            .iter()
            .filter_map(|spec| match source.field(spec.key) {
                Some(value) => Some(FieldDescriptor { spec: *spec, value }),
                None => {
                    warn!("Panel field '{}' has no value; skipping", spec.key);
                    None
                }
            })
            .collect();

        Self {
            title: title.into(),
            fields,
        }
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field(&self, key: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.spec.key == key)
    }

    /// Named groups in order of first appearance, then ungrouped fields.
    pub fn groups(&self) -> Vec<PanelGroup<'_>> {
        let mut groups: Vec<PanelGroup<'_>> = Vec::new();
        let mut ungrouped = Vec::new();

        for field in &self.fields {
            match field.spec.group {
                Some(name) => match groups.iter_mut().find(|g| g.name == Some(name)) {
                    Some(group) => group.fields.push(field),
                    None => groups.push(PanelGroup {
                        name: Some(name),
                        fields: vec![field],
                    }),
                },
                None => ungrouped.push(field),
            }
        }

        if !ungrouped.is_empty() {
            groups.push(PanelGroup {
                name: None,
                fields: ungrouped,
            });
        }
        groups
    }

    /// Plain-text rendering, one line per field.
    pub fn render_text(&self) -> String {
        let mut out = format!("{}\n", self.title);
        for group in self.groups() {
            out.push_str(&format!("\n[{}]\n", group.name.unwrap_or("Other")));
            for field in group.fields {
                out.push_str(&format!(
                    "  {:<16} {:<24} = {:<12} ({})\n",
                    field.spec.label,
                    field.spec.key,
                    field.value.to_string(),
                    field.spec.widget
                ));
            }
        }
        out
    }
}
