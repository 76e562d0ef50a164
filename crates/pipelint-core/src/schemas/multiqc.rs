//! MultiQC configuration schema
//!
//! MultiQC configs are free-form, so instead of deserializing into a
//! struct this wraps the parsed document and exposes accessors for the
//! keys pipelines are expected to set. Missing keys and wrong types come
//! back as [`FieldError`] rather than panicking.

use serde_yaml::{Mapping, Value};
use thiserror::Error;

/// Structural problem with a field of the document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("'{field}' missing")]
    Missing { field: String },

    #[error("'{field}' must be {expected}")]
    WrongType {
        field: String,
        expected: &'static str,
    },
}

impl FieldError {
    fn missing(field: impl Into<String>) -> Self {
        Self::Missing {
            field: field.into(),
        }
    }

    fn wrong_type(field: impl Into<String>, expected: &'static str) -> Self {
        Self::WrongType {
            field: field.into(),
            expected,
        }
    }
}

/// Parsed `multiqc_config.yml`
#[derive(Debug, Clone)]
pub struct MultiqcConfig {
    root: Value,
}

impl MultiqcConfig {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Top-level field, `None` when absent or when the document is not a mapping
    fn field(&self, key: &str) -> Option<&Value> {
        self.root.as_mapping().and_then(|m| m.get(key))
    }

    pub fn has_field(&self, key: &str) -> bool {
        self.field(key).is_some()
    }

    /// `report_section_order`, or `None` when the key is absent
    pub fn report_section_order(&self) -> Result<Option<SectionOrder<'_>>, FieldError> {
        match self.field("report_section_order") {
            None => Ok(None),
            Some(Value::Mapping(sections)) => Ok(Some(SectionOrder { sections })),
            Some(_) => Err(FieldError::wrong_type("report_section_order", "a mapping")),
        }
    }

    pub fn report_comment(&self) -> Result<&str, FieldError> {
        match self.field("report_comment") {
            None => Err(FieldError::missing("report_comment")),
            Some(Value::String(s)) => Ok(s),
            Some(_) => Err(FieldError::wrong_type("report_comment", "a string")),
        }
    }

    /// Whether `export_plots` is set to a truthy value
    pub fn export_plots(&self) -> Result<bool, FieldError> {
        self.field("export_plots")
            .map(is_truthy)
            .ok_or_else(|| FieldError::missing("export_plots"))
    }
}

/// The `report_section_order` mapping
#[derive(Debug, Clone, Copy)]
pub struct SectionOrder<'a> {
    sections: &'a Mapping,
}

impl<'a> SectionOrder<'a> {
    pub fn entry(&self, plugin: &str) -> Option<SectionEntry<'a>> {
        self.sections.get(plugin).map(|value| SectionEntry {
            plugin: plugin.to_string(),
            value,
        })
    }

    /// Every section that declares an `order`, in document order
    pub fn orders(&self) -> Result<Vec<(&'a str, f64)>, FieldError> {
        let mut orders = Vec::new();
        for (key, value) in self.sections {
            // Only string keys can name a section
            let Some(plugin) = key.as_str() else { continue };
            let entry = SectionEntry {
                plugin: plugin.to_string(),
                value,
            };
            if let Some(order) = entry.order()? {
                orders.push((plugin, order));
            }
        }
        Ok(orders)
    }
}

/// One section inside `report_section_order`
#[derive(Debug, Clone)]
pub struct SectionEntry<'a> {
    plugin: String,
    value: &'a Value,
}

impl SectionEntry<'_> {
    /// The section's `order`.
    ///
    /// Entries that are not mappings (e.g. `plugin: remove`) have no order.
    /// Integer and float orders compare numerically.
    pub fn order(&self) -> Result<Option<f64>, FieldError> {
        let Some(order) = self.value.as_mapping().and_then(|m| m.get("order")) else {
            return Ok(None);
        };
        order
            .as_f64()
            .filter(|f| !f.is_nan())
            .map(Some)
            .ok_or_else(|| FieldError::wrong_type(format!("{}.order", self.plugin), "a number"))
    }
}

/// YAML 1.1 spellings of `false` (as resolved by PyYAML) that `serde_yaml` keeps as strings
const YAML11_FALSE: &[&str] = &[
    "no", "No", "NO", "off", "Off", "OFF", "false", "False", "FALSE",
];

/// Truthiness of a YAML scalar or collection
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty() && !YAML11_FALSE.contains(&s.as_str()),
        Value::Sequence(seq) => !seq.is_empty(),
        Value::Mapping(map) => !map.is_empty(),
        Value::Tagged(tagged) => is_truthy(&tagged.value),
    }
}
