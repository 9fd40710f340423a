//! Device attribute values as produced by the external extractor.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::collections::FxHashMap;

/// A single extracted attribute value.
///
/// Four shapes cover everything the extractor emits: free text, a numeric
/// quantity with an optional unit, an unordered set of tokens (features,
/// standards), and a structured sub-record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AttributeValue {
    Text(String),
    Quantity { value: f64, unit: Option<String> },
    Set(Vec<String>),
    Record(FxHashMap<String, AttributeValue>),
}

impl AttributeValue {
    /// Free-text form used by the textual and claim comparators.
    ///
    /// Records flatten to `key: value` pairs in sorted key order so the
    /// result is deterministic regardless of hash iteration order.
    pub fn text_content(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Quantity { value, unit } => match unit {
                Some(u) => format!("{value} {u}"),
                None => value.to_string(),
            },
            Self::Set(items) => items.join("; "),
            Self::Record(fields) => {
                let mut keys: Vec<&String> = fields.keys().collect();
                keys.sort();
                keys.iter()
                    .map(|k| format!("{}: {}", k, fields[*k].text_content()))
                    .collect::<Vec<_>>()
                    .join("; ")
            }
        }
    }

    /// The set items, when this value is a set.
    pub fn as_set(&self) -> Option<&[String]> {
        match self {
            Self::Set(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text_content())
    }
}

/// All extracted attributes for one device, keyed by dimension name.
///
/// Built once by the extractor, read-only inside the engine. One instance
/// for the subject device and one per reference device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceAttributeSet {
    pub device_id: String,
    pub attributes: FxHashMap<String, AttributeValue>,
}

impl DeviceAttributeSet {
    pub fn new(device_id: impl Into<String>) -> Self {
        Self {
            device_id: device_id.into(),
            attributes: FxHashMap::default(),
        }
    }

    /// Builder-style attribute insertion, used heavily in tests.
    pub fn with_attribute(mut self, dimension: impl Into<String>, value: AttributeValue) -> Self {
        self.attributes.insert(dimension.into(), value);
        self
    }

    /// Shorthand for inserting a text attribute.
    pub fn with_text(self, dimension: impl Into<String>, text: impl Into<String>) -> Self {
        self.with_attribute(dimension, AttributeValue::Text(text.into()))
    }

    pub fn get(&self, dimension: &str) -> Option<&AttributeValue> {
        self.attributes.get(dimension)
    }
}
