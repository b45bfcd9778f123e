//! Decoding of raw document bytes into [`ElementNode`] trees.
//!
//! Parsing happens in two passes: `serde_json` turns the bytes into a JSON
//! value, then the tree is walked with the same rule for the root and every
//! `subviews` entry. Walking by hand keeps the JSON path of each field so
//! errors can point at the exact node that broke the document.

use std::collections::BTreeMap;

use serde_json::{Map, Value as Json};

use super::action::{ActionType, BduiAction};
use super::element::{ElementNode, ElementStyles, ElementType, PaddingStyle};
use super::error::SchemaError;
use super::value::{Value, ValueMap};

/// Decode a document from raw bytes.
pub fn decode(bytes: &[u8]) -> Result<ElementNode, SchemaError> {
    let json: Json =
        serde_json::from_slice(bytes).map_err(|source| SchemaError::Malformed { source })?;
    decode_node(&json, "$")
}

/// Decode a document from a string literal.
pub fn decode_str(document: &str) -> Result<ElementNode, SchemaError> {
    decode(document.as_bytes())
}

/// Decode an already parsed JSON value.
pub fn decode_value(json: &Json) -> Result<ElementNode, SchemaError> {
    decode_node(json, "$")
}

fn decode_node(json: &Json, path: &str) -> Result<ElementNode, SchemaError> {
    let object = expect_object(json, path, "an element object")?;

    let type_path = field_path(path, "type");
    let element_type = match present(object, "type") {
        None => {
            return Err(SchemaError::MissingField {
                path: path.to_string(),
                field: "type",
            })
        }
        Some(Json::String(tag)) => {
            ElementType::from_tag(tag).ok_or_else(|| SchemaError::UnknownElementType {
                path: type_path,
                value: tag.clone(),
            })?
        }
        Some(_) => {
            return Err(SchemaError::InvalidField {
                path: type_path,
                expected: "a string",
            })
        }
    };

    let id = optional_string(object, "id", path)?;

    let styles = match present(object, "styles") {
        None => None,
        Some(json) => Some(decode_styles(json, &field_path(path, "styles"))?),
    };

    let content = match present(object, "content") {
        None => None,
        Some(json) => Some(decode_opaque_map(json, &field_path(path, "content"))?),
    };

    let subviews = match present(object, "subviews") {
        None => None,
        Some(json) => {
            let subviews_path = field_path(path, "subviews");
            let items = json.as_array().ok_or_else(|| SchemaError::InvalidField {
                path: subviews_path.clone(),
                expected: "an array of elements",
            })?;
            let children = items
                .iter()
                .enumerate()
                .map(|(i, item)| decode_node(item, &format!("{}[{}]", subviews_path, i)))
                .collect::<Result<Vec<_>, _>>()?;
            Some(children)
        }
    };

    let actions = match present(object, "actions") {
        None => None,
        Some(json) => {
            let actions_path = field_path(path, "actions");
            let map = expect_object(json, &actions_path, "an object of actions")?;
            let mut actions = BTreeMap::new();
            for (trigger, value) in map {
                if value.is_null() {
                    continue;
                }
                let action = decode_action(value, &field_path(&actions_path, trigger))?;
                actions.insert(trigger.clone(), action);
            }
            Some(actions)
        }
    };

    Ok(ElementNode {
        element_type,
        id,
        styles,
        content,
        subviews,
        actions,
    })
}

fn decode_action(json: &Json, path: &str) -> Result<BduiAction, SchemaError> {
    let object = expect_object(json, path, "an action object")?;

    let action_type = match present(object, "type") {
        None => {
            return Err(SchemaError::MissingField {
                path: path.to_string(),
                field: "type",
            })
        }
        Some(Json::String(tag)) => {
            ActionType::from_tag(tag).ok_or_else(|| SchemaError::UnknownActionType {
                path: field_path(path, "type"),
                value: tag.clone(),
            })?
        }
        Some(_) => {
            return Err(SchemaError::InvalidField {
                path: field_path(path, "type"),
                expected: "a string",
            })
        }
    };

    let payload = match present(object, "payload") {
        None => None,
        Some(json) => Some(decode_opaque_map(json, &field_path(path, "payload"))?),
    };

    Ok(BduiAction {
        action_type,
        payload,
    })
}

fn decode_styles(json: &Json, path: &str) -> Result<ElementStyles, SchemaError> {
    let object = expect_object(json, path, "a styles object")?;

    let background_color = optional_string(object, "backgroundColor", path)?;

    // Numbers are kept in textual form.
    let corner_radius = match present(object, "cornerRadius") {
        None => None,
        Some(Json::String(s)) => Some(s.clone()),
        Some(Json::Number(n)) => Some(n.to_string()),
        Some(_) => {
            return Err(SchemaError::InvalidField {
                path: field_path(path, "cornerRadius"),
                expected: "a string or number",
            })
        }
    };

    let padding = match present(object, "padding") {
        None => None,
        Some(json) => {
            let padding_path = field_path(path, "padding");
            let padding = expect_object(json, &padding_path, "a padding object")?;
            Some(PaddingStyle {
                top: optional_number(padding, "top", &padding_path)?,
                left: optional_number(padding, "left", &padding_path)?,
                bottom: optional_number(padding, "bottom", &padding_path)?,
                right: optional_number(padding, "right", &padding_path)?,
            })
        }
    };

    Ok(ElementStyles {
        background_color,
        corner_radius,
        padding,
    })
}

fn decode_opaque_map(json: &Json, path: &str) -> Result<ValueMap, SchemaError> {
    let object = expect_object(json, path, "an object")?;
    Ok(object
        .iter()
        .map(|(key, value)| (key.clone(), Value::from(value.clone())))
        .collect())
}

/// Field lookup where an explicit `null` counts as absent.
fn present<'a>(object: &'a Map<String, Json>, key: &str) -> Option<&'a Json> {
    object.get(key).filter(|value| !value.is_null())
}

fn expect_object<'a>(
    json: &'a Json,
    path: &str,
    expected: &'static str,
) -> Result<&'a Map<String, Json>, SchemaError> {
    json.as_object().ok_or_else(|| SchemaError::InvalidField {
        path: path.to_string(),
        expected,
    })
}

fn optional_string(
    object: &Map<String, Json>,
    key: &str,
    path: &str,
) -> Result<Option<String>, SchemaError> {
    match present(object, key) {
        None => Ok(None),
        Some(Json::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(SchemaError::InvalidField {
            path: field_path(path, key),
            expected: "a string",
        }),
    }
}

fn optional_number(
    object: &Map<String, Json>,
    key: &str,
    path: &str,
) -> Result<Option<f64>, SchemaError> {
    match present(object, key) {
        None => Ok(None),
        Some(Json::Number(n)) => Ok(n.as_f64()),
        Some(_) => Err(SchemaError::InvalidField {
            path: field_path(path, key),
            expected: "a number",
        }),
    }
}

fn field_path(path: &str, key: &str) -> String {
    format!("{}.{}", path, key)
}
