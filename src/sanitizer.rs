use crate::error::AppError;

use serde_json::{Map, Value};

/// Editor setting listing extra elements and attributes the sanitizer keeps
pub const EXTENDED_VALID_ELEMENTS: &str = "extended_valid_elements";

/// Allow every attribute on `img`, so `srcset` and `sizes` survive editing
pub const IMG_ALL_ATTRIBUTES: &str = "img[*]";

/// Merge the `img[*]` rule into the editor's sanitizer settings.
///
/// Existing rules are kept and the rule is added once, so the patch can be
/// applied on every editor initialisation.
pub fn allow_all_image_attributes(
    mut config: Map<String, Value>,
) -> Result<Map<String, Value>, AppError> {
    let existing = match config.get(EXTENDED_VALID_ELEMENTS) {
        None | Some(Value::Null) => None,
        Some(Value::String(rules)) => Some(rules.to_owned()),
        Some(_) => {
            return Err(AppError::SanitizerConfig {
                key: EXTENDED_VALID_ELEMENTS.to_owned(),
            })
        }
    };
    let rules = match existing {
        Some(rules) if rules.split(',').any(|rule| rule.trim() == IMG_ALL_ATTRIBUTES) => {
            return Ok(config);
        }
        Some(rules) if !rules.trim().is_empty() => [rules.as_str(), IMG_ALL_ATTRIBUTES].join(","),
        _ => IMG_ALL_ATTRIBUTES.to_owned(),
    };
    debug!("Setting {} to {}", EXTENDED_VALID_ELEMENTS, rules);
    config.insert(EXTENDED_VALID_ELEMENTS.to_owned(), Value::String(rules));
    Ok(config)
}
