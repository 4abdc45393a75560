//! # Animal Validator
//!
//! Shape checks applied to a POST body before it is appended:
//! - `name`, `species` and `diet` are non-empty strings
//! - `personalityTraits` is present and is a list
//!
//! Trait element types and list length are not checked here.

use serde_json::Value;

use super::errors::ValidationError;
use super::filter::{DIET_KEY, NAME_KEY, SPECIES_KEY, TRAITS_KEY};
use super::record::AnimalRecord;

/// Validate a candidate record, naming the first failing field.
pub fn validate_animal(candidate: &Value) -> Result<(), ValidationError> {
    let obj = candidate.as_object().ok_or(ValidationError::NotAnObject)?;

    for key in [NAME_KEY, SPECIES_KEY, DIET_KEY] {
        match obj.get(key).and_then(Value::as_str) {
            Some(s) if !s.is_empty() => {}
            _ => return Err(ValidationError::MissingString(key)),
        }
    }

    match obj.get(TRAITS_KEY) {
        Some(Value::Array(_)) => Ok(()),
        _ => Err(ValidationError::NotAList(TRAITS_KEY)),
    }
}

/// Boolean form of [`validate_animal`]
pub fn is_valid_animal(candidate: &Value) -> bool {
    validate_animal(candidate).is_ok()
}

/// Build a typed record from a validated candidate, stamping it with `id`.
///
/// Any `id` present in the candidate is ignored. Stricter than
/// [`validate_animal`]: a trait list holding anything other than strings
/// passes validation but is rejected here, since a record only stores
/// string traits.
pub(crate) fn to_record(candidate: &Value, id: String) -> Result<AnimalRecord, ValidationError> {
    validate_animal(candidate)?;

    let string_field = |key: &'static str| {
        candidate
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or(ValidationError::MissingString(key))
    };

    let personality_traits = candidate
        .get(TRAITS_KEY)
        .and_then(Value::as_array)
        .ok_or(ValidationError::NotAList(TRAITS_KEY))?
        .iter()
        .map(|t| {
            t.as_str()
                .map(str::to_string)
                .ok_or(ValidationError::NonStringTrait(TRAITS_KEY))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AnimalRecord {
        id,
        name: string_field(NAME_KEY)?,
        species: string_field(SPECIES_KEY)?,
        diet: string_field(DIET_KEY)?,
        personality_traits,
    })
}
