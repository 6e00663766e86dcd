//! Checks applied to raw JSON bodies before anything reaches the store.
//!
//! All functions are pure. The outer shape (object or array) and the `nome`
//! rule on creation are checked on the untyped [`Value`]; field types are
//! then enforced by decoding the object into [`ProductInput`].

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::models::{CreateProduct, ProductInput, UpdateProduct};

const NAME: &str = "nome";

/// Accepts a present string that is not blank once trimmed.
///
/// Returns the string untrimmed; it is stored as submitted.
pub fn validate_name(value: Option<&Value>) -> Result<&str, ValidationError> {
    match value {
        Some(Value::String(name)) if !name.trim().is_empty() => Ok(name.as_str()),
        _ => Err(ValidationError::InvalidName),
    }
}

/// Validates a single-create body.
///
/// A missing body, anything other than an object, and an empty object all
/// count as a missing body.
pub fn validate_create_payload(raw: Option<&Value>) -> Result<CreateProduct, ValidationError> {
    let fields = non_empty_object(raw)?;
    create_from_fields(fields)
}

/// Validates the outer shape of a bulk body and returns its items.
pub fn validate_bulk_payload(raw: Option<&Value>) -> Result<&[Value], ValidationError> {
    match raw {
        Some(Value::Array(items)) => Ok(items.as_slice()),
        _ => Err(ValidationError::NotAnArray),
    }
}

/// Validates one element of a bulk body.
///
/// Same rules as [`validate_create_payload`] for the name and field types, but
/// with the per-item messages, and an empty object is a name failure rather
/// than a missing body.
pub fn validate_bulk_item(item: &Value) -> Result<CreateProduct, ValidationError> {
    let fields = item.as_object().ok_or(ValidationError::ItemNotAnObject)?;
    create_from_fields(fields).map_err(|e| match e {
        ValidationError::InvalidName => ValidationError::InvalidItemName,
        other => other,
    })
}

/// Validates an update body.
///
/// Field types are checked (`nome` string, `quantidade` integer, `preco`
/// number) but not their content: a blank `nome` is accepted on update.
/// Unknown fields are ignored.
pub fn validate_patch(raw: Option<&Value>) -> Result<UpdateProduct, ValidationError> {
    let fields = non_empty_object(raw)?;
    decode(fields).map(UpdateProduct::from)
}

fn non_empty_object(raw: Option<&Value>) -> Result<&Map<String, Value>, ValidationError> {
    match raw {
        Some(Value::Object(fields)) if !fields.is_empty() => Ok(fields),
        _ => Err(ValidationError::MissingBody),
    }
}

/// The name is checked first so that a bad `nome` wins over a bad number.
fn create_from_fields(fields: &Map<String, Value>) -> Result<CreateProduct, ValidationError> {
    let name = validate_name(fields.get(NAME))?.to_string();
    let input = decode(fields)?;

    Ok(CreateProduct {
        name,
        quantity: input.quantity,
        price: input.price,
    })
}

fn decode(fields: &Map<String, Value>) -> Result<ProductInput, ValidationError> {
    serde_json::from_value(Value::Object(fields.clone()))
        .map_err(|e| ValidationError::InvalidField(e.to_string()))
}
