use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use utoipa::ToSchema;

use crate::error::ValidationError;

/// Product entity as stored and as sent on the wire.
///
/// Wire field names are Portuguese (`nome`, `quantidade`, `preco`) and must
/// not change; existing clients depend on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Assigned by the store, never reused
    pub id: u64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "quantidade")]
    pub quantity: i64,
    #[serde(rename = "preco")]
    pub price: f64,
}

/// Body accepted by create, by each bulk item, and by update.
///
/// Every field is optional and `null` counts as absent. Unknown fields are
/// ignored. A field of the wrong JSON type fails to decode with the
/// client-facing [`ValidationError::InvalidField`] message.
///
/// `quantidade` accepts any integral number that fits an `i64`, including
/// `5.0`; `5.5` and values beyond the `i64` range are rejected.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct ProductInput {
    #[serde(rename = "nome", default, deserialize_with = "de_name")]
    pub name: Option<String>,
    #[serde(rename = "quantidade", default, deserialize_with = "de_quantity")]
    pub quantity: Option<i64>,
    #[serde(rename = "preco", default, deserialize_with = "de_price")]
    pub price: Option<f64>,
}

fn de_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
        .map_err(|_| de::Error::custom(ValidationError::invalid_field("nome", "uma string")))
}

fn de_quantity<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let invalid = || -> D::Error {
        de::Error::custom(ValidationError::invalid_field("quantidade", "um número inteiro"))
    };

    match Option::<Number>::deserialize(deserializer).map_err(|_| invalid())? {
        None => Ok(None),
        Some(number) => integral(&number).map(Some).ok_or_else(invalid),
    }
}

fn de_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer)
        .map_err(|_| de::Error::custom(ValidationError::invalid_field("preco", "um número")))
}

/// `i64` value of a JSON number with no fractional part.
fn integral(number: &Number) -> Option<i64> {
    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

/// Validated create payload: name present, other fields possibly absent.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProduct {
    pub name: String,
    pub quantity: Option<i64>,
    pub price: Option<f64>,
}

/// Values used for fields omitted on creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductDefaults {
    pub quantity: i64,
    pub price: f64,
}

impl Default for ProductDefaults {
    fn default() -> Self {
        Self {
            quantity: 0,
            price: 0.0,
        }
    }
}

/// Fully specified record ready to be inserted; the store adds the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub quantity: i64,
    pub price: f64,
}

/// Fills every absent field of `partial` from `defaults`.
pub fn apply_defaults(partial: CreateProduct, defaults: &ProductDefaults) -> NewProduct {
    NewProduct {
        name: partial.name,
        quantity: partial.quantity.unwrap_or(defaults.quantity),
        price: partial.price.unwrap_or(defaults.price),
    }
}

/// Patch for update: only present fields are written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub price: Option<f64>,
}

impl From<ProductInput> for UpdateProduct {
    fn from(input: ProductInput) -> Self {
        Self {
            name: input.name,
            quantity: input.quantity,
            price: input.price,
        }
    }
}

impl Product {
    pub fn new(id: u64, input: NewProduct) -> Self {
        Self {
            id,
            name: input.name,
            quantity: input.quantity,
            price: input.price,
        }
    }

    /// Apply updates from UpdateProduct patch. The id is never touched.
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
    }
}

/// One rejected bulk item: the reason and the item exactly as submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BulkItemError {
    pub error: String,
    #[schema(value_type = Object)]
    pub item: Value,
}

/// Body of a bulk create where at least one item was rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BulkCreateReport {
    pub message: String,
    pub added_products: Vec<Product>,
    pub errors: Vec<BulkItemError>,
}

impl BulkCreateReport {
    pub fn new(added_products: Vec<Product>, errors: Vec<BulkItemError>) -> Self {
        Self {
            message: format!(
                "{} produtos adicionados com sucesso.",
                added_products.len()
            ),
            added_products,
            errors,
        }
    }
}

/// Result of a bulk create.
///
/// `Created` when every item was accepted (answered 201 with a plain array),
/// `Partial` as soon as one item was rejected (answered 200 with a report).
#[derive(Debug, Clone, PartialEq)]
pub enum BulkCreateOutcome {
    Created(Vec<Product>),
    Partial(BulkCreateReport),
}

/// `{ "message": ... }` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
