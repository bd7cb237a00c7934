use rust_decimal::Decimal;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

/// A product as stored and returned to callers.
pub type Product = models::product::Model;

/// Creation input. Field constraints mirror the `products` column limits.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProductInput {
    #[validate(length(max = 100, message = "name must be at most 100 characters"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 500, message = "description must be at most 500 characters"))]
    pub description: Option<String>,
    #[validate(custom(function = "storable_price"))]
    pub price: Decimal,
    #[validate(length(max = 50, message = "category must be at most 50 characters"))]
    pub category: String,
    #[validate(email(message = "supplier_email must be a valid email address"))]
    pub supplier_email: String,
}

/// Partial update. `None` leaves the stored value untouched.
///
/// `description` is the only nullable column, so it carries a second level of
/// `Option`: absent in the body is `None`, an explicit `null` is `Some(None)`
/// and clears the stored description. For the other fields `null` is the same
/// as leaving the field out.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProductInput {
    #[serde(default)]
    #[validate(length(max = 100, message = "name must be at most 100 characters"))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500, message = "description must be at most 500 characters"))]
    pub description: Option<Option<String>>,
    #[serde(default)]
    #[validate(custom(function = "storable_price"))]
    pub price: Option<Decimal>,
    #[serde(default)]
    #[validate(length(max = 50, message = "category must be at most 50 characters"))]
    pub category: Option<String>,
    #[serde(default)]
    #[validate(email(message = "supplier_email must be a valid email address"))]
    pub supplier_email: Option<String>,
}

impl UpdateProductInput {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.supplier_email.is_none()
    }

    /// Overwrite the fields present in this patch on `product`.
    pub fn apply_to(self, product: &mut Product) {
        if let Some(name) = self.name { product.name = name; }
        if let Some(description) = self.description { product.description = description; }
        if let Some(price) = self.price { product.price = price; }
        if let Some(category) = self.category { product.category = category; }
        if let Some(email) = self.supplier_email { product.supplier_email = email; }
    }
}

/// Marks a field as present even when its value is `null`.
fn present<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

/// Exclusive upper bound of a `NUMERIC(10,2)` value.
const PRICE_LIMIT: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 0);
const PRICE_SCALE: u32 = 2;

fn price_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

/// Price must fit the `NUMERIC(10,2)` column without rounding.
fn storable_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(price_error("range", "price must be greater than or equal to 0"));
    }
    if *price >= PRICE_LIMIT {
        return Err(price_error("range", "price must be less than 100000000"));
    }
    if price.normalize().scale() > PRICE_SCALE {
        return Err(price_error("scale", "price must have at most 2 decimal places"));
    }
    Ok(())
}

/// Timestamp to record for an update made at `now`.
///
/// `created_at` comes from the database clock and `now` from ours, so the
/// later of the two is used to keep `created_at <= updated_at`.
pub fn touched_at(created_at: DateTimeWithTimeZone, now: DateTimeWithTimeZone) -> DateTimeWithTimeZone {
    if now < created_at { created_at } else { now }
}
