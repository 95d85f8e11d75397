use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::product::model::PlainProduct;
use business::domain::product::value_objects::Gender;

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum GenderDto {
    #[oai(rename = "men")]
    Men,
    #[oai(rename = "women")]
    Women,
    #[oai(rename = "kid")]
    Kid,
    #[oai(rename = "unisex")]
    Unisex,
}

impl From<Gender> for GenderDto {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Men => GenderDto::Men,
            Gender::Women => GenderDto::Women,
            Gender::Kid => GenderDto::Kid,
            Gender::Unisex => GenderDto::Unisex,
        }
    }
}

impl From<GenderDto> for Gender {
    fn from(dto: GenderDto) -> Self {
        match dto {
            GenderDto::Men => Gender::Men,
            GenderDto::Women => Gender::Women,
            GenderDto::Kid => Gender::Kid,
            GenderDto::Unisex => Gender::Unisex,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product title (unique, cannot be empty)
    pub title: String,
    /// URL-safe unique identifier; derived from the title when omitted
    #[oai(skip_serializing_if_is_none)]
    pub slug: Option<String>,
    /// Product description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Unit price (defaults to 0)
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
    /// Units in stock (defaults to 0)
    #[oai(skip_serializing_if_is_none)]
    pub stock: Option<i32>,
    /// Available sizes
    #[oai(skip_serializing_if_is_none)]
    pub sizes: Option<Vec<String>>,
    /// Target gender
    pub gender: GenderDto,
    /// Image URLs (defaults to no images)
    #[oai(skip_serializing_if_is_none)]
    pub images: Option<Vec<String>>,
}

/// Partial update: omitted fields keep their current value. Sending
/// `images` (even as an empty list) replaces the whole image set.
#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// Product title (unique, cannot be empty)
    #[oai(skip_serializing_if_is_none)]
    pub title: Option<String>,
    /// URL-safe unique identifier
    #[oai(skip_serializing_if_is_none)]
    pub slug: Option<String>,
    /// Product description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Unit price
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
    /// Units in stock
    #[oai(skip_serializing_if_is_none)]
    pub stock: Option<i32>,
    /// Available sizes
    #[oai(skip_serializing_if_is_none)]
    pub sizes: Option<Vec<String>>,
    /// Target gender
    #[oai(skip_serializing_if_is_none)]
    pub gender: Option<GenderDto>,
    /// Replacement image URLs
    #[oai(skip_serializing_if_is_none)]
    pub images: Option<Vec<String>>,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Product title
    pub title: String,
    /// URL-safe unique identifier
    pub slug: String,
    /// Product description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Unit price
    pub price: f64,
    /// Units in stock
    pub stock: i32,
    /// Available sizes
    pub sizes: Vec<String>,
    /// Target gender
    pub gender: GenderDto,
    /// Image URLs in insertion order
    pub images: Vec<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<PlainProduct> for ProductResponse {
    fn from(product: PlainProduct) -> Self {
        Self {
            id: product.id.to_string(),
            title: product.title,
            slug: product.slug,
            description: product.description,
            price: product.price,
            stock: product.stock,
            sizes: product.sizes,
            gender: product.gender.into(),
            images: product.images,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
