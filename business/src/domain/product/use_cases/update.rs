use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::PlainProduct;
use crate::domain::product::value_objects::Gender;

/// Partial update: `None` means "leave the persisted value unchanged".
/// `images: Some(urls)` (even empty) replaces the whole image set;
/// `images: None` leaves the child rows untouched.
pub struct UpdateProductParams {
    pub id: Uuid,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
    pub sizes: Option<Vec<String>>,
    pub gender: Option<Gender>,
    pub images: Option<Vec<String>>,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<PlainProduct, ProductError>;
}
