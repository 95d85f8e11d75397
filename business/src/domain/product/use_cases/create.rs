use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::PlainProduct;
use crate::domain::product::value_objects::Gender;

pub struct CreateProductParams {
    pub title: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
    pub sizes: Option<Vec<String>>,
    pub gender: Gender,
    pub images: Option<Vec<String>>,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<PlainProduct, ProductError>;
}
