use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{PlainProduct, Product};

/// The term is either a product UUID or a free-text title/slug match.
pub struct GetProductByTermParams {
    pub term: String,
}

#[async_trait]
pub trait GetProductByTermUseCase: Send + Sync {
    async fn execute(&self, params: GetProductByTermParams) -> Result<Product, ProductError>;
    /// Same lookup, reshaped to the flat image-URL form.
    async fn execute_plain(
        &self,
        params: GetProductByTermParams,
    ) -> Result<PlainProduct, ProductError>;
}
