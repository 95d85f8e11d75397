use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::PlainProduct;

/// Deletion resolves the product with the same term logic as lookup,
/// so a slug or title also deletes.
pub struct DeleteProductParams {
    pub term: String,
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    /// Returns the product as it existed immediately before deletion.
    async fn execute(&self, params: DeleteProductParams) -> Result<PlainProduct, ProductError>;
}
