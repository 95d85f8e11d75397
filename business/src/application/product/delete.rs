use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::PlainProduct;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use crate::domain::product::use_cases::get_by_term::{
    GetProductByTermParams, GetProductByTermUseCase,
};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub finder: Arc<dyn GetProductByTermUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<PlainProduct, ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.term));

        // Same term resolution as lookup, so a slug or title also deletes.
        let product = self
            .finder
            .execute(GetProductByTermParams { term: params.term })
            .await?;

        self.repository.delete(product.id).await?;

        self.logger.info(&format!("Product deleted: {}", product.id));
        Ok(product.into_plain())
    }
}
