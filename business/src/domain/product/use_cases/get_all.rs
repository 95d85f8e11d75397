use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::PlainProduct;

#[derive(Debug, Default)]
pub struct GetAllProductsParams {
    /// Page size, defaults to 10.
    pub limit: Option<i64>,
    /// Rows to skip, defaults to 0.
    pub offset: Option<i64>,
}

#[async_trait]
pub trait GetAllProductsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetAllProductsParams,
    ) -> Result<Vec<PlainProduct>, ProductError>;
}
