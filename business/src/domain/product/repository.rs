use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Product;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// One page of products, images eagerly loaded, default store order.
    async fn get_page(&self, limit: i64, offset: i64) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    /// Case-insensitive title match OR exact slug match; first row wins.
    async fn find_by_term(&self, term: &str) -> Result<Option<Product>, RepositoryError>;
    /// Inserts the product and its images as one atomic save.
    async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
    /// Updates the product row; when `replace_images` is set, swaps the
    /// whole child image set for `product.images` in the same transaction.
    async fn update(&self, product: &Product, replace_images: bool) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
