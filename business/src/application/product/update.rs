use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{PlainProduct, Product, ProductImage, normalize_slug};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<PlainProduct, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        if let Some(title) = &params.title
            && title.trim().is_empty()
        {
            return Err(ProductError::TitleEmpty);
        }

        // Read-modify-write: the current row is the base, supplied fields
        // override it, absent fields keep their persisted value.
        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound(params.id.to_string()),
                other => other.into(),
            })?;

        let replace_images = params.images.is_some();
        let images = match params.images {
            Some(urls) => urls.into_iter().map(ProductImage::new).collect(),
            None => existing.images.clone(),
        };

        let updated = Product::from_repository(
            existing.id,
            params.title.unwrap_or(existing.title),
            params
                .slug
                .map(|slug| normalize_slug(&slug))
                .unwrap_or(existing.slug),
            params.description.or(existing.description),
            params.price.unwrap_or(existing.price),
            params.stock.unwrap_or(existing.stock),
            params.sizes.unwrap_or(existing.sizes),
            params.gender.unwrap_or(existing.gender),
            images,
            existing.created_at,
            chrono::Utc::now(),
        );

        self.repository.update(&updated, replace_images).await?;

        self.logger
            .info(&format!("Product updated: {}", updated.id));
        Ok(updated.into_plain())
    }
}
