use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::PlainProduct;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};

const DEFAULT_LIMIT: i64 = 10;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(
        &self,
        params: GetAllProductsParams,
    ) -> Result<Vec<PlainProduct>, ProductError> {
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT).max(0);
        let offset = params.offset.unwrap_or(0).max(0);

        self.logger.info(&format!(
            "Fetching products page (limit {limit}, offset {offset})"
        ));

        let products = self.repository.get_page(limit, offset).await?;

        self.logger
            .info(&format!("Found {} products", products.len()));
        Ok(products.into_iter().map(|p| p.into_plain()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::{Product, ProductImage};
    use crate::domain::product::value_objects::Gender;
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_page(&self, limit: i64, offset: i64) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn find_by_term(&self, term: &str) -> Result<Option<Product>, RepositoryError>;
            async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn update(&self, product: &Product, replace_images: bool) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn make_product(title: &str, urls: &[&str]) -> Product {
        let now = Utc::now();
        Product::from_repository(
            Uuid::new_v4(),
            title.to_string(),
            title.to_lowercase().replace(' ', "_"),
            None,
            19.99,
            3,
            vec!["M".to_string()],
            Gender::Women,
            urls.iter()
                .enumerate()
                .map(|(i, url)| ProductImage::from_repository(i as i32 + 1, url.to_string()))
                .collect(),
            now,
            now,
        )
    }

    #[tokio::test]
    async fn should_apply_default_pagination_when_none_given() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_page()
            .withf(|limit, offset| *limit == 10 && *offset == 0)
            .returning(|_, _| Ok(vec![]));

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetAllProductsParams::default()).await;

        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_flatten_images_for_each_product_in_page() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_page()
            .withf(|limit, offset| *limit == 5 && *offset == 10)
            .returning(|_, _| {
                Ok(vec![
                    make_product("Red Shoes", &["red_1.jpg", "red_2.jpg"]),
                    make_product("Blue Hat", &[]),
                ])
            });

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllProductsParams {
                limit: Some(5),
                offset: Some(10),
            })
            .await;

        let page = result.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].images, vec!["red_1.jpg", "red_2.jpg"]);
        assert!(page[1].images.is_empty());
    }

    #[tokio::test]
    async fn should_return_empty_page_when_store_is_empty() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_page().returning(|_, _| Ok(vec![]));

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetAllProductsParams::default()).await;

        assert!(result.is_ok());
        assert!(result.unwrap().is_empty());
    }
}
