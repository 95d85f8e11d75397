use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, PlainProduct, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<PlainProduct, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.title));

        let product = Product::new(NewProductProps {
            title: params.title,
            slug: params.slug,
            description: params.description,
            price: params.price,
            stock: params.stock,
            sizes: params.sizes,
            gender: params.gender,
            images: params.images,
        })?;

        self.repository.save(&product).await?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product.into_plain())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::value_objects::Gender;
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

    fn params(title: &str) -> CreateProductParams {
        CreateProductParams {
            title: title.to_string(),
            slug: None,
            description: None,
            price: None,
            stock: None,
            sizes: None,
            gender: Gender::Men,
            images: None,
        }
    }

    #[tokio::test]
    async fn should_create_product_and_flatten_images_in_order() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_save()
            .withf(|product| product.image_urls() == vec!["first.jpg", "second.jpg"])
            .returning(|_| Ok(()));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let mut create = params("Red Shoes");
        create.images = Some(vec!["first.jpg".to_string(), "second.jpg".to_string()]);
        let result = use_case.execute(create).await;

        assert!(result.is_ok());
        let plain = result.unwrap();
        assert_eq!(plain.title, "Red Shoes");
        assert_eq!(plain.slug, "red_shoes");
        assert_eq!(plain.images, vec!["first.jpg", "second.jpg"]);
    }

    #[tokio::test]
    async fn should_reject_product_when_title_is_empty() {
        let mock_repo = MockProductRepo::new();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("")).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ProductError::TitleEmpty));
    }

    #[tokio::test]
    async fn should_map_duplicate_key_to_conflict_with_detail() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_save().returning(|_| {
            Err(RepositoryError::Duplicated(
                "Key (title)=(Red Shoes) already exists.".to_string(),
            ))
        });

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Red Shoes")).await;

        match result.unwrap_err() {
            ProductError::Duplicated(detail) => {
                assert_eq!(detail, "Key (title)=(Red Shoes) already exists.");
            }
            other => panic!("expected Duplicated, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_hide_detail_of_other_persistence_failures() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Blue Hat")).await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
