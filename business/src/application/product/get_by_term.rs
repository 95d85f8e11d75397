use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{PlainProduct, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_term::{
    GetProductByTermParams, GetProductByTermUseCase,
};

pub struct GetProductByTermUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByTermUseCase for GetProductByTermUseCaseImpl {
    async fn execute(&self, params: GetProductByTermParams) -> Result<Product, ProductError> {
        let term = params.term;
        self.logger.debug(&format!("Looking up product: {term}"));

        // A syntactically valid UUID is an id lookup; anything else is a
        // title-or-slug match.
        let product = if let Ok(id) = Uuid::parse_str(&term) {
            match self.repository.get_by_id(id).await {
                Ok(product) => Some(product),
                Err(RepositoryError::NotFound) => None,
                Err(other) => return Err(other.into()),
            }
        } else {
            self.repository.find_by_term(&term).await?
        };

        product.ok_or(ProductError::NotFound(term))
    }

    async fn execute_plain(
        &self,
        params: GetProductByTermParams,
    ) -> Result<PlainProduct, ProductError> {
        Ok(self.execute(params).await?.into_plain())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::ProductImage;
    use crate::domain::product::value_objects::Gender;
    use chrono::Utc;
    use mockall::mock;

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

    fn make_product(id: Uuid, title: &str) -> Product {
        let now = Utc::now();
        Product::from_repository(
            id,
            title.to_string(),
            title.to_lowercase().replace(' ', "_"),
            None,
            49.0,
            7,
            vec![],
            Gender::Kid,
            vec![ProductImage::from_repository(1, "shoe.jpg".to_string())],
            now,
            now,
        )
    }

    #[tokio::test]
    async fn should_look_up_by_id_when_term_is_a_uuid() {
        let product_id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .withf(move |id| *id == product_id)
            .returning(move |id| Ok(make_product(id, "Red Shoes")));
        mock_repo.expect_find_by_term().never();

        let use_case = GetProductByTermUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByTermParams {
                term: product_id.to_string(),
            })
            .await;

        assert_eq!(result.unwrap().title, "Red Shoes");
    }

    #[tokio::test]
    async fn should_match_title_or_slug_when_term_is_not_a_uuid() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .never();
        mock_repo
            .expect_find_by_term()
            .withf(|term| term == "red shoes")
            .returning(|_| Ok(Some(make_product(Uuid::new_v4(), "Red Shoes"))));

        let use_case = GetProductByTermUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByTermParams {
                term: "red shoes".to_string(),
            })
            .await;

        assert_eq!(result.unwrap().title, "Red Shoes");
    }

    #[tokio::test]
    async fn should_return_not_found_naming_the_term_for_unknown_uuid() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetProductByTermUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let term = Uuid::new_v4().to_string();
        let result = use_case
            .execute(GetProductByTermParams { term: term.clone() })
            .await;

        match result.unwrap_err() {
            ProductError::NotFound(missing) => assert_eq!(missing, term),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_return_not_found_naming_the_term_for_unknown_text() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_find_by_term().returning(|_| Ok(None));

        let use_case = GetProductByTermUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByTermParams {
                term: "no such product".to_string(),
            })
            .await;

        match result.unwrap_err() {
            ProductError::NotFound(missing) => assert_eq!(missing, "no such product"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_propagate_database_errors_opaquely() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_term()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GetProductByTermUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByTermParams {
                term: "red shoes".to_string(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
    }

    #[tokio::test]
    async fn should_flatten_images_in_plain_lookup() {
        let product_id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(make_product(id, "Red Shoes")));

        let use_case = GetProductByTermUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute_plain(GetProductByTermParams {
                term: product_id.to_string(),
            })
            .await;

        let plain = result.unwrap();
        assert_eq!(plain.images, vec!["shoe.jpg"]);
    }
}
