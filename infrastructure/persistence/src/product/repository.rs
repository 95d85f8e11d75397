use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

use super::entity::{ProductEntity, ProductImageEntity};

const PRODUCT_COLUMNS: &str =
    "id, title, slug, description, price, stock, sizes, gender, created_at, updated_at";

/// SQLSTATE for unique-constraint violations in Postgres.
const UNIQUE_VIOLATION: &str = "23505";

/// The single error-mapping policy for every query in this adapter: a
/// unique-key violation keeps its human-readable detail, everything else
/// is logged in full here and collapsed to an opaque database error.
fn map_db_error(err: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &err
        && db_err.code().as_deref() == Some(UNIQUE_VIOLATION)
    {
        return RepositoryError::Duplicated(db_err.message().to_string());
    }
    tracing::error!("database error: {err}");
    RepositoryError::DatabaseError
}

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_images(
        &self,
        product_id: Uuid,
    ) -> Result<Vec<ProductImageEntity>, RepositoryError> {
        sqlx::query_as::<_, ProductImageEntity>(
            "SELECT id, url FROM product_images WHERE product_id = $1 ORDER BY id",
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_page(&self, limit: i64, offset: i64) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY created_at DESC, id LIMIT $1 OFFSET $2",
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut products = Vec::with_capacity(entities.len());
        for entity in entities {
            let images = self.load_images(entity.id).await?;
            products.push(entity.into_domain(images));
        }
        Ok(products)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or(RepositoryError::NotFound)?;

        let images = self.load_images(entity.id).await?;
        Ok(entity.into_domain(images))
    }

    async fn find_by_term(&self, term: &str) -> Result<Option<Product>, RepositoryError> {
        let needle = term.to_lowercase();
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE LOWER(title) = $1 OR slug = $1 LIMIT 1",
        ))
        .bind(&needle)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match entity {
            Some(entity) => {
                let images = self.load_images(entity.id).await?;
                Ok(Some(entity.into_domain(images)))
            }
            None => Ok(None),
        }
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r#"INSERT INTO products (id, title, slug, description, price, stock, sizes, gender, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)"#,
        )
        .bind(product.id)
        .bind(&product.title)
        .bind(&product.slug)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.stock)
        .bind(&product.sizes)
        .bind(product.gender.to_string())
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        for image in &product.images {
            sqlx::query("INSERT INTO product_images (url, product_id) VALUES ($1, $2)")
                .bind(&image.url)
                .bind(product.id)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    async fn update(&self, product: &Product, replace_images: bool) -> Result<(), RepositoryError> {
        // An early return drops the transaction, which rolls it back, so a
        // failed step never leaves the image set half-replaced.
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        if replace_images {
            sqlx::query("DELETE FROM product_images WHERE product_id = $1")
                .bind(product.id)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
        }

        sqlx::query(
            r#"UPDATE products SET
                title = $2,
                slug = $3,
                description = $4,
                price = $5,
                stock = $6,
                sizes = $7,
                gender = $8,
                updated_at = $9
            WHERE id = $1"#,
        )
        .bind(product.id)
        .bind(&product.title)
        .bind(&product.slug)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.stock)
        .bind(&product.sizes)
        .bind(product.gender.to_string())
        .bind(product.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if replace_images {
            for image in &product.images {
                sqlx::query("INSERT INTO product_images (url, product_id) VALUES ($1, $2)")
                    .bind(&image.url)
                    .bind(product.id)
                    .execute(&mut *tx)
                    .await
                    .map_err(map_db_error)?;
            }
        }

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        // Child images go with the row via the FK cascade.
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
