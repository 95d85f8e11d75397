use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::product::model::{Product, ProductImage};
use business::domain::product::value_objects::Gender;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub sizes: Vec<String>,
    pub gender: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
pub struct ProductImageEntity {
    pub id: i32,
    pub url: String,
}

impl ProductEntity {
    pub fn into_domain(self, images: Vec<ProductImageEntity>) -> Product {
        Product::from_repository(
            self.id,
            self.title,
            self.slug,
            self.description,
            self.price,
            self.stock,
            self.sizes,
            self.gender.parse::<Gender>().unwrap_or(Gender::Unisex),
            images
                .into_iter()
                .map(|image| ProductImage::from_repository(image.id, image.url))
                .collect(),
            self.created_at,
            self.updated_at,
        )
    }
}
