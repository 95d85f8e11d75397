use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ProductError;
use super::value_objects::Gender;

/// An image owned by exactly one product. `id` is `None` until the
/// persistence layer assigns the serial key.
#[derive(Debug, Clone)]
pub struct ProductImage {
    pub id: Option<i32>,
    pub url: String,
}

impl ProductImage {
    pub fn new(url: String) -> Self {
        Self { id: None, url }
    }

    pub fn from_repository(id: i32, url: String) -> Self {
        Self { id: Some(id), url }
    }
}

#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub sizes: Vec<String>,
    pub gender: Gender,
    pub images: Vec<ProductImage>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub title: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
    pub sizes: Option<Vec<String>>,
    pub gender: Gender,
    pub images: Option<Vec<String>>,
}

/// Flattened representation: image child rows reduced to their URLs.
#[derive(Debug, Clone)]
pub struct PlainProduct {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub sizes: Vec<String>,
    pub gender: Gender,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Lowercased, spaces to underscores, apostrophes removed. Applied both
/// when deriving a slug from the title and when normalizing a supplied one.
pub fn normalize_slug(raw: &str) -> String {
    raw.trim().to_lowercase().replace(' ', "_").replace('\'', "")
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.title.trim().is_empty() {
            return Err(ProductError::TitleEmpty);
        }

        let slug = normalize_slug(props.slug.as_deref().unwrap_or(&props.title));
        let images = props
            .images
            .unwrap_or_default()
            .into_iter()
            .map(ProductImage::new)
            .collect();

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            title: props.title,
            slug,
            description: props.description,
            price: props.price.unwrap_or(0.0),
            stock: props.stock.unwrap_or(0),
            sizes: props.sizes.unwrap_or_default(),
            gender: props.gender,
            images,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        title: String,
        slug: String,
        description: Option<String>,
        price: f64,
        stock: i32,
        sizes: Vec<String>,
        gender: Gender,
        images: Vec<ProductImage>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            slug,
            description,
            price,
            stock,
            sizes,
            gender,
            images,
            created_at,
            updated_at,
        }
    }

    pub fn image_urls(&self) -> Vec<String> {
        self.images.iter().map(|image| image.url.clone()).collect()
    }

    pub fn into_plain(self) -> PlainProduct {
        let images = self.image_urls();
        PlainProduct {
            id: self.id,
            title: self.title,
            slug: self.slug,
            description: self.description,
            price: self.price,
            stock: self.stock,
            sizes: self.sizes,
            gender: self.gender,
            images,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
