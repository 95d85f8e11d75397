use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use business::domain::product::use_cases::get_by_term::{
    GetProductByTermParams, GetProductByTermUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{CreateProductRequest, ProductResponse, UpdateProductRequest};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_term_use_case: Arc<dyn GetProductByTermUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_term_use_case: Arc<dyn GetProductByTermUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_term_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Product catalog API
///
/// Endpoints for creating, listing, looking up, updating, and deleting
/// products with their image collections.
#[OpenApi]
impl ProductApi {
    /// Create a new product
    ///
    /// Creates a product with an optional list of image URLs.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<CreateProductRequest>) -> CreateProductResponse {
        let params = CreateProductParams {
            title: body.0.title,
            slug: body.0.slug,
            description: body.0.description,
            price: body.0.price,
            stock: body.0.stock,
            sizes: body.0.sizes,
            gender: body.0.gender.into(),
            images: body.0.images,
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List products
    ///
    /// Returns one page of products, flattened to their image URLs.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(
        &self,
        limit: Query<Option<i64>>,
        offset: Query<Option<i64>>,
    ) -> GetAllProductsResponse {
        let params = GetAllProductsParams {
            limit: limit.0,
            offset: offset.0,
        };

        match self.get_all_use_case.execute(params).await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetAllProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by id, slug, or title
    ///
    /// The term is matched as a UUID when syntactically valid, otherwise
    /// case-insensitively against the title or exactly against the slug.
    #[oai(path = "/products/:term", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_term(&self, term: Path<String>) -> GetProductByTermResponse {
        match self
            .get_by_term_use_case
            .execute_plain(GetProductByTermParams { term: term.0 })
            .await
        {
            Ok(product) => GetProductByTermResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByTermResponse::NotFound(json),
                    _ => GetProductByTermResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Applies a partial update; a supplied `images` list replaces the
    /// whole image set atomically.
    #[oai(path = "/products/:id", method = "patch", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<String>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return UpdateProductResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "product.invalid_id".to_string(),
                }));
            }
        };

        let params = UpdateProductParams {
            id: uuid,
            title: body.0.title,
            slug: body.0.slug,
            description: body.0.description,
            price: body.0.price,
            stock: body.0.stock,
            sizes: body.0.sizes,
            gender: body.0.gender.map(|g| g.into()),
            images: body.0.images,
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Accepts an id, slug, or title; returns the product's prior state.
    #[oai(path = "/products/:term", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, term: Path<String>) -> DeleteProductResponse {
        match self
            .delete_use_case
            .execute(DeleteProductParams { term: term.0 })
            .await
        {
            Ok(product) => DeleteProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByTermResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
