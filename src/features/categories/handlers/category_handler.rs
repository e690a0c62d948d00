use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::categories::dtos::{
    CategoryResponseDto, CreateCategoryDto, UpdateCategoryDto,
};
use crate::features::categories::services::CategoryService;

/// Create a category
///
/// The slug is derived from the name when omitted. A slug that is already
/// taken gets a numeric suffix (`-2`, `-3`, ...).
#[utoipa::path(
    post,
    path = "/categories/",
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = CategoryResponseDto),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Name already exists")
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(service): State<Arc<CategoryService>>,
    AppJson(dto): AppJson<CreateCategoryDto>,
) -> Result<(StatusCode, Json<CategoryResponseDto>)> {
    let dto = dto.sanitized();
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let category = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// List all categories ordered by id
#[utoipa::path(
    get,
    path = "/categories/",
    responses(
        (status = 200, description = "List of categories", body = Vec<CategoryResponseDto>),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<Vec<CategoryResponseDto>>> {
    let categories = service.list_all().await?;
    Ok(Json(categories))
}

/// Get category by exact name
#[utoipa::path(
    get,
    path = "/categories/by-name/{name}",
    params(
        ("name" = String, Path, description = "Category name")
    ),
    responses(
        (status = 200, description = "Category found", body = CategoryResponseDto),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category_by_name(
    State(service): State<Arc<CategoryService>>,
    Path(name): Path<String>,
) -> Result<Json<CategoryResponseDto>> {
    let category = service.get_by_name(&name).await?;
    Ok(Json(category))
}

/// Get category by slug
#[utoipa::path(
    get,
    path = "/categories/by-slug/{slug}",
    params(
        ("slug" = String, Path, description = "Category slug")
    ),
    responses(
        (status = 200, description = "Category found", body = CategoryResponseDto),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category_by_slug(
    State(service): State<Arc<CategoryService>>,
    Path(slug): Path<String>,
) -> Result<Json<CategoryResponseDto>> {
    let category = service.get_by_slug(&slug).await?;
    Ok(Json(category))
}

/// Get category by ID
#[utoipa::path(
    get,
    path = "/categories/{id}",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category found", body = CategoryResponseDto),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<i64>,
) -> Result<Json<CategoryResponseDto>> {
    let category = service.get_by_id(id).await?;
    Ok(Json(category))
}

/// Replace a category
///
/// Name, slug and description are all overwritten; an omitted description is cleared.
#[utoipa::path(
    put,
    path = "/categories/{id}",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    request_body = CreateCategoryDto,
    responses(
        (status = 200, description = "Category replaced", body = CategoryResponseDto),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Slug or name already exists")
    ),
    tag = "categories"
)]
pub async fn replace_category(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<CreateCategoryDto>,
) -> Result<Json<CategoryResponseDto>> {
    let dto = dto.sanitized();
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let category = service.replace(id, dto).await?;
    Ok(Json(category))
}

/// Partially update a category
#[utoipa::path(
    patch,
    path = "/categories/{id}",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    request_body = UpdateCategoryDto,
    responses(
        (status = 200, description = "Category updated", body = CategoryResponseDto),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Slug or name already exists")
    ),
    tag = "categories"
)]
pub async fn update_category(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<UpdateCategoryDto>,
) -> Result<Json<CategoryResponseDto>> {
    let dto = dto.sanitized();
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let category = service.update_partial(id, dto).await?;
    Ok(Json(category))
}

/// Delete a category
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn delete_category(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
