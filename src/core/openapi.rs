use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        categories_handlers::create_category,
        categories_handlers::list_categories,
        categories_handlers::get_category_by_name,
        categories_handlers::get_category_by_slug,
        categories_handlers::get_category,
        categories_handlers::replace_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
    ),
    components(
        schemas(
            categories_dtos::CategoryResponseDto,
            categories_dtos::CreateCategoryDto,
            categories_dtos::UpdateCategoryDto,
        )
    ),
    tags(
        (name = "categories", description = "Category management"),
    ),
    info(
        title = "Category Service API",
        version = "0.1.0",
        description = "API documentation for the category service",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
