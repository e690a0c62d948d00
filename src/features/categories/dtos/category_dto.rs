use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::categories::models::Category;
use crate::shared::validation::SLUG_REGEX;

fn clean_name(name: String) -> String {
    name.trim().to_string()
}

fn clean_slug(slug: String) -> String {
    slug.trim().to_lowercase()
}

/// Request body for creating (POST) or replacing (PUT) a category
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,

    pub description: Option<String>,

    /// Derived from `name` when absent
    #[validate(
        length(max = 120, message = "slug exceeds 120 characters"),
        regex(path = *SLUG_REGEX, message = "invalid slug: use only a-z0-9 and single hyphens between words")
    )]
    pub slug: Option<String>,
}

impl CreateCategoryDto {
    /// Trim the name and trim/lowercase the slug ahead of validation
    pub fn sanitized(self) -> Self {
        Self {
            name: clean_name(self.name),
            description: self.description,
            slug: self.slug.map(clean_slug),
        }
    }
}

/// Request body for a partial update (PATCH); absent fields stay unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryDto {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(
        length(max = 120, message = "slug exceeds 120 characters"),
        regex(path = *SLUG_REGEX, message = "invalid slug: use only a-z0-9 and single hyphens between words")
    )]
    pub slug: Option<String>,
}

impl UpdateCategoryDto {
    pub fn sanitized(self) -> Self {
        Self {
            name: self.name.map(clean_name),
            description: self.description,
            slug: self.slug.map(clean_slug),
        }
    }
}

/// Response DTO for category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            slug: c.slug,
            description: c.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(name: &str, slug: Option<&str>) -> CreateCategoryDto {
        CreateCategoryDto {
            name: name.to_string(),
            description: None,
            slug: slug.map(str::to_string),
        }
    }

    #[test]
    fn test_create_sanitizes_before_validation() {
        let dto = create("  Books  ", Some("  Sci-Fi ")).sanitized();
        assert_eq!(dto.name, "Books");
        assert_eq!(dto.slug.as_deref(), Some("sci-fi"));
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_create_rejects_blank_and_long_names() {
        assert!(create("   ", None).sanitized().validate().is_err());
        assert!(create(&"a".repeat(101), None).sanitized().validate().is_err());
        assert!(create(&"a".repeat(100), None).sanitized().validate().is_ok());
    }

    #[test]
    fn test_create_rejects_malformed_slugs() {
        for slug in ["-books", "books-", "sci--fi", "home garden", "home_garden", ""] {
            let result = create("Books", Some(slug)).sanitized().validate();
            assert!(result.is_err(), "slug {:?} should be rejected", slug);
        }
        assert!(create("Books", Some(&"a".repeat(121)))
            .sanitized()
            .validate()
            .is_err());
        assert!(create("Books", Some(&"a".repeat(120)))
            .sanitized()
            .validate()
            .is_ok());
    }

    #[test]
    fn test_update_allows_empty_body() {
        let dto = UpdateCategoryDto::default().sanitized();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_update_validates_supplied_fields() {
        let blank_name = UpdateCategoryDto {
            name: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(blank_name.sanitized().validate().is_err());

        let bad_slug = UpdateCategoryDto {
            slug: Some("no spaces".to_string()),
            ..Default::default()
        };
        assert!(bad_slug.sanitized().validate().is_err());

        let upper_slug = UpdateCategoryDto {
            slug: Some(" Fiction ".to_string()),
            ..Default::default()
        }
        .sanitized();
        assert_eq!(upper_slug.slug.as_deref(), Some("fiction"));
        assert!(upper_slug.validate().is_ok());
    }

    #[test]
    fn test_response_serializes_null_description() {
        let dto = CategoryResponseDto::from(Category {
            id: 1,
            name: "Books".to_string(),
            slug: "books".to_string(),
            description: None,
        });
        let value = serde_json::to_value(dto).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 1, "name": "Books", "slug": "books", "description": null})
        );
    }
}
