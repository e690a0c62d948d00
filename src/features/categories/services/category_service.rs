use std::collections::HashSet;
use std::sync::Arc;

use crate::features::categories::dtos::{
    CategoryResponseDto, CreateCategoryDto, UpdateCategoryDto,
};
use crate::features::categories::errors::{CategoryError, CategoryResult};
use crate::features::categories::models::{Category, NewCategory};
use crate::features::categories::repositories::CategoryRepository;
use crate::shared::slug;

/// Service owning the category business rules: slug assignment, name/slug
/// uniqueness and the create/replace/patch/delete semantics.
///
/// Holds no state besides the repository handle.
pub struct CategoryService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    /// Explicit slug if given, otherwise one derived from the name.
    ///
    /// Names with punctuation derive slugs outside the canonical pattern;
    /// those are stored as-is and only logged.
    fn desired_slug(name: &str, explicit: Option<String>) -> String {
        explicit.unwrap_or_else(|| {
            let derived = slug::normalize(name);
            if !slug::is_valid(&derived) {
                tracing::warn!("Derived slug '{}' is not canonical", derived);
            }
            derived
        })
    }

    async fn find_by_id(&self, id: i64) -> CategoryResult<Category> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| CategoryError::NotFound(id.to_string()))
    }

    /// List all categories, ascending by id
    pub async fn list_all(&self) -> CategoryResult<Vec<CategoryResponseDto>> {
        let categories = self.repo.list_all().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> CategoryResult<CategoryResponseDto> {
        self.find_by_id(id).await.map(Into::into)
    }

    pub async fn get_by_slug(&self, slug: &str) -> CategoryResult<CategoryResponseDto> {
        self.repo
            .get_by_slug(slug)
            .await?
            .map(Into::into)
            .ok_or_else(|| CategoryError::NotFound(slug.to_string()))
    }

    pub async fn get_by_name(&self, name: &str) -> CategoryResult<CategoryResponseDto> {
        self.repo
            .get_by_name(name)
            .await?
            .map(Into::into)
            .ok_or_else(|| CategoryError::NotFound(name.to_string()))
    }

    /// Create a category.
    ///
    /// A taken slug is never an error here: it is bumped to the next free
    /// `-N` suffix. A taken name is rejected.
    pub async fn create(&self, dto: CreateCategoryDto) -> CategoryResult<CategoryResponseDto> {
        let CreateCategoryDto {
            name,
            description,
            slug,
        } = dto;
        let mut slug = Self::desired_slug(&name, slug);

        let existing: HashSet<String> = self
            .repo
            .list_all()
            .await?
            .into_iter()
            .map(|c| c.slug)
            .collect();
        if existing.contains(&slug) {
            slug = slug::generate_unique(&slug, &existing);
        }

        if self.repo.exists_name(&name, None).await? {
            return Err(CategoryError::DuplicateName(name));
        }

        let category = self
            .repo
            .insert(NewCategory {
                name,
                slug,
                description,
            })
            .await?;

        tracing::info!(
            "Category created: id={}, slug={}",
            category.id,
            category.slug
        );

        Ok(category.into())
    }

    /// Replace every mutable field of a category (PUT).
    ///
    /// An absent description clears the stored one. Slug collisions are
    /// rejected rather than bumped.
    pub async fn replace(
        &self,
        id: i64,
        dto: CreateCategoryDto,
    ) -> CategoryResult<CategoryResponseDto> {
        let mut category = self.find_by_id(id).await?;

        let CreateCategoryDto {
            name,
            description,
            slug,
        } = dto;
        let slug = Self::desired_slug(&name, slug);
        if self.repo.exists_slug(&slug, Some(category.id)).await? {
            return Err(CategoryError::DuplicateSlug(slug));
        }
        if self.repo.exists_name(&name, Some(category.id)).await? {
            return Err(CategoryError::DuplicateName(name));
        }

        category.name = name;
        category.slug = slug;
        category.description = description;

        let category = self.repo.update(&category).await?;
        tracing::info!(
            "Category replaced: id={}, slug={}",
            category.id,
            category.slug
        );

        Ok(category.into())
    }

    /// Apply only the supplied fields (PATCH)
    pub async fn update_partial(
        &self,
        id: i64,
        dto: UpdateCategoryDto,
    ) -> CategoryResult<CategoryResponseDto> {
        let mut category = self.find_by_id(id).await?;

        if let Some(name) = dto.name {
            if self.repo.exists_name(&name, Some(category.id)).await? {
                return Err(CategoryError::DuplicateName(name));
            }
            category.name = name;
        }

        if let Some(raw_slug) = dto.slug {
            let slug = slug::normalize(&raw_slug);
            if self.repo.exists_slug(&slug, Some(category.id)).await? {
                return Err(CategoryError::DuplicateSlug(slug));
            }
            category.slug = slug;
        }

        if let Some(description) = dto.description {
            category.description = Some(description);
        }

        let category = self.repo.update(&category).await?;
        tracing::info!("Category updated: id={}", category.id);

        Ok(category.into())
    }

    pub async fn delete(&self, id: i64) -> CategoryResult<()> {
        let category = self.find_by_id(id).await?;
        self.repo.delete(category.id).await?;

        tracing::info!("Category deleted: id={}", id);
        Ok(())
    }
}
