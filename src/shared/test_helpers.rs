use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use tokio::sync::RwLock;

use crate::features::categories::errors::{CategoryError, CategoryResult};
use crate::features::categories::models::{Category, NewCategory};
use crate::features::categories::repositories::CategoryRepository;
use crate::features::categories::{routes as categories_routes, CategoryService};

#[derive(Default)]
struct MemoryTable {
    rows: Vec<Category>,
    next_id: i64,
}

impl MemoryTable {
    /// Mirror of the table's unique constraints
    fn check_unique(&self, name: &str, slug: &str, exclude_id: Option<i64>) -> CategoryResult<()> {
        for other in self.rows.iter().filter(|c| Some(c.id) != exclude_id) {
            if other.name == name {
                return Err(CategoryError::DuplicateName(name.to_string()));
            }
            if other.slug == slug {
                return Err(CategoryError::DuplicateSlug(slug.to_string()));
            }
        }
        Ok(())
    }
}

/// In-memory `CategoryRepository` with the same uniqueness guarantees as
/// the Postgres table. Rows are kept in insertion (= id) order.
#[derive(Default)]
pub struct InMemoryCategoryRepository {
    table: RwLock<MemoryTable>,
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn get_by_id(&self, id: i64) -> CategoryResult<Option<Category>> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|c| c.id == id).cloned())
    }

    async fn get_by_slug(&self, slug: &str) -> CategoryResult<Option<Category>> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|c| c.slug == slug).cloned())
    }

    async fn get_by_name(&self, name: &str) -> CategoryResult<Option<Category>> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|c| c.name == name).cloned())
    }

    async fn list_all(&self) -> CategoryResult<Vec<Category>> {
        Ok(self.table.read().await.rows.clone())
    }

    async fn exists_slug(&self, slug: &str, exclude_id: Option<i64>) -> CategoryResult<bool> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .iter()
            .any(|c| c.slug == slug && Some(c.id) != exclude_id))
    }

    async fn exists_name(&self, name: &str, exclude_id: Option<i64>) -> CategoryResult<bool> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .iter()
            .any(|c| c.name == name && Some(c.id) != exclude_id))
    }

    async fn insert(&self, category: NewCategory) -> CategoryResult<Category> {
        let mut table = self.table.write().await;
        table.check_unique(&category.name, &category.slug, None)?;

        table.next_id += 1;
        let stored = Category {
            id: table.next_id,
            name: category.name,
            slug: category.slug,
            description: category.description,
        };
        table.rows.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, category: &Category) -> CategoryResult<Category> {
        let mut table = self.table.write().await;
        table.check_unique(&category.name, &category.slug, Some(category.id))?;

        let row = table
            .rows
            .iter_mut()
            .find(|c| c.id == category.id)
            .ok_or_else(|| CategoryError::NotFound(category.id.to_string()))?;
        *row = category.clone();
        Ok(row.clone())
    }

    async fn delete(&self, id: i64) -> CategoryResult<()> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|c| c.id != id);

        if table.rows.len() == before {
            return Err(CategoryError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

/// Category routes wired to a fresh in-memory repository
pub fn category_test_router() -> Router {
    let repo = Arc::new(InMemoryCategoryRepository::default());
    let service = Arc::new(CategoryService::new(repo));
    categories_routes::routes(service)
}
