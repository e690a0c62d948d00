//! Storage port for categories and its Postgres adapter.

mod postgres;

use async_trait::async_trait;

use crate::features::categories::errors::CategoryResult;
use crate::features::categories::models::{Category, NewCategory};

pub use postgres::PgCategoryRepository;

/// Equality-filtered lookups plus writes for the `categories` table.
///
/// Implementations must enforce name and slug uniqueness themselves and
/// report a violation as `DuplicateName` / `DuplicateSlug`: the service's
/// pre-checks can race with concurrent writers.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn get_by_id(&self, id: i64) -> CategoryResult<Option<Category>>;
    async fn get_by_slug(&self, slug: &str) -> CategoryResult<Option<Category>>;
    async fn get_by_name(&self, name: &str) -> CategoryResult<Option<Category>>;

    /// All categories ordered by ascending id
    async fn list_all(&self) -> CategoryResult<Vec<Category>>;

    async fn exists_slug(&self, slug: &str, exclude_id: Option<i64>) -> CategoryResult<bool>;
    async fn exists_name(&self, name: &str, exclude_id: Option<i64>) -> CategoryResult<bool>;

    /// Store a new row and return it with its assigned id
    async fn insert(&self, category: NewCategory) -> CategoryResult<Category>;

    /// Overwrite name, slug and description of `category.id` and return the stored row
    async fn update(&self, category: &Category) -> CategoryResult<Category>;

    async fn delete(&self, id: i64) -> CategoryResult<()>;
}
