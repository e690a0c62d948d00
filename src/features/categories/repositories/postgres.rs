use async_trait::async_trait;
use sqlx::PgPool;

use crate::features::categories::errors::{CategoryError, CategoryResult};
use crate::features::categories::models::{Category, NewCategory};

use super::CategoryRepository;

const NAME_CONSTRAINT: &str = "categories_name_unique";
const SLUG_CONSTRAINT: &str = "categories_slug_unique";

/// Map a unique violation (SQLSTATE 23505) back onto the business error for
/// the column that collided. Anything else stays a database error.
fn handle_db_error(e: sqlx::Error, name: &str, slug: &str) -> CategoryError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.code() == Some(std::borrow::Cow::Borrowed("23505")) {
            match db_err.constraint() {
                Some(NAME_CONSTRAINT) => return CategoryError::DuplicateName(name.to_string()),
                Some(SLUG_CONSTRAINT) => return CategoryError::DuplicateSlug(slug.to_string()),
                _ => {}
            }
        }
    }

    tracing::error!("Category write failed: {:?}", e);
    CategoryError::Database(e)
}

fn query_error(context: &str, e: sqlx::Error) -> CategoryError {
    tracing::error!("Failed to {}: {:?}", context, e);
    CategoryError::Database(e)
}

/// `CategoryRepository` backed by the shared Postgres pool
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn get_by_id(&self, id: i64) -> CategoryResult<Option<Category>> {
        sqlx::query_as::<_, Category>(
            "SELECT id, name, slug, description FROM categories WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| query_error("get category by id", e))
    }

    async fn get_by_slug(&self, slug: &str) -> CategoryResult<Option<Category>> {
        sqlx::query_as::<_, Category>(
            "SELECT id, name, slug, description FROM categories WHERE slug = $1",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| query_error("get category by slug", e))
    }

    async fn get_by_name(&self, name: &str) -> CategoryResult<Option<Category>> {
        sqlx::query_as::<_, Category>(
            "SELECT id, name, slug, description FROM categories WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| query_error("get category by name", e))
    }

    async fn list_all(&self) -> CategoryResult<Vec<Category>> {
        sqlx::query_as::<_, Category>(
            "SELECT id, name, slug, description FROM categories ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| query_error("list categories", e))
    }

    async fn exists_slug(&self, slug: &str, exclude_id: Option<i64>) -> CategoryResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM categories
                WHERE slug = $1 AND ($2::BIGINT IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(slug)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| query_error("check category slug", e))
    }

    async fn exists_name(&self, name: &str, exclude_id: Option<i64>) -> CategoryResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM categories
                WHERE name = $1 AND ($2::BIGINT IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(name)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| query_error("check category name", e))
    }

    async fn insert(&self, category: NewCategory) -> CategoryResult<Category> {
        sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, slug, description)
            VALUES ($1, $2, $3)
            RETURNING id, name, slug, description
            "#,
        )
        .bind(&category.name)
        .bind(&category.slug)
        .bind(&category.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| handle_db_error(e, &category.name, &category.slug))
    }

    async fn update(&self, category: &Category) -> CategoryResult<Category> {
        sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET name = $1, slug = $2, description = $3
            WHERE id = $4
            RETURNING id, name, slug, description
            "#,
        )
        .bind(&category.name)
        .bind(&category.slug)
        .bind(&category.description)
        .bind(category.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| handle_db_error(e, &category.name, &category.slug))?
        .ok_or_else(|| CategoryError::NotFound(category.id.to_string()))
    }

    async fn delete(&self, id: i64) -> CategoryResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| query_error("delete category", e))?;

        if result.rows_affected() == 0 {
            return Err(CategoryError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
