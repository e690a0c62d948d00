use thiserror::Error;

use crate::core::error::AppError;

/// Business errors raised by the category service
#[derive(Debug, Error)]
pub enum CategoryError {
    /// Carries the id, slug or name that was looked up
    #[error("Category not found: {0}")]
    NotFound(String),

    #[error("Slug already exists: {0}")]
    DuplicateSlug(String),

    #[error("Name already exists: {0}")]
    DuplicateName(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type CategoryResult<T> = std::result::Result<T, CategoryError>;

impl From<CategoryError> for AppError {
    fn from(err: CategoryError) -> Self {
        match err {
            CategoryError::NotFound(_) => AppError::NotFound(err.to_string()),
            CategoryError::DuplicateSlug(_) | CategoryError::DuplicateName(_) => {
                AppError::Conflict(err.to_string())
            }
            CategoryError::Database(e) => AppError::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_offending_value() {
        assert_eq!(
            CategoryError::NotFound("42".into()).to_string(),
            "Category not found: 42"
        );
        assert_eq!(
            CategoryError::DuplicateSlug("books".into()).to_string(),
            "Slug already exists: books"
        );
        assert_eq!(
            CategoryError::DuplicateName("Books".into()).to_string(),
            "Name already exists: Books"
        );
    }

    #[test]
    fn test_conversion_to_app_error() {
        assert!(matches!(
            AppError::from(CategoryError::NotFound("7".into())),
            AppError::NotFound(msg) if msg == "Category not found: 7"
        ));
        assert!(matches!(
            AppError::from(CategoryError::DuplicateSlug("books".into())),
            AppError::Conflict(msg) if msg == "Slug already exists: books"
        ));
        assert!(matches!(
            AppError::from(CategoryError::DuplicateName("Books".into())),
            AppError::Conflict(_)
        ));
        assert!(matches!(
            AppError::from(CategoryError::Database(sqlx::Error::PoolTimedOut)),
            AppError::Database(_)
        ));
    }
}
