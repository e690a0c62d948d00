//! Default categories inserted at startup.

use std::collections::HashSet;

use crate::features::categories::errors::{CategoryError, CategoryResult};
use crate::features::categories::models::NewCategory;
use crate::features::categories::repositories::CategoryRepository;

pub struct DefaultCategory {
    pub name: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
}

pub const DEFAULT_CATEGORIES: &[DefaultCategory] = &[
    DefaultCategory {
        name: "Books",
        slug: "books",
        description: "Books and reading materials",
    },
    DefaultCategory {
        name: "Electronics",
        slug: "electronics",
        description: "Electronic devices and gadgets",
    },
    DefaultCategory {
        name: "Clothing",
        slug: "clothing",
        description: "Apparel and accessories",
    },
];

/// Insert every default category whose slug is not present yet.
///
/// Idempotent. A default whose name is already used under another slug is
/// skipped with a warning. Returns the number of rows inserted.
pub async fn seed_default_categories(repo: &dyn CategoryRepository) -> CategoryResult<usize> {
    let existing: HashSet<String> = repo
        .list_all()
        .await?
        .into_iter()
        .map(|c| c.slug)
        .collect();

    let mut inserted = 0;
    for default in DEFAULT_CATEGORIES {
        if existing.contains(default.slug) {
            continue;
        }

        let result = repo
            .insert(NewCategory {
                name: default.name.to_string(),
                slug: default.slug.to_string(),
                description: Some(default.description.to_string()),
            })
            .await;

        match result {
            Ok(category) => {
                tracing::info!("Seeded category: id={}, slug={}", category.id, category.slug);
                inserted += 1;
            }
            Err(CategoryError::DuplicateName(name) | CategoryError::DuplicateSlug(name)) => {
                tracing::warn!("Skipping default category '{}': already taken", name);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(inserted)
}
