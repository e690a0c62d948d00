//! Category management.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/categories/` | Create category |
//! | GET | `/categories/` | List categories |
//! | GET | `/categories/by-name/{name}` | Get by name |
//! | GET | `/categories/by-slug/{slug}` | Get by slug |
//! | GET | `/categories/{id}` | Get by id |
//! | PUT | `/categories/{id}` | Replace category |
//! | PATCH | `/categories/{id}` | Partially update category |
//! | DELETE | `/categories/{id}` | Delete category |

pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod seed;
pub mod services;

pub use repositories::PgCategoryRepository;
pub use services::CategoryService;
