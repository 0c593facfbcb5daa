//! # ARMenu Infrastructure
//! 
//! Record store implementations (adapters): in-memory and PostgreSQL.

pub mod database;
pub mod memory;

pub use database::{create_pool, run_migrations, PgRestaurantRepository, PgMenuCategoryRepository, PgMenuItemRepository};
pub use memory::MemoryStore;
