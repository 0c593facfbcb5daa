// ============================================================================
// ARMenu Infrastructure - PostgreSQL Menu Category Repository
// File: crates/armenu-infrastructure/src/database/postgres/menu_category_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::info;

use armenu_core::domain::MenuCategory;
use armenu_core::error::DomainError;
use armenu_core::repositories::MenuCategoryRepository;

use super::{is_unique_violation, store_error};

pub struct PgMenuCategoryRepository {
    pool: PgPool,
}

impl PgMenuCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MenuCategoryRow {
    pub id: String,
    pub restaurant_id: String,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub sort_order: Option<i32>,
}

impl From<MenuCategoryRow> for MenuCategory {
    fn from(row: MenuCategoryRow) -> Self {
        MenuCategory {
            id: row.id,
            name: row.name,
            description: row.description,
            icon: row.icon,
            restaurant_id: row.restaurant_id,
            sort_order: row.sort_order,
        }
    }
}

#[async_trait]
impl MenuCategoryRepository for PgMenuCategoryRepository {
    async fn list_by_restaurant(&self, restaurant_id: &str) -> Result<Vec<MenuCategory>, DomainError> {
        let rows: Vec<MenuCategoryRow> = sqlx::query_as(
            r#"
            SELECT id, restaurant_id, name, description, icon, sort_order
            FROM menu_categories
            WHERE restaurant_id = $1
            ORDER BY seq
            "#
        )
        .bind(restaurant_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| store_error("listing categories", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, category: &MenuCategory) -> Result<MenuCategory, DomainError> {
        let row: MenuCategoryRow = sqlx::query_as(
            r#"
            INSERT INTO menu_categories (id, restaurant_id, name, description, icon, sort_order)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, restaurant_id, name, description, icon, sort_order
            "#
        )
        .bind(&category.id)
        .bind(&category.restaurant_id)
        .bind(&category.name)
        .bind(&category.description)
        .bind(&category.icon)
        .bind(category.sort_order)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::CategoryAlreadyExists {
                    restaurant_id: category.restaurant_id.clone(),
                    category_id: category.id.clone(),
                }
            } else {
                store_error("creating category", e)
            }
        })?;

        info!("Category stored: {}", row.id);
        Ok(row.into())
    }
}
