// ============================================================================
// ARMenu Infrastructure - PostgreSQL Menu Item Repository
// File: crates/armenu-infrastructure/src/database/postgres/menu_item_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use tracing::info;

use armenu_core::domain::MenuItem;
use armenu_core::error::DomainError;
use armenu_core::repositories::MenuItemRepository;

use super::{is_unique_violation, store_error};

pub struct PgMenuItemRepository {
    pool: PgPool,
}

impl PgMenuItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const ITEM_COLUMNS: &str = r#"
    id, restaurant_id, name, description, price, image, category, model_3d,
    allergens, is_vegetarian, is_vegan, spicy_level, is_active, created_at, updated_at
"#;

#[derive(Debug, FromRow)]
struct MenuItemRow {
    pub id: String,
    pub restaurant_id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image: String,
    pub category: String,
    pub model_3d: Option<String>,
    pub allergens: Vec<String>,
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    pub spicy_level: i16,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MenuItemRow> for MenuItem {
    fn from(row: MenuItemRow) -> Self {
        MenuItem {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            image: row.image,
            category: row.category,
            restaurant_id: row.restaurant_id,
            model_3d: row.model_3d,
            allergens: row.allergens,
            is_vegetarian: row.is_vegetarian,
            is_vegan: row.is_vegan,
            // the column CHECK keeps this in 0..=3
            spicy_level: u8::try_from(row.spicy_level).unwrap_or_default(),
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl MenuItemRepository for PgMenuItemRepository {
    async fn list_by_restaurant(&self, restaurant_id: &str) -> Result<Vec<MenuItem>, DomainError> {
        let sql = format!(
            "SELECT {} FROM menu_items WHERE restaurant_id = $1 ORDER BY seq",
            ITEM_COLUMNS
        );
        let rows: Vec<MenuItemRow> = sqlx::query_as(&sql)
            .bind(restaurant_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| store_error("listing menu items", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find(&self, id: &str, restaurant_id: &str) -> Result<Option<MenuItem>, DomainError> {
        let sql = format!(
            "SELECT {} FROM menu_items WHERE id = $1 AND restaurant_id = $2",
            ITEM_COLUMNS
        );
        let row: Option<MenuItemRow> = sqlx::query_as(&sql)
            .bind(id)
            .bind(restaurant_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| store_error("finding menu item", e))?;

        Ok(row.map(Into::into))
    }

    async fn insert(&self, item: &MenuItem) -> Result<MenuItem, DomainError> {
        let sql = format!(
            r#"
            INSERT INTO menu_items (
                id, restaurant_id, name, description, price, image, category, model_3d,
                allergens, is_vegetarian, is_vegan, spicy_level, is_active, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING {}
            "#,
            ITEM_COLUMNS
        );
        let row: MenuItemRow = sqlx::query_as(&sql)
            .bind(&item.id)
            .bind(&item.restaurant_id)
            .bind(&item.name)
            .bind(&item.description)
            .bind(item.price)
            .bind(&item.image)
            .bind(&item.category)
            .bind(&item.model_3d)
            .bind(&item.allergens)
            .bind(item.is_vegetarian)
            .bind(item.is_vegan)
            .bind(i16::from(item.spicy_level))
            .bind(item.is_active)
            .bind(item.created_at)
            .bind(item.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DomainError::ItemAlreadyExists {
                        restaurant_id: item.restaurant_id.clone(),
                        item_id: item.id.clone(),
                    }
                } else {
                    store_error("creating menu item", e)
                }
            })?;

        info!("Menu item stored: {} ({})", row.id, row.restaurant_id);
        Ok(row.into())
    }

    async fn replace(&self, item: &MenuItem) -> Result<MenuItem, DomainError> {
        let sql = format!(
            r#"
            UPDATE menu_items
            SET name = $3, description = $4, price = $5, image = $6, category = $7,
                model_3d = $8, allergens = $9, is_vegetarian = $10, is_vegan = $11,
                spicy_level = $12, is_active = $13, updated_at = $14
            WHERE id = $1 AND restaurant_id = $2
            RETURNING {}
            "#,
            ITEM_COLUMNS
        );
        let row: Option<MenuItemRow> = sqlx::query_as(&sql)
            .bind(&item.id)
            .bind(&item.restaurant_id)
            .bind(&item.name)
            .bind(&item.description)
            .bind(item.price)
            .bind(&item.image)
            .bind(&item.category)
            .bind(&item.model_3d)
            .bind(&item.allergens)
            .bind(item.is_vegetarian)
            .bind(item.is_vegan)
            .bind(i16::from(item.spicy_level))
            .bind(item.is_active)
            .bind(item.updated_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| store_error("updating menu item", e))?;

        row.map(Into::into).ok_or(DomainError::ItemNotFound)
    }

    async fn mark_inactive(&self, id: &str, restaurant_id: &str) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE menu_items
            SET is_active = FALSE,
                updated_at = GREATEST(NOW(), updated_at + INTERVAL '1 microsecond')
            WHERE id = $1 AND restaurant_id = $2
            "#
        )
        .bind(id)
        .bind(restaurant_id)
        .execute(&self.pool)
        .await
        .map_err(|e| store_error("deactivating menu item", e))?;

        Ok(result.rows_affected() > 0)
    }
}
