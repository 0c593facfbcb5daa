// ============================================================================
// ARMenu Infrastructure - PostgreSQL Restaurant Repository
// File: crates/armenu-infrastructure/src/database/postgres/restaurant_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{types::Json, FromRow, PgPool};

use armenu_core::domain::{Restaurant, RestaurantTheme, SubscriptionPlan};
use armenu_core::error::DomainError;
use armenu_core::repositories::RestaurantRepository;

use super::store_error;

pub struct PgRestaurantRepository {
    pool: PgPool,
}

impl PgRestaurantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_one(&self, column: &str, value: &str) -> Result<Option<Restaurant>, DomainError> {
        // column comes from the fixed set below, never from input
        let sql = format!("{} WHERE {} = $1", SELECT_RESTAURANT, column);
        let row: Option<RestaurantRow> = sqlx::query_as(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| store_error(&format!("finding restaurant by {}", column), e))?;

        Ok(row.map(|r| r.into()))
    }
}

const SELECT_RESTAURANT: &str = r#"
    SELECT
        id, name, description, logo, address, phone, website,
        owner_id, is_active, subscription_plan, qr_code_secret, custom_domain,
        theme, created_at, updated_at
    FROM restaurants
"#;

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct RestaurantRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub logo: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub owner_id: String,
    pub is_active: bool,
    pub subscription_plan: String,
    pub qr_code_secret: Option<String>,
    pub custom_domain: Option<String>,
    pub theme: Option<Json<RestaurantTheme>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<RestaurantRow> for Restaurant {
    fn from(row: RestaurantRow) -> Self {
        Restaurant {
            id: row.id,
            name: row.name,
            description: row.description,
            logo: row.logo,
            address: row.address,
            phone: row.phone,
            website: row.website,
            owner_id: row.owner_id,
            is_active: row.is_active,
            subscription_plan: SubscriptionPlan::from_str(&row.subscription_plan).unwrap_or_default(),
            qr_code_secret: row.qr_code_secret,
            custom_domain: row.custom_domain,
            theme: row.theme.map(|t| t.0),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl RestaurantRepository for PgRestaurantRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Restaurant>, DomainError> {
        self.find_one("id", id).await
    }

    async fn find_by_secret(&self, secret: &str) -> Result<Option<Restaurant>, DomainError> {
        self.find_one("qr_code_secret", secret).await
    }

    async fn find_by_domain(&self, domain: &str) -> Result<Option<Restaurant>, DomainError> {
        self.find_one("custom_domain", domain).await
    }

    async fn find_by_owner(&self, owner_id: &str) -> Result<Vec<Restaurant>, DomainError> {
        let sql = format!("{} WHERE owner_id = $1 ORDER BY created_at", SELECT_RESTAURANT);
        let rows: Vec<RestaurantRow> = sqlx::query_as(&sql)
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| store_error("listing restaurants by owner", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
