// ============================================================================
// ARMenu Core - Restaurant Entity
// File: crates/armenu-core/src/domain/restaurant.rs
// Description: Tenant entity and the identifier channels that resolve to it
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Subscription plan enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionPlan {
    #[default]
    Basic,
    Premium,
    Enterprise,
}

impl SubscriptionPlan {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionPlan::Basic => "basic",
            SubscriptionPlan::Premium => "premium",
            SubscriptionPlan::Enterprise => "enterprise",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "basic" => Some(SubscriptionPlan::Basic),
            "premium" => Some(SubscriptionPlan::Premium),
            "enterprise" => Some(SubscriptionPlan::Enterprise),
            _ => None,
        }
    }
}

/// Display-only styling, passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantTheme {
    pub primary_color: String,
    pub secondary_color: String,
    pub background_color: String,
    pub font_family: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_image: Option<String>,
}

/// Restaurant (tenant) entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub description: String,
    pub logo: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub owner_id: String,
    pub is_active: bool,
    pub subscription_plan: SubscriptionPlan,

    /// Opaque token printed into QR codes. Unique across restaurants.
    pub qr_code_secret: Option<String>,
    /// Custom subdomain slug. Unique across restaurants.
    pub custom_domain: Option<String>,
    pub theme: Option<RestaurantTheme>,

    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// One way of naming a restaurant in an inbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupChannel<'a> {
    Id(&'a str),
    Secret(&'a str),
    Domain(&'a str),
}

/// Identifier channels supplied by a request. Blank values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RestaurantLookup {
    pub id: Option<String>,
    pub secret: Option<String>,
    pub domain: Option<String>,
}

impl RestaurantLookup {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self { id: Some(id.into()), ..Self::default() }
    }

    pub fn by_secret(secret: impl Into<String>) -> Self {
        Self { secret: Some(secret.into()), ..Self::default() }
    }

    pub fn by_domain(domain: impl Into<String>) -> Self {
        Self { domain: Some(domain.into()), ..Self::default() }
    }

    /// The channel to resolve through: id, then secret, then domain.
    pub fn channel(&self) -> Option<LookupChannel<'_>> {
        fn present(value: &Option<String>) -> Option<&str> {
            value.as_deref().filter(|v| !v.trim().is_empty())
        }

        present(&self.id)
            .map(LookupChannel::Id)
            .or_else(|| present(&self.secret).map(LookupChannel::Secret))
            .or_else(|| present(&self.domain).map(LookupChannel::Domain))
    }
}
