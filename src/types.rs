//! Type definitions for the RewardsKit client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::field::Field;

/// Path root under which user resources live.
///
/// Referral deployments expose users under `/referral/users`; user-resource
/// deployments mirror the same operations under `/users`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UserResource {
    /// `/referral/users/...` (default).
    #[default]
    Referral,
    /// `/users/...`.
    Users,
}

impl UserResource {
    pub(crate) fn root(self) -> &'static str {
        match self {
            UserResource::Referral => "referral/users",
            UserResource::Users => "users",
        }
    }
}

/// A user record tracked by the rewards service, keyed by `app_user_id`.
///
/// `app_user_id` is caller-supplied, unique per remote account, and never
/// changes once the user is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferralUser {
    /// Unique identifier of the app's user.
    pub app_user_id: String,
    /// Whether the user is premium.
    #[serde(default)]
    pub is_premium: Option<bool>,
    /// When the user was first seen.
    #[serde(default)]
    pub first_seen_at: Option<DateTime<Utc>>,
    /// When the user was last seen.
    #[serde(default)]
    pub last_seen_at: Option<DateTime<Utc>>,
    /// Caller-opaque metadata (object or list); never validated client-side.
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

/// Optional user properties sent on create and partial update.
///
/// The date and premium fields are tri-state: [`Field::Absent`] keeps the
/// server-side value, [`Field::Null`] clears it, [`Field::Value`] sets it.
/// `metadata` is omitted when `None`, so updates without it never clear
/// existing metadata.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserProperties {
    /// Whether the user is premium.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub is_premium: Field<bool>,
    /// When the user was first seen.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub first_seen_at: Field<DateTime<Utc>>,
    /// When the user was last seen.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub last_seen_at: Field<DateTime<Utc>>,
    /// Replacement metadata; omitted entirely when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// Payload for creating a user.
#[derive(Debug, Clone, Serialize)]
pub struct UserCreate {
    /// Unique identifier of the app's user.
    pub app_user_id: String,
    /// Initial properties; absent fields are not sent.
    #[serde(flatten)]
    pub properties: UserProperties,
}

impl UserCreate {
    /// Create payload with the given id and no optional properties.
    pub fn new(app_user_id: impl Into<String>) -> Self {
        Self {
            app_user_id: app_user_id.into(),
            properties: UserProperties::default(),
        }
    }
}

/// Result of claiming a code: the updated user plus what the claim granted.
#[derive(Debug, Clone, Deserialize)]
pub struct CodeClaim {
    /// The user after the claim was applied.
    pub user: ReferralUser,
    /// Rewards credited as a side effect of the claim.
    pub rewards_granted: RewardsGranted,
}

/// Rewards credited server-side when a code is claimed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RewardsGranted {
    /// One-off rewards.
    #[serde(default)]
    pub basic: Vec<GrantedReward>,
    /// Credit-type rewards, later withdrawable.
    #[serde(default)]
    pub credit: Vec<CreditGrant>,
}

/// A one-off reward granted by a claim.
#[derive(Debug, Clone, Deserialize)]
pub struct GrantedReward {
    /// Reward key as configured in the service.
    pub key: String,
    /// Display name, when configured.
    #[serde(default)]
    pub name: Option<String>,
    /// Caller-opaque metadata attached to the reward.
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

/// A credit-type reward granted by a claim.
#[derive(Debug, Clone, Deserialize)]
pub struct CreditGrant {
    /// Reward key as configured in the service.
    pub key: String,
    /// Amount of credits granted.
    pub amount: i64,
    /// When the granted credits expire, if they do.
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Result of withdrawing credits: the updated user plus the outcome.
#[derive(Debug, Clone, Deserialize)]
pub struct Withdrawal {
    /// The user after the withdrawal was applied.
    pub user: ReferralUser,
    /// Server-computed withdrawal outcome.
    pub withdraw_result: WithdrawResult,
}

/// Server-computed outcome of a credit withdrawal.
///
/// The requested amount is echoed back; the amount actually withdrawn is
/// authoritative from the server and may be lower.
#[derive(Debug, Clone, Deserialize)]
pub struct WithdrawResult {
    /// Key of the credit reward withdrawn from.
    pub reward_key: String,
    /// Amount the caller asked for.
    pub amount_requested: i64,
    /// Amount the service actually withdrew.
    pub amount_withdrawn: i64,
}

/// Push token registration for a user.
#[derive(Debug, Clone, Serialize)]
pub struct PushTokenRegistration {
    /// Device identifier where the push token was received.
    pub device_id: String,
    /// Push token value.
    pub token: String,
    /// Push token type.
    pub token_type: PushTokenType,
}

/// Supported push token types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PushTokenType {
    /// Apple Push Notification service.
    Apns,
    /// Firebase Cloud Messaging.
    Fcm,
}

/// An App Store offer code and its associated subscription state.
#[derive(Debug, Clone, Deserialize)]
pub struct OfferCodeInfo {
    /// The promotional code.
    pub offer_code: OfferCode,
    /// Subscription the code applies to.
    pub subscription: Subscription,
}

/// A promotional App Store offer code.
#[derive(Debug, Clone, Deserialize)]
pub struct OfferCode {
    /// Unique identifier of the offer code.
    pub offer_code_id: String,
    /// Display name, when configured.
    #[serde(default)]
    pub name: Option<String>,
    /// When the code expires, if it does.
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Subscription state associated with an offer code.
#[derive(Debug, Clone, Deserialize)]
pub struct Subscription {
    /// App Store product identifier.
    #[serde(default)]
    pub product_id: Option<String>,
    /// Subscription offer identifier.
    #[serde(default)]
    pub offer_id: Option<String>,
    /// Whether the subscription is currently active.
    #[serde(default)]
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_token_type_wire_names() {
        assert_eq!(serde_json::to_string(&PushTokenType::Apns).unwrap(), r#""apns""#);
        assert_eq!(serde_json::to_string(&PushTokenType::Fcm).unwrap(), r#""fcm""#);
        let parsed: PushTokenType = serde_json::from_str(r#""fcm""#).unwrap();
        assert_eq!(parsed, PushTokenType::Fcm);
    }

    #[test]
    fn default_properties_serialize_to_empty_object() {
        let json = serde_json::to_string(&UserProperties::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn create_payload_flattens_properties() {
        let mut create = UserCreate::new("user-1");
        create.properties.is_premium = Field::Value(true);
        let value = serde_json::to_value(&create).unwrap();
        assert_eq!(value, serde_json::json!({"app_user_id": "user-1", "is_premium": true}));
    }

    #[test]
    fn user_resource_roots() {
        assert_eq!(UserResource::Referral.root(), "referral/users");
        assert_eq!(UserResource::Users.root(), "users");
    }

    #[test]
    fn user_decodes_with_missing_optionals() {
        let user: ReferralUser = serde_json::from_str(r#"{"app_user_id":"u"}"#).unwrap();
        assert_eq!(user.app_user_id, "u");
        assert!(user.is_premium.is_none());
        assert!(user.metadata.is_none());
    }

    #[test]
    fn metadata_accepts_object_or_list() {
        let object: ReferralUser =
            serde_json::from_str(r#"{"app_user_id":"u","metadata":{"k":"v"}}"#).unwrap();
        assert!(object.metadata.unwrap().is_object());
        let list: ReferralUser =
            serde_json::from_str(r#"{"app_user_id":"u","metadata":[1,2]}"#).unwrap();
        assert!(list.metadata.unwrap().is_array());
    }
}
