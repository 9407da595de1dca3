//! Client bound to a single app user.

use crate::client::Client;
use crate::error::Result;
use crate::types::{
    CodeClaim, OfferCodeInfo, PushTokenRegistration, ReferralUser, UserCreate, UserProperties,
    UserResource, Withdrawal,
};
use std::time::Duration;

/// A client fixed to one `app_user_id`, authenticated with a publishable
/// project key.
///
/// Intended for direct client-side embedding, where the embedding app acts
/// only on behalf of its own user. Every call delegates to an inner
/// [`Client`], so the request-building and error-classification logic exists
/// in exactly one place; the only differences from server mode are the
/// credential and where `app_user_id` comes from.
///
/// # Example
///
/// ```no_run
/// use rewardskit::BoundClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = BoundClient::new("pk_live_...", "app-user-1");
///
/// let claim = client.claim_code("WELCOME24").await?;
/// println!("granted {} credit rewards", claim.rewards_granted.credit.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BoundClient {
    inner: Client,
    app_user_id: String,
}

impl BoundClient {
    /// Create a client bound to `app_user_id`, authenticated with a
    /// project key.
    pub fn new(project_key: impl Into<String>, app_user_id: impl Into<String>) -> Self {
        Self {
            inner: Client::new(project_key),
            app_user_id: app_user_id.into(),
        }
    }

    /// Point the client at a different deployment.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not start with `http://` or
    /// `https://`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self> {
        self.inner = self.inner.with_base_url(base_url)?;
        Ok(self)
    }

    /// Set a request timeout enforced by the underlying transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be rebuilt.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.inner = self.inner.with_timeout(timeout)?;
        Ok(self)
    }

    /// Override the header the key is sent in.
    #[must_use]
    pub fn with_api_key_header(mut self, name: impl Into<String>) -> Self {
        self.inner = self.inner.with_api_key_header(name);
        self
    }

    /// Select the path root user resources live under.
    #[must_use]
    pub fn with_user_resource(mut self, resource: UserResource) -> Self {
        self.inner = self.inner.with_user_resource(resource);
        self
    }

    /// The app user this client acts on behalf of.
    pub fn app_user_id(&self) -> &str {
        &self.app_user_id
    }

    /// Fetch the bound user; `Ok(None)` when it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error for any failure other than a missing user.
    pub async fn fetch_user(&self) -> Result<Option<ReferralUser>> {
        self.inner.fetch_user(&self.app_user_id).await
    }

    /// Create the bound user with the given optional properties.
    ///
    /// `app_user_id` comes from the binding.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service rejects the
    /// payload.
    pub async fn create_user(&self, properties: UserProperties) -> Result<ReferralUser> {
        let create = UserCreate {
            app_user_id: self.app_user_id.clone(),
            properties,
        };
        self.inner.create_user(&create).await
    }

    /// Apply a partial update to the bound user.
    ///
    /// # Errors
    ///
    /// Returns an error if the user is not found or the request fails.
    pub async fn update_user(&self, properties: &UserProperties) -> Result<ReferralUser> {
        self.inner.update_user(&self.app_user_id, properties).await
    }

    /// Claim a referral or offer code for the bound user.
    ///
    /// # Errors
    ///
    /// Returns an error if the code is unknown, already claimed, or the
    /// request fails.
    pub async fn claim_code(&self, code: &str) -> Result<CodeClaim> {
        self.inner.claim_code(&self.app_user_id, code).await
    }

    /// Withdraw credits from a credit-type reward of the bound user.
    ///
    /// # Errors
    ///
    /// Returns an error if the reward is not found, the amount is rejected,
    /// or the request fails.
    pub async fn withdraw_credits(&self, reward_key: &str, amount: i64) -> Result<Withdrawal> {
        self.inner
            .withdraw_credits(&self.app_user_id, reward_key, amount)
            .await
    }

    /// Register a push token for the bound user.
    ///
    /// # Errors
    ///
    /// Returns an error if the user is not found or the request fails.
    pub async fn register_push_token(&self, registration: &PushTokenRegistration) -> Result<()> {
        self.inner
            .register_push_token(&self.app_user_id, registration)
            .await
    }

    /// Unregister the push token of a device.
    ///
    /// # Errors
    ///
    /// Returns an error if the user is not found or the request fails.
    pub async fn unregister_push_token(&self, device_id: &str) -> Result<()> {
        self.inner
            .unregister_push_token(&self.app_user_id, device_id)
            .await
    }

    /// Look up an App Store offer code and its associated subscription.
    ///
    /// # Errors
    ///
    /// Returns an error if the offer code is not found or the request
    /// fails.
    pub async fn fetch_offer_code(&self, offer_code_id: &str) -> Result<OfferCodeInfo> {
        self.inner.fetch_offer_code(offer_code_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_client_exposes_its_app_user_id() {
        let client = BoundClient::new("pk", "user-42");
        assert_eq!(client.app_user_id(), "user-42");
    }

    #[test]
    fn builder_overrides_chain() {
        let client = BoundClient::new("pk", "user-42")
            .with_api_key_header("x-api-key")
            .with_user_resource(UserResource::Users)
            .with_base_url("http://localhost:8080");
        assert!(client.is_ok());
    }
}
