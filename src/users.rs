//! User resource operations.

use crate::client::Client;
use crate::error::Result;
use crate::types::{ReferralUser, UserCreate, UserProperties};

impl Client {
    /// Fetch a user by `app_user_id`.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the service reports that no such user exists; a user
    /// that has not been created yet is an expected outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error for any failure other than a missing user.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use rewardskit::Client;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::new("key");
    /// if let Some(user) = client.fetch_user("app-user-1").await? {
    ///     println!("first seen: {:?}", user.first_seen_at);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch_user(&self, app_user_id: &str) -> Result<Option<ReferralUser>> {
        let path = self.user_path(app_user_id);
        let response = self.get(&path).await?;
        self.handle_optional_response(response).await
    }

    /// Create a user.
    ///
    /// Absent optional properties are not sent at all, so the service can
    /// tell "not provided" apart from "explicitly cleared".
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service rejects the
    /// payload.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use rewardskit::{Client, UserCreate};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::new("key");
    /// let user = client.create_user(&UserCreate::new("app-user-1")).await?;
    /// assert_eq!(user.app_user_id, "app-user-1");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_user(&self, user: &UserCreate) -> Result<ReferralUser> {
        let response = self.post(self.users_root(), user).await?;
        self.handle_response(response).await
    }

    /// Apply a partial update to a user.
    ///
    /// Only the supplied properties change; `app_user_id` is immutable.
    ///
    /// # Errors
    ///
    /// Returns an error if the user is not found or the request fails.
    pub async fn update_user(
        &self,
        app_user_id: &str,
        properties: &UserProperties,
    ) -> Result<ReferralUser> {
        let path = self.user_path(app_user_id);
        let response = self.patch(&path, properties).await?;
        self.handle_response(response).await
    }
}
