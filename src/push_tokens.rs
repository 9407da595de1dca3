//! Push token registration operations.

use crate::client::Client;
use crate::error::Result;
use crate::types::PushTokenRegistration;
use serde::Serialize;

/// Body of an unregister request.
#[derive(Debug, Serialize)]
struct UnregisterRequest<'a> {
    device_id: &'a str,
}

impl Client {
    /// Register a push token for a user.
    ///
    /// Associates `(device_id, token, token_type)` with the user. The
    /// service responds with an empty body.
    ///
    /// # Errors
    ///
    /// Returns an error if the user is not found or the request fails.
    pub async fn register_push_token(
        &self,
        app_user_id: &str,
        registration: &PushTokenRegistration,
    ) -> Result<()> {
        let path = format!("{}/push-token/register", self.user_path(app_user_id));
        let response = self.post(&path, registration).await?;
        self.handle_empty_response(response).await
    }

    /// Unregister the push token of a device.
    ///
    /// # Errors
    ///
    /// Returns an error if the user is not found or the request fails.
    pub async fn unregister_push_token(&self, app_user_id: &str, device_id: &str) -> Result<()> {
        let path = format!("{}/push-token/unregister", self.user_path(app_user_id));
        let response = self.delete(&path, &UnregisterRequest { device_id }).await?;
        self.handle_empty_response(response).await
    }
}
