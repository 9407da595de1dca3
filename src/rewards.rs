//! Code claiming and credit withdrawal.

use crate::client::Client;
use crate::error::Result;
use crate::types::{CodeClaim, Withdrawal};
use serde::Serialize;

/// Body of a withdraw request.
#[derive(Debug, Serialize)]
struct WithdrawRequest {
    amount: i64,
}

impl Client {
    /// Claim a referral or offer code for a user.
    ///
    /// # Returns
    ///
    /// The updated user together with the rewards the claim granted.
    ///
    /// # Errors
    ///
    /// Returns an error if the code is unknown, already claimed, or the
    /// request fails. An already-claimed code surfaces the service's
    /// conflict response unchanged.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use rewardskit::Client;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::new("key");
    /// let claim = client.claim_code("app-user-1", "WELCOME24").await?;
    /// for grant in &claim.rewards_granted.credit {
    ///     println!("{}: +{}", grant.key, grant.amount);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn claim_code(&self, app_user_id: &str, code: &str) -> Result<CodeClaim> {
        let path = format!("{}/codes/{}/claim", self.user_path(app_user_id), code);
        let response = self.post(&path, &serde_json::json!({})).await?;
        self.handle_response(response).await
    }

    /// Withdraw credits from a credit-type reward.
    ///
    /// The amount actually withdrawn is decided by the service and reported
    /// in the result; the client does not pre-validate `amount`, so a
    /// non-positive amount surfaces as the service's validation error.
    ///
    /// # Errors
    ///
    /// Returns an error if the user or reward is not found, the amount is
    /// rejected, or the request fails.
    pub async fn withdraw_credits(
        &self,
        app_user_id: &str,
        reward_key: &str,
        amount: i64,
    ) -> Result<Withdrawal> {
        let path = format!(
            "{}/rewards/credit/{}/withdraw",
            self.user_path(app_user_id),
            reward_key
        );
        let response = self.post(&path, &WithdrawRequest { amount }).await?;
        self.handle_response(response).await
    }
}
