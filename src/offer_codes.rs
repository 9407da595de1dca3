//! App Store offer code lookup.

use crate::client::Client;
use crate::error::Result;
use crate::types::OfferCodeInfo;

impl Client {
    /// Look up an App Store offer code and its associated subscription.
    ///
    /// Part of the App-Store-facing surface; the path does not depend on
    /// the configured user resource root.
    ///
    /// # Errors
    ///
    /// Returns an error if the offer code is not found or the request
    /// fails.
    pub async fn fetch_offer_code(&self, offer_code_id: &str) -> Result<OfferCodeInfo> {
        let path = format!("app-store/offer-codes/{offer_code_id}");
        let response = self.get(&path).await?;
        self.handle_response(response).await
    }
}
