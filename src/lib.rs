//! Typed async client for the RewardsKit referral & rewards API.
//!
//! The crate maps typed method calls onto the service's REST surface:
//! each operation builds a request, attaches the credential header, sends
//! it through [`reqwest`], classifies the outcome, and returns a typed
//! result. The client holds no state beyond the credentials captured at
//! construction, so one instance can serve unlimited concurrent calls.
//!
//! # Identity modes
//!
//! - [`Client`] — server mode: a private API key acting on any user; every
//!   operation takes an explicit `app_user_id`. For backend integrations.
//! - [`BoundClient`] — bound mode: a publishable project key fixed to one
//!   `app_user_id`. For direct client-side embedding.
//!
//! Both modes share one request-building implementation; they differ only
//! in the credential and in where `app_user_id` comes from.
//!
//! # Example
//!
//! ```no_run
//! use rewardskit::{Client, Field, UserCreate, UserProperties};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new(std::env::var("REWARDSKIT_API_KEY")?);
//!
//! // Create a user, then mark it premium.
//! let user = client.create_user(&UserCreate::new("app-user-1")).await?;
//! let update = UserProperties {
//!     is_premium: Field::Value(true),
//!     ..Default::default()
//! };
//! let user = client.update_user(&user.app_user_id, &update).await?;
//!
//! // Claim a code; the service reports what it granted.
//! let claim = client.claim_code(&user.app_user_id, "WELCOME24").await?;
//! for grant in &claim.rewards_granted.credit {
//!     println!("granted {} x {}", grant.amount, grant.key);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Not found is not an error
//!
//! Fetching a user that does not exist yet is an expected outcome:
//!
//! ```no_run
//! # use rewardskit::Client;
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! # let client = Client::new("key");
//! match client.fetch_user("new-user").await? {
//!     Some(user) => println!("exists: {}", user.app_user_id),
//!     None => println!("not created yet"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Every other service failure surfaces as
//! [`ClientError::Api`] carrying the full ordered list of error details the
//! service returned; network-level failures surface as
//! [`ClientError::Transport`] and are never mistaken for a missing
//! resource.
//!
//! # Partial updates
//!
//! Update payloads distinguish "not provided" from "explicitly cleared"
//! with [`Field`]: absent fields are omitted from the body entirely, so an
//! update that does not mention `metadata` never clears existing metadata.

mod bound;
mod client;
mod error;
mod field;
mod offer_codes;
mod push_tokens;
mod rewards;
mod types;
mod users;

pub use bound::BoundClient;
pub use client::{Client, DEFAULT_BASE_URL};
pub use error::{ApiErrorPayload, ClientError, ErrorDetail, Result};
pub use field::Field;
pub use types::{
    CodeClaim, CreditGrant, GrantedReward, OfferCode, OfferCodeInfo, PushTokenRegistration,
    PushTokenType, ReferralUser, RewardsGranted, Subscription, UserCreate, UserProperties,
    UserResource, WithdrawResult, Withdrawal,
};
