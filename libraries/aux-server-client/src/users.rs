//! User search, profiles, and the follow graph.

use aux_core::types::{Paginated, User, UserWithStats};

use crate::client::AuxClient;
use crate::error::Result;
use crate::request::RequestSpec;
use crate::types::UpdateProfileRequest;

/// User endpoints of the Aux backend.
pub struct UsersClient<'a> {
    client: &'a AuxClient,
}

impl<'a> UsersClient<'a> {
    pub(crate) fn new(client: &'a AuxClient) -> Self {
        Self { client }
    }

    /// Search users by handle or display name.
    pub async fn search(&self, query: &str, limit: Option<u32>) -> Result<Paginated<User>> {
        let spec = RequestSpec::get("/users/search")
            .query("q", query)
            .query_opt("limit", limit);
        self.client.execute(spec).await
    }

    /// Fetch a user's profile with follower/post counts.
    pub async fn get_profile(&self, username: &str) -> Result<UserWithStats> {
        self.client
            .execute(RequestSpec::get(format!("/users/{}", username)))
            .await
    }

    /// Update the authenticated user's profile.
    pub async fn update_profile(&self, update: &UpdateProfileRequest) -> Result<User> {
        let spec = RequestSpec::patch("/users/me").json_of(update)?;
        self.client.execute(spec).await
    }

    /// Follow a user.
    pub async fn follow(&self, username: &str) -> Result<()> {
        self.client
            .execute_unit(RequestSpec::post(format!("/users/{}/follow", username)))
            .await
    }

    /// Unfollow a user.
    pub async fn unfollow(&self, username: &str) -> Result<()> {
        self.client
            .execute_unit(RequestSpec::delete(format!("/users/{}/follow", username)))
            .await
    }

    /// List a user's followers.
    pub async fn followers(
        &self,
        username: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Paginated<User>> {
        let spec = RequestSpec::get(format!("/users/{}/followers", username))
            .query_opt("limit", limit)
            .query_opt("offset", offset);
        self.client.execute(spec).await
    }

    /// List the users a user follows.
    pub async fn following(
        &self,
        username: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Paginated<User>> {
        let spec = RequestSpec::get(format!("/users/{}/following", username))
            .query_opt("limit", limit)
            .query_opt("offset", offset);
        self.client.execute(spec).await
    }
}
