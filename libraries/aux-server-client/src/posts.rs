//! Feed, posts, likes, and comments.

use aux_core::types::{Comment, Paginated, Post, User};

use crate::client::AuxClient;
use crate::error::Result;
use crate::request::RequestSpec;
use crate::types::{CreateCommentRequest, CreatePostRequest, UpdatePostRequest};

/// Post endpoints of the Aux backend.
pub struct PostsClient<'a> {
    client: &'a AuxClient,
}

impl<'a> PostsClient<'a> {
    pub(crate) fn new(client: &'a AuxClient) -> Self {
        Self { client }
    }

    /// Fetch the authenticated user's home feed.
    pub async fn feed(&self, limit: Option<u32>, offset: Option<u32>) -> Result<Paginated<Post>> {
        let spec = RequestSpec::get("/posts/feed")
            .query_opt("limit", limit)
            .query_opt("offset", offset);
        self.client.execute(spec).await
    }

    /// Fetch a user's posts.
    pub async fn user_posts(
        &self,
        username: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Paginated<Post>> {
        let spec = RequestSpec::get(format!("/posts/user/{}", username))
            .query_opt("limit", limit)
            .query_opt("offset", offset);
        self.client.execute(spec).await
    }

    /// Share a track.
    pub async fn create(&self, post: &CreatePostRequest) -> Result<Post> {
        let spec = RequestSpec::post("/posts").json_of(post)?;
        self.client.execute(spec).await
    }

    /// Fetch a single post.
    pub async fn get(&self, post_id: &str) -> Result<Post> {
        self.client
            .execute(RequestSpec::get(format!("/posts/{}", post_id)))
            .await
    }

    /// Edit a post's caption.
    pub async fn update(&self, post_id: &str, update: &UpdatePostRequest) -> Result<Post> {
        let spec = RequestSpec::patch(format!("/posts/{}", post_id)).json_of(update)?;
        self.client.execute(spec).await
    }

    /// Delete a post.
    pub async fn delete(&self, post_id: &str) -> Result<()> {
        self.client
            .execute_unit(RequestSpec::delete(format!("/posts/{}", post_id)))
            .await
    }

    /// Like a post.
    pub async fn like(&self, post_id: &str) -> Result<()> {
        self.client
            .execute_unit(RequestSpec::post(format!("/posts/{}/like", post_id)))
            .await
    }

    /// Remove a like.
    pub async fn unlike(&self, post_id: &str) -> Result<()> {
        self.client
            .execute_unit(RequestSpec::delete(format!("/posts/{}/like", post_id)))
            .await
    }

    /// List the users who liked a post.
    pub async fn likes(
        &self,
        post_id: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Paginated<User>> {
        let spec = RequestSpec::get(format!("/posts/{}/likes", post_id))
            .query_opt("limit", limit)
            .query_opt("offset", offset);
        self.client.execute(spec).await
    }

    /// Comment on a post.
    pub async fn create_comment(&self, post_id: &str, content: &str) -> Result<Comment> {
        let body = CreateCommentRequest {
            content: content.to_string(),
        };
        let spec = RequestSpec::post(format!("/posts/{}/comments", post_id)).json_of(&body)?;
        self.client.execute(spec).await
    }

    /// List a post's comments.
    pub async fn comments(
        &self,
        post_id: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Paginated<Comment>> {
        let spec = RequestSpec::get(format!("/posts/{}/comments", post_id))
            .query_opt("limit", limit)
            .query_opt("offset", offset);
        self.client.execute(spec).await
    }

    /// Delete a comment.
    pub async fn delete_comment(&self, comment_id: &str) -> Result<()> {
        self.client
            .execute_unit(RequestSpec::delete(format!("/posts/comments/{}", comment_id)))
            .await
    }
}
