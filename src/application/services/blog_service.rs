//! Blog management and statistics service.

use serde_json::json;
use std::sync::Arc;

use crate::domain::aggregator::{self, AuthorTally, BlogRecord};
use crate::domain::entities::{AuthUser, Blog, BlogPatch, NewBlog};
use crate::domain::repositories::BlogRepository;
use crate::error::AppError;

/// Summary statistics over every stored blog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogStats {
    pub total_likes: u64,
    pub favorite_blog: Option<BlogRecord>,
    pub most_blogs: Option<AuthorTally>,
    pub most_likes: Option<AuthorTally>,
}

impl BlogStats {
    /// Runs every aggregation over the given records.
    pub fn from_records(records: &[BlogRecord]) -> Self {
        Self {
            total_likes: aggregator::total_likes(records),
            favorite_blog: aggregator::favorite_blog(records).cloned(),
            most_blogs: aggregator::most_blogs(records),
            most_likes: aggregator::most_likes(records),
        }
    }
}

/// Service for creating, editing and deleting blogs.
///
/// Only the user who added a blog may edit or delete it. Any authenticated
/// user may like it.
pub struct BlogService<R: BlogRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: BlogRepository + ?Sized> BlogService<R> {
    /// Creates a new blog service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists every blog with its owner.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_blogs(&self) -> Result<Vec<Blog>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a blog by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no blog has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_blog(&self, id: i64) -> Result<Blog, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Blog not found", json!({ "id": id })))
    }

    /// Adds a blog owned by `user`. Missing likes default to zero.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if title or url is blank or likes is negative.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_blog(
        &self,
        user: &AuthUser,
        title: String,
        author: String,
        url: String,
        likes: Option<i64>,
    ) -> Result<Blog, AppError> {
        let title = required("title", title)?;
        let url = required("url", url)?;
        let likes = likes.unwrap_or(0);
        validate_likes(likes)?;

        let blog = self
            .repository
            .create(NewBlog {
                title,
                author: author.trim().to_string(),
                url,
                likes,
                user_id: user.id,
            })
            .await?;

        tracing::info!(blog_id = blog.id, user_id = user.id, "Blog created");

        Ok(blog)
    }

    /// Applies a partial update to a blog owned by `user`.
    ///
    /// An empty patch returns the blog unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no blog has this id.
    /// Returns [`AppError::Forbidden`] if `user` does not own the blog.
    /// Returns [`AppError::Validation`] if a provided field is invalid.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_blog(
        &self,
        id: i64,
        user: &AuthUser,
        patch: BlogPatch,
    ) -> Result<Blog, AppError> {
        let blog = self.get_blog(id).await?;
        ensure_owner(&blog, user)?;

        if patch.is_empty() {
            return Ok(blog);
        }

        let patch = BlogPatch {
            title: patch.title.map(|t| required("title", t)).transpose()?,
            url: patch.url.map(|u| required("url", u)).transpose()?,
            author: patch.author.map(|a| a.trim().to_string()),
            likes: patch.likes,
        };
        if let Some(likes) = patch.likes {
            validate_likes(likes)?;
        }

        self.repository.update(id, patch).await
    }

    /// Adds one like to a blog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no blog has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn like_blog(&self, id: i64) -> Result<Blog, AppError> {
        self.repository
            .increment_likes(id)
            .await?
            .ok_or_else(|| AppError::not_found("Blog not found", json!({ "id": id })))
    }

    /// Deletes a blog owned by `user`, together with its comments.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no blog has this id.
    /// Returns [`AppError::Forbidden`] if `user` does not own the blog.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_blog(&self, id: i64, user: &AuthUser) -> Result<(), AppError> {
        let blog = self.get_blog(id).await?;
        ensure_owner(&blog, user)?;

        if !self.repository.delete(id).await? {
            return Err(AppError::not_found("Blog not found", json!({ "id": id })));
        }

        tracing::info!(blog_id = id, user_id = user.id, "Blog deleted");

        Ok(())
    }

    /// Counts stored blogs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_blogs(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Computes like and authorship statistics over all blogs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn stats(&self) -> Result<BlogStats, AppError> {
        let blogs = self.repository.list().await?;
        let records: Vec<BlogRecord> = blogs.iter().map(BlogRecord::from).collect();

        Ok(BlogStats::from_records(&records))
    }
}

fn ensure_owner(blog: &Blog, user: &AuthUser) -> Result<(), AppError> {
    if !blog.is_owned_by(user.id) {
        tracing::warn!(
            blog_id = blog.id,
            owner_id = blog.owner.id,
            user_id = user.id,
            "Rejected change to blog by non-owner"
        );
        return Err(AppError::forbidden(
            "Only the user who added a blog can change it",
            json!({ "id": blog.id }),
        ));
    }

    Ok(())
}

fn required(field: &'static str, value: String) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::bad_request(
            format!("{field} missing"),
            json!({ "field": field }),
        ));
    }

    Ok(trimmed.to_string())
}

fn validate_likes(likes: i64) -> Result<(), AppError> {
    if likes < 0 {
        return Err(AppError::bad_request(
            "likes must not be negative",
            json!({ "field": "likes", "value": likes }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::BlogOwner;
    use crate::domain::repositories::MockBlogRepository;
    use chrono::Utc;

    fn owner(id: i64) -> BlogOwner {
        BlogOwner {
            id,
            username: format!("user{id}"),
            name: "Name".to_string(),
        }
    }

    fn blog(id: i64, author: &str, likes: i64, owner_id: i64) -> Blog {
        Blog::new(
            id,
            format!("title {id}"),
            author.to_string(),
            format!("http://example.com/{id}"),
            likes,
            owner(owner_id),
            Utc::now(),
        )
    }

    fn caller(id: i64) -> AuthUser {
        AuthUser {
            id,
            username: format!("user{id}"),
        }
    }

    #[tokio::test]
    async fn test_create_blog_defaults_likes_to_zero() {
        let mut repo = MockBlogRepository::new();

        repo.expect_create()
            .withf(|new_blog| new_blog.likes == 0 && new_blog.user_id == 1)
            .times(1)
            .returning(|new_blog| {
                Ok(Blog::new(
                    5,
                    new_blog.title,
                    new_blog.author,
                    new_blog.url,
                    new_blog.likes,
                    owner(new_blog.user_id),
                    Utc::now(),
                ))
            });

        let blog = BlogService::new(Arc::new(repo))
            .create_blog(
                &caller(1),
                "Valid title".to_string(),
                "Valid Author".to_string(),
                "www.valid-url.com".to_string(),
                None,
            )
            .await
            .unwrap();

        assert_eq!(blog.likes, 0);
        assert_eq!(blog.owner.id, 1);
    }

    #[tokio::test]
    async fn test_create_blog_requires_title_and_url() {
        let mut repo = MockBlogRepository::new();
        repo.expect_create().times(0);
        let service = BlogService::new(Arc::new(repo));

        let no_title = service
            .create_blog(
                &caller(1),
                "  ".to_string(),
                "a".to_string(),
                "u".to_string(),
                None,
            )
            .await;
        let no_url = service
            .create_blog(
                &caller(1),
                "t".to_string(),
                "a".to_string(),
                String::new(),
                None,
            )
            .await;

        assert!(matches!(no_title, Err(AppError::Validation { .. })));
        assert!(matches!(no_url, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_create_blog_rejects_negative_likes() {
        let mut repo = MockBlogRepository::new();
        repo.expect_create().times(0);

        let result = BlogService::new(Arc::new(repo))
            .create_blog(
                &caller(1),
                "t".to_string(),
                "a".to_string(),
                "u".to_string(),
                Some(-1),
            )
            .await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_update_blog_by_owner() {
        let mut repo = MockBlogRepository::new();

        repo.expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(blog(id, "a", 1, 1))));

        repo.expect_update()
            .withf(|id, patch| *id == 3 && patch.likes == Some(9001) && patch.title.is_none())
            .times(1)
            .returning(|id, patch| Ok(blog(id, "a", patch.likes.unwrap(), 1)));

        let patch = BlogPatch {
            likes: Some(9001),
            ..Default::default()
        };
        let updated = BlogService::new(Arc::new(repo))
            .update_blog(3, &caller(1), patch)
            .await
            .unwrap();

        assert_eq!(updated.likes, 9001);
    }

    #[tokio::test]
    async fn test_update_blog_by_other_user_is_forbidden() {
        let mut repo = MockBlogRepository::new();

        repo.expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(blog(id, "a", 1, 1))));
        repo.expect_update().times(0);

        let patch = BlogPatch {
            url: Some("updatedurl".to_string()),
            ..Default::default()
        };
        let result = BlogService::new(Arc::new(repo))
            .update_blog(3, &caller(2), patch)
            .await;

        assert!(matches!(result, Err(AppError::Forbidden { .. })));
    }

    #[tokio::test]
    async fn test_update_blog_empty_patch_is_noop() {
        let mut repo = MockBlogRepository::new();

        repo.expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(blog(id, "a", 4, 1))));
        repo.expect_update().times(0);

        let result = BlogService::new(Arc::new(repo))
            .update_blog(3, &caller(1), BlogPatch::default())
            .await
            .unwrap();

        assert_eq!(result.likes, 4);
    }

    #[tokio::test]
    async fn test_update_missing_blog_is_not_found() {
        let mut repo = MockBlogRepository::new();
        repo.expect_find_by_id().times(1).returning(|_| Ok(None));

        let result = BlogService::new(Arc::new(repo))
            .update_blog(3, &caller(1), BlogPatch::default())
            .await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_blog_by_owner() {
        let mut repo = MockBlogRepository::new();

        repo.expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(blog(id, "a", 1, 1))));
        repo.expect_delete()
            .withf(|id| *id == 3)
            .times(1)
            .returning(|_| Ok(true));

        let result = BlogService::new(Arc::new(repo))
            .delete_blog(3, &caller(1))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_blog_by_other_user_is_forbidden() {
        let mut repo = MockBlogRepository::new();

        repo.expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(blog(id, "a", 1, 1))));
        repo.expect_delete().times(0);

        let result = BlogService::new(Arc::new(repo))
            .delete_blog(3, &caller(2))
            .await;

        assert!(matches!(result, Err(AppError::Forbidden { .. })));
    }

    #[tokio::test]
    async fn test_like_missing_blog_is_not_found() {
        let mut repo = MockBlogRepository::new();
        repo.expect_increment_likes()
            .times(1)
            .returning(|_| Ok(None));

        let result = BlogService::new(Arc::new(repo)).like_blog(42).await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_stats_over_stored_blogs() {
        let mut repo = MockBlogRepository::new();

        repo.expect_list().times(1).returning(|| {
            Ok(vec![
                blog(1, "Edsger W. Dijkstra", 5, 1),
                blog(2, "Huukkel von Kuukkel", 3, 1),
                blog(3, "Huukkel von Kuukkel JR.", 105, 2),
                blog(4, "Huukkel von Kuukkel", 103, 2),
            ])
        });

        let stats = BlogService::new(Arc::new(repo)).stats().await.unwrap();

        assert_eq!(stats.total_likes, 216);
        assert_eq!(stats.favorite_blog.unwrap().title, "title 3");
        assert_eq!(
            stats.most_blogs,
            Some(AuthorTally {
                author: "Huukkel von Kuukkel".to_string(),
                value: 2
            })
        );
        assert_eq!(
            stats.most_likes,
            Some(AuthorTally {
                author: "Huukkel von Kuukkel".to_string(),
                value: 106
            })
        );
    }

    #[tokio::test]
    async fn test_stats_empty() {
        let mut repo = MockBlogRepository::new();
        repo.expect_list().times(1).returning(|| Ok(vec![]));

        let stats = BlogService::new(Arc::new(repo)).stats().await.unwrap();

        assert_eq!(
            stats,
            BlogStats {
                total_likes: 0,
                favorite_blog: None,
                most_blogs: None,
                most_likes: None,
            }
        );
    }
}
