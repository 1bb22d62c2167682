#![allow(dead_code)]

use async_trait::async_trait;
use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use bloglist::config::{RateLimitConfig, SecurityConfig};
use bloglist::domain::entities::{
    Blog, BlogOwner, BlogPatch, Comment, NewBlog, NewComment, NewUser, User,
};
use bloglist::domain::repositories::{BlogRepository, CommentRepository, UserRepository};
use bloglist::error::AppError;
use bloglist::routes::app_router;
use bloglist::state::AppState;
use bloglist::utils::password::MIN_COST;
use chrono::Utc;
use serde_json::{Value, json};
use sqlx::PgPool;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};

pub const TEST_SECRET: &str = "test-jwt-secret";

/// In-memory stand-in for PostgreSQL implementing all three repositories.
///
/// Mirrors the schema's behaviour: unique usernames, owner joins on blogs,
/// comment cascade on blog delete.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Tables>,
}

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    blogs: Vec<StoredBlog>,
    comments: Vec<StoredComment>,
    next_id: i64,
}

struct StoredBlog {
    id: i64,
    title: String,
    author: String,
    url: String,
    likes: i64,
    user_id: i64,
    created_at: chrono::DateTime<Utc>,
}

struct StoredComment {
    id: i64,
    blog_id: i64,
    user_id: i64,
    content: String,
    created_at: chrono::DateTime<Utc>,
    updated_at: chrono::DateTime<Utc>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn blog(&self, stored: &StoredBlog) -> Blog {
        let owner = self
            .users
            .iter()
            .find(|u| u.id == stored.user_id)
            .map(|u| BlogOwner {
                id: u.id,
                username: u.username.clone(),
                name: u.name.clone(),
            })
            .unwrap_or(BlogOwner {
                id: stored.user_id,
                username: String::new(),
                name: String::new(),
            });

        Blog::new(
            stored.id,
            stored.title.clone(),
            stored.author.clone(),
            stored.url.clone(),
            stored.likes,
            owner,
            stored.created_at,
        )
    }

    fn comment(&self, stored: &StoredComment) -> Comment {
        let username = self
            .users
            .iter()
            .find(|u| u.id == stored.user_id)
            .map(|u| u.username.clone())
            .unwrap_or_default();

        Comment {
            id: stored.id,
            blog_id: stored.blog_id,
            user_id: stored.user_id,
            username,
            content: stored.content.clone(),
            created_at: stored.created_at,
            updated_at: stored.updated_at,
        }
    }
}

impl MemoryStore {
    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.inner.lock().unwrap()
    }

    pub fn blog_count(&self) -> usize {
        self.tables().blogs.len()
    }

    pub fn comment_count(&self) -> usize {
        self.tables().comments.len()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut t = self.tables();
        if t.users.iter().any(|u| u.username == new_user.username) {
            return Err(AppError::conflict(
                "Resource already exists",
                json!({ "constraint": "users_username_key" }),
            ));
        }

        let user = User::new(
            t.next_id(),
            new_user.username,
            new_user.name,
            new_user.password_hash,
            Utc::now(),
        );
        t.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(self.tables().users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .tables()
            .users
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.tables().users.clone())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.tables().users.len() as i64)
    }
}

#[async_trait]
impl BlogRepository for MemoryStore {
    async fn create(&self, new_blog: NewBlog) -> Result<Blog, AppError> {
        let mut t = self.tables();
        let stored = StoredBlog {
            id: t.next_id(),
            title: new_blog.title,
            author: new_blog.author,
            url: new_blog.url,
            likes: new_blog.likes,
            user_id: new_blog.user_id,
            created_at: Utc::now(),
        };
        let blog = t.blog(&stored);
        t.blogs.push(stored);
        Ok(blog)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Blog>, AppError> {
        let t = self.tables();
        Ok(t.blogs.iter().find(|b| b.id == id).map(|b| t.blog(b)))
    }

    async fn list(&self) -> Result<Vec<Blog>, AppError> {
        let t = self.tables();
        Ok(t.blogs.iter().map(|b| t.blog(b)).collect())
    }

    async fn update(&self, id: i64, patch: BlogPatch) -> Result<Blog, AppError> {
        let mut t = self.tables();
        let Some(stored) = t.blogs.iter_mut().find(|b| b.id == id) else {
            return Err(AppError::not_found("Blog not found", json!({ "id": id })));
        };

        if let Some(title) = patch.title {
            stored.title = title;
        }
        if let Some(author) = patch.author {
            stored.author = author;
        }
        if let Some(url) = patch.url {
            stored.url = url;
        }
        if let Some(likes) = patch.likes {
            stored.likes = likes;
        }

        let t = &*t;
        let stored = t.blogs.iter().find(|b| b.id == id).unwrap();
        Ok(t.blog(stored))
    }

    async fn increment_likes(&self, id: i64) -> Result<Option<Blog>, AppError> {
        let mut t = self.tables();
        let Some(stored) = t.blogs.iter_mut().find(|b| b.id == id) else {
            return Ok(None);
        };
        stored.likes += 1;

        let t = &*t;
        Ok(t.blogs.iter().find(|b| b.id == id).map(|b| t.blog(b)))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut t = self.tables();
        let before = t.blogs.len();
        t.blogs.retain(|b| b.id != id);
        if t.blogs.len() == before {
            return Ok(false);
        }
        t.comments.retain(|c| c.blog_id != id);
        Ok(true)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.tables().blogs.len() as i64)
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn create(&self, new_comment: NewComment) -> Result<Comment, AppError> {
        let mut t = self.tables();
        let now = Utc::now();
        let stored = StoredComment {
            id: t.next_id(),
            blog_id: new_comment.blog_id,
            user_id: new_comment.user_id,
            content: new_comment.content,
            created_at: now,
            updated_at: now,
        };
        let comment = t.comment(&stored);
        t.comments.push(stored);
        Ok(comment)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, AppError> {
        let t = self.tables();
        Ok(t.comments.iter().find(|c| c.id == id).map(|c| t.comment(c)))
    }

    async fn list_by_blog(&self, blog_id: i64) -> Result<Vec<Comment>, AppError> {
        let t = self.tables();
        Ok(t
            .comments
            .iter()
            .filter(|c| c.blog_id == blog_id)
            .map(|c| t.comment(c))
            .collect())
    }

    async fn update_content(&self, id: i64, content: &str) -> Result<Comment, AppError> {
        let mut t = self.tables();
        let Some(stored) = t.comments.iter_mut().find(|c| c.id == id) else {
            return Err(AppError::not_found("Comment not found", json!({ "id": id })));
        };
        stored.content = content.to_string();
        stored.updated_at = Utc::now();

        let t = &*t;
        let stored = t.comments.iter().find(|c| c.id == id).unwrap();
        Ok(t.comment(stored))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut t = self.tables();
        let before = t.comments.len();
        t.comments.retain(|c| c.id != id);
        Ok(t.comments.len() != before)
    }
}

pub fn test_security() -> SecurityConfig {
    SecurityConfig {
        jwt_secret: TEST_SECRET.to_string(),
        token_ttl_seconds: 3600,
        bcrypt_cost: MIN_COST,
    }
}

pub fn create_test_state() -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());

    let state = AppState::new(
        store.clone(),
        store.clone(),
        store.clone(),
        &test_security(),
    );

    (state, store)
}

/// Limits loose enough that no test runs into them.
pub fn unlimited() -> RateLimitConfig {
    RateLimitConfig {
        period_ms: 1,
        burst_size: 10_000,
    }
}

/// Serves the production router over a local socket, so rate limiting sees a
/// peer address.
pub fn make_server_with_limits(
    public_limit: RateLimitConfig,
    write_limit: RateLimitConfig,
) -> (TestServer, Arc<MemoryStore>) {
    let (state, store) = create_test_state();
    let app = app_router(state, &public_limit, &write_limit).unwrap();

    let server = TestServer::builder()
        .http_transport()
        .build(ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app))
        .unwrap();

    (server, store)
}

pub fn make_server() -> (TestServer, Arc<MemoryStore>) {
    make_server_with_limits(unlimited(), unlimited())
}

/// Registers a user through the API and returns its id.
pub async fn register(server: &TestServer, username: &str, name: &str, password: &str) -> i64 {
    let response = server
        .post("/api/users")
        .json(&json!({ "username": username, "name": name, "password": password }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["id"].as_i64().unwrap()
}

/// Logs a user in through the API and returns the bearer token.
pub async fn login(server: &TestServer, username: &str, password: &str) -> String {
    let response = server
        .post("/api/login")
        .json(&json!({ "username": username, "password": password }))
        .await;

    response.assert_status_ok();
    response.json::<Value>()["token"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Registers and logs in a user, returning `(id, token)`.
pub async fn register_and_login(server: &TestServer, username: &str) -> (i64, String) {
    let id = register(server, username, "Test User", "salainen").await;
    let token = login(server, username, "salainen").await;
    (id, token)
}

/// Adds a blog through the API and returns the response body.
pub async fn create_blog(server: &TestServer, token: &str, body: Value) -> Value {
    let response = server
        .post("/api/blogs")
        .authorization_bearer(token)
        .json(&body)
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}

/// The six-blog list used throughout the statistics tests.
pub fn initial_blogs() -> Vec<Value> {
    vec![
        json!({ "title": "React patterns", "author": "Michael Chan", "url": "https://reactpatterns.com/", "likes": 7 }),
        json!({ "title": "Go To Statement Considered Harmful", "author": "Edsger W. Dijkstra", "url": "http://www.u.arizona.edu/~rubinson/copyright_violations/Go_To_Considered_Harmful.html", "likes": 5 }),
        json!({ "title": "Canonical string reduction", "author": "Edsger W. Dijkstra", "url": "http://www.cs.utexas.edu/~EWD/transcriptions/EWD08xx/EWD808.html", "likes": 12 }),
        json!({ "title": "First class tests", "author": "Robert C. Martin", "url": "http://blog.cleancoder.com/uncle-bob/2017/05/05/TestDefinitions.htmll", "likes": 10 }),
        json!({ "title": "TDD harms architecture", "author": "Robert C. Martin", "url": "http://blog.cleancoder.com/uncle-bob/2017/03/03/TDD-Harms-Architecture.html", "likes": 0 }),
        json!({ "title": "Type wars", "author": "Robert C. Martin", "url": "http://blog.cleancoder.com/uncle-bob/2016/05/01/TypeWars.html", "likes": 2 }),
    ]
}

// ─── PostgreSQL helpers for repository tests ─────────────────────────────────

pub async fn insert_user(pool: &PgPool, username: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO users (username, name, password_hash) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(username)
    .bind("Test User")
    .bind("$2b$04$invalidinvalidinvalidinvalidinvalidinvalidinvalidinva")
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_blog(pool: &PgPool, user_id: i64, title: &str, likes: i64) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO blogs (title, author, url, likes, user_id) VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(title)
    .bind("Test Author")
    .bind("http://example.com")
    .bind(likes)
    .bind(user_id)
    .fetch_one(pool)
    .await
    .unwrap()
}
