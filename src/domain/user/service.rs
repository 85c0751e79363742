use super::error::UserServiceError;
use super::{CreateUserRequest, User, UserResponse};
use async_trait::async_trait;
use chrono::Utc;
use indexmap::IndexMap;
use tokio::sync::RwLock;

/// In-memory user store backing the demo routes
#[derive(Debug, Default)]
pub struct UserDirectory {
    users: RwLock<Directory>,
}

#[derive(Debug, Default)]
struct Directory {
    next_id: u64,
    users: IndexMap<u64, User>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
pub trait UserDirectoryApi: Send + Sync {
    async fn list_users(&self) -> Vec<UserResponse>;

    async fn create_user(&self, request: CreateUserRequest) -> Result<UserResponse, UserServiceError>;

    async fn get_user(&self, user_id: u64) -> Result<UserResponse, UserServiceError>;

    async fn delete_user(&self, user_id: u64) -> Result<(), UserServiceError>;
}

#[async_trait]
impl UserDirectoryApi for UserDirectory {
    async fn list_users(&self) -> Vec<UserResponse> {
        let directory = self.users.read().await;
        directory
            .users
            .values()
            .cloned()
            .map(UserResponse::from)
            .collect()
    }

    async fn create_user(&self, request: CreateUserRequest) -> Result<UserResponse, UserServiceError> {
        let name = request
            .name
            .ok_or_else(|| UserServiceError::Invalid("name is required".to_string()))?;
        let email = request
            .email
            .ok_or_else(|| UserServiceError::Invalid("email is required".to_string()))?;

        let mut directory = self.users.write().await;
        if directory
            .users
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(&email))
        {
            return Err(UserServiceError::EmailTaken(email));
        }

        directory.next_id += 1;
        let user = User {
            id: directory.next_id,
            name,
            email,
            age: request.age,
            created_at: Utc::now(),
        };
        directory.users.insert(user.id, user.clone());

        tracing::info!(user_id = user.id, "User created");
        Ok(user.into())
    }

    async fn get_user(&self, user_id: u64) -> Result<UserResponse, UserServiceError> {
        let directory = self.users.read().await;
        directory
            .users
            .get(&user_id)
            .cloned()
            .map(UserResponse::from)
            .ok_or(UserServiceError::NotFound(user_id))
    }

    async fn delete_user(&self, user_id: u64) -> Result<(), UserServiceError> {
        let mut directory = self.users.write().await;
        directory
            .users
            .shift_remove(&user_id)
            .map(|_| ())
            .ok_or(UserServiceError::NotFound(user_id))
    }
}
