pub mod dto;
pub mod error;
pub mod model;
pub mod service;

pub use dto::{CreateUserRequest, UserResponse};
pub use error::UserServiceError;
pub use model::User;
pub use service::{UserDirectory, UserDirectoryApi};
