pub mod debug_id;
pub mod helper;
pub mod link;
pub mod response;
pub mod user;
