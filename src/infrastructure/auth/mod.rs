pub mod middleware;

pub use middleware::admin_middleware;
