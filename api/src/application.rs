pub mod cors_middleware;
pub mod http;
