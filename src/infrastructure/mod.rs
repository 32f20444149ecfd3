// Infrastructure layer - host settings and tenant package loading
pub mod config;
