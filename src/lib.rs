// Tenant dashboard customization - configuration schema, view registry and embedded views
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
