// Presentation layer - reference host consuming the customization contract
pub mod handlers;
pub mod host;
