pub mod merger;
pub mod paginator;
