pub mod env_loader;
pub mod paths;
