pub mod abstract_trait;
pub mod config;
pub mod domain;
pub mod errors;
pub mod routing;
pub mod utils;
