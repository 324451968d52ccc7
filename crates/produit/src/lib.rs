pub mod abstract_trait;
pub mod domain;
pub mod model;
pub mod repository;
pub mod routes;
pub mod service;
pub mod test_samples;

pub const ENTITY_NAME: &str = "produit";
