mod command;
mod query;

pub use self::command::{DynProduitCommandRepository, ProduitCommandRepositoryTrait};
pub use self::query::{DynProduitQueryRepository, ProduitQueryRepositoryTrait};
