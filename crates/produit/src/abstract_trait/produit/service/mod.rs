mod command;
mod query;

pub use self::command::{DynProduitCommandService, ProduitCommandServiceTrait};
pub use self::query::{DynProduitQueryService, ProduitQueryServiceTrait};
