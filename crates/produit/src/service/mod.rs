mod command;
mod query;

pub use self::command::ProduitCommandService;
pub use self::query::ProduitQueryService;
