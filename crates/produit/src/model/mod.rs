mod produit;

pub use self::produit::{NewProduit, Produit, UnassignedId};
