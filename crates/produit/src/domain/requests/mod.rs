mod produit;

pub use self::produit::ProduitRequest;
