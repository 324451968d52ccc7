pub mod produit;
