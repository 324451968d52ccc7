use crate::model::{NewProduit, Produit};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Body of the create, update and partial update endpoints.
///
/// `id` stays a raw string so the handlers can report a misplaced or
/// mismatching id with the dedicated error keys instead of a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProduitRequest {
    #[schema(example = "fda21762-44e8-494b-87d9-c2da54108c24")]
    pub id: Option<String>,
    pub description: Option<String>,
    pub nom: Option<String>,
    pub prix: Option<f64>,
}

impl ProduitRequest {
    pub fn has_id(&self) -> bool {
        self.id.is_some()
    }

    /// `None` when no id was sent, `Some(None)` when it is not a UUID.
    pub fn parsed_id(&self) -> Option<Option<Uuid>> {
        self.id.as_deref().map(|raw| Uuid::parse_str(raw).ok())
    }

    /// Drops the id; callers reject requests carrying one beforehand.
    pub fn into_new_produit(self) -> NewProduit {
        NewProduit {
            description: self.description,
            nom: self.nom,
            prix: self.prix,
            ..Default::default()
        }
    }

    pub fn into_produit(self, id: Uuid) -> Produit {
        Produit {
            id,
            description: self.description,
            nom: self.nom,
            prix: self.prix,
        }
    }
}

impl From<&Produit> for ProduitRequest {
    fn from(produit: &Produit) -> Self {
        Self {
            id: Some(produit.id.to_string()),
            description: produit.description.clone(),
            nom: produit.nom.clone(),
            prix: produit.prix,
        }
    }
}

impl From<&NewProduit> for ProduitRequest {
    fn from(produit: &NewProduit) -> Self {
        Self {
            id: None,
            description: produit.description.clone(),
            nom: produit.nom.clone(),
            prix: produit.prix,
        }
    }
}
