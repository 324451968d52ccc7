use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _, de::IgnoredAny};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A persisted produit. `id` is assigned by the service on creation and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Produit {
    pub id: Uuid,
    #[schema(example = "si")]
    pub description: Option<String>,
    #[schema(example = "glouglou à l'insu de ha ha")]
    pub nom: Option<String>,
    #[schema(example = 22786.1)]
    pub prix: Option<f64>,
}

/// Id marker of a produit that has not been persisted yet.
///
/// Serializes as `null`; deserializing anything but `null` (or a missing
/// field) is an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct UnassignedId;

impl Serialize for UnassignedId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_none()
    }
}

impl<'de> Deserialize<'de> for UnassignedId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<IgnoredAny>::deserialize(deserializer)? {
            None => Ok(UnassignedId),
            Some(_) => Err(D::Error::custom("a new produit cannot already have an id")),
        }
    }
}

/// A produit built client-side, before persistence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewProduit {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub id: UnassignedId,
    pub description: Option<String>,
    pub nom: Option<String>,
    pub prix: Option<f64>,
}

impl NewProduit {
    /// Turns the new produit into the persisted one once storage has assigned `id`.
    pub fn into_persisted(self, id: Uuid) -> Produit {
        Produit {
            id,
            description: self.description,
            nom: self.nom,
            prix: self.prix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_produit_serializes_id_as_null() {
        let value = serde_json::to_value(NewProduit::default()).unwrap();
        assert_eq!(
            value,
            json!({ "id": null, "description": null, "nom": null, "prix": null })
        );
    }

    #[test]
    fn new_produit_accepts_null_or_missing_id() {
        let from_null: NewProduit = serde_json::from_value(json!({ "id": null, "nom": "a" })).unwrap();
        let from_missing: NewProduit = serde_json::from_value(json!({ "nom": "a" })).unwrap();
        assert_eq!(from_null, from_missing);
    }

    #[test]
    fn new_produit_rejects_assigned_id() {
        let err = serde_json::from_value::<NewProduit>(
            json!({ "id": "f264b07e-306c-44d8-bffe-de849700f7c7" }),
        )
        .unwrap_err();
        assert!(err.to_string().contains("cannot already have an id"));
    }

    #[test]
    fn produit_requires_id() {
        assert!(serde_json::from_value::<Produit>(json!({ "nom": "a" })).is_err());
        assert!(serde_json::from_value::<Produit>(json!({ "id": null })).is_err());
    }

    #[test]
    fn optional_fields_accept_absent_and_null() {
        let produit: Produit = serde_json::from_value(json!({
            "id": "9e7ed229-3306-4467-9c95-829a2ec260cc",
            "description": null,
        }))
        .unwrap();

        assert_eq!(produit.description, None);
        assert_eq!(produit.nom, None);
        assert_eq!(produit.prix, None);
    }

    #[test]
    fn into_persisted_keeps_fields() {
        let id = Uuid::new_v4();
        let produit = NewProduit {
            nom: Some("prout".into()),
            prix: Some(1.5),
            ..Default::default()
        }
        .into_persisted(id);

        assert_eq!(produit.id, id);
        assert_eq!(produit.nom.as_deref(), Some("prout"));
        assert_eq!(produit.prix, Some(1.5));
        assert_eq!(produit.description, None);
    }
}
