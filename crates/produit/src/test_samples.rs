//! Fixed produit values for tests.
//!
//! The four `SAMPLE_*` statics are shared, read-only values: take a clone
//! before modifying one.

use crate::model::{NewProduit, Produit, UnassignedId};
use std::sync::LazyLock;
use uuid::Uuid;

pub static SAMPLE_WITH_REQUIRED_DATA: Produit = Produit {
    id: Uuid::from_u128(0xf264b07e_306c_44d8_bffe_de849700f7c7),
    description: None,
    nom: None,
    prix: None,
};

pub static SAMPLE_WITH_PARTIAL_DATA: LazyLock<Produit> = LazyLock::new(|| Produit {
    id: Uuid::from_u128(0x9e7ed229_3306_4467_9c95_829a2ec260cc),
    description: None,
    nom: Some("prout".to_string()),
    prix: None,
});

pub static SAMPLE_WITH_FULL_DATA: LazyLock<Produit> = LazyLock::new(|| Produit {
    id: Uuid::from_u128(0xfda21762_44e8_494b_87d9_c2da54108c24),
    description: Some("si".to_string()),
    nom: Some("glouglou à l'insu de ha ha".to_string()),
    prix: Some(22786.1),
});

pub static SAMPLE_WITH_NEW_DATA: NewProduit = NewProduit {
    id: UnassignedId,
    description: None,
    nom: None,
    prix: None,
};

pub fn produit_sample_1() -> Produit {
    Produit {
        id: Uuid::from_u128(0x00000000_0000_4000_8000_000000000001),
        description: Some("description1".to_string()),
        nom: Some("nom1".to_string()),
        prix: None,
    }
}

pub fn produit_sample_2() -> Produit {
    Produit {
        id: Uuid::from_u128(0x00000000_0000_4000_8000_000000000002),
        description: Some("description2".to_string()),
        nom: Some("nom2".to_string()),
        prix: None,
    }
}

pub fn produit_random_sample() -> Produit {
    Produit {
        id: Uuid::new_v4(),
        description: Some(Uuid::new_v4().to_string()),
        nom: Some(Uuid::new_v4().to_string()),
        prix: None,
    }
}
