use produit::{
    abstract_trait::produit::{
        repository::ProduitCommandRepositoryTrait,
        service::{ProduitCommandServiceTrait, ProduitQueryServiceTrait},
    },
    model::{NewProduit, Produit},
    repository::InMemoryProduitRepository,
    service::{ProduitCommandService, ProduitQueryService},
    test_samples::{
        SAMPLE_WITH_FULL_DATA, produit_random_sample, produit_sample_1, produit_sample_2,
    },
};
use prometheus_client::{encoding::text::encode, registry::Registry};
use shared::{domain::requests::Pageable, errors::{RepositoryError, ServiceError}};
use std::sync::Arc;
use uuid::Uuid;

struct Services {
    repo: InMemoryProduitRepository,
    command: ProduitCommandService,
    query: ProduitQueryService,
    registry: Registry,
}

fn services() -> Services {
    let repo = InMemoryProduitRepository::new();
    let mut registry = Registry::default();

    let command = ProduitCommandService::new(
        Arc::new(repo.clone()),
        Arc::new(repo.clone()),
        &mut registry,
    );
    let query = ProduitQueryService::new(Arc::new(repo.clone()), &mut registry);

    Services {
        repo,
        command,
        query,
        registry,
    }
}

#[tokio::test]
async fn save_assigns_a_fresh_id() {
    let s = services();

    let first = s
        .command
        .save(NewProduit {
            nom: Some("nom1".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    let second = s.command.save(NewProduit::default()).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(first.id.get_version_num(), 4);
    assert_eq!(s.query.count_all().await.unwrap(), 2);
    assert_eq!(s.query.find_one(first.id).await.unwrap(), Some(first));
}

#[tokio::test]
async fn update_overwrites_every_field() {
    let s = services();
    s.repo.insert(&SAMPLE_WITH_FULL_DATA).await.unwrap();

    let replacement = Produit {
        id: SAMPLE_WITH_FULL_DATA.id,
        description: None,
        nom: Some("autre".into()),
        prix: None,
    };
    s.command.update(replacement.clone()).await.unwrap();

    let stored = s.query.find_one(replacement.id).await.unwrap().unwrap();
    assert_eq!(stored, replacement);
}

#[tokio::test]
async fn partial_update_keeps_fields_left_null() {
    let s = services();
    s.repo.insert(&SAMPLE_WITH_FULL_DATA).await.unwrap();

    let patch = Produit {
        id: SAMPLE_WITH_FULL_DATA.id,
        description: None,
        nom: None,
        prix: Some(1.0),
    };
    let merged = s.command.partial_update(patch).await.unwrap().unwrap();

    assert_eq!(merged.prix, Some(1.0));
    assert_eq!(merged.nom, SAMPLE_WITH_FULL_DATA.nom);
    assert_eq!(merged.description, SAMPLE_WITH_FULL_DATA.description);
}

#[tokio::test]
async fn update_of_unknown_id_is_not_found() {
    let s = services();

    let err = s.command.update(produit_random_sample()).await.unwrap_err();

    assert!(matches!(err, ServiceError::Repo(RepositoryError::NotFound)));
    assert_eq!(s.query.count_all().await.unwrap(), 0);
}

#[tokio::test]
async fn update_after_delete_is_not_found() {
    let s = services();
    let produit = produit_random_sample();
    s.repo.insert(&produit).await.unwrap();
    s.command.delete(produit.id).await.unwrap();

    let err = s.command.update(produit).await.unwrap_err();

    assert!(matches!(err, ServiceError::Repo(RepositoryError::NotFound)));
}

#[tokio::test]
async fn partial_update_of_unknown_id_returns_none() {
    let s = services();

    let patch = Produit {
        id: Uuid::new_v4(),
        description: None,
        nom: Some("x".into()),
        prix: None,
    };

    assert_eq!(s.command.partial_update(patch).await.unwrap(), None);
    assert_eq!(s.query.count_all().await.unwrap(), 0);
}

#[tokio::test]
async fn delete_removes_the_produit() {
    let s = services();
    s.repo.insert(&produit_sample_1()).await.unwrap();
    s.repo.insert(&produit_sample_2()).await.unwrap();

    s.command.delete(produit_sample_1().id).await.unwrap();

    assert!(!s.query.exists(produit_sample_1().id).await.unwrap());
    assert!(s.query.exists(produit_sample_2().id).await.unwrap());
}

#[tokio::test]
async fn find_all_rejects_unknown_sort_property() {
    let s = services();

    let err = s
        .query
        .find_all(&Pageable::default().with_sort("prixx,asc"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Repo(RepositoryError::InvalidSort(ref p)) if p == "prixx"
    ));
}

#[tokio::test]
async fn operations_are_counted_in_the_registry() {
    let s = services();
    s.command.save(NewProduit::default()).await.unwrap();
    s.query.find_all(&Pageable::default()).await.unwrap();

    let mut buffer = String::new();
    encode(&mut buffer, &s.registry).unwrap();

    assert!(buffer.contains("produit_command_requests_total"));
    assert!(buffer.contains("produit_query_requests_total"));
}
