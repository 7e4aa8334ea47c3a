//! Domain service behaviour over the in-memory store.

mod common;

use marriage_registry::contract::model::{ApplicationPatch, ApplicationSubmission};
use marriage_registry::domain::error::DomainError;
use marriage_registry::domain::repo::UsersRepository;
use marriage_registry::domain::validator::fields;

use common::{memory_service, registration};

fn submission(login: &str) -> ApplicationSubmission {
    ApplicationSubmission {
        husband_name: "Oleg Sidorov".to_string(),
        wife_name: "Elena Sidorova".to_string(),
        contact_number: "8 900 765 43 21".to_string(),
        login: login.to_string(),
        marriage_place: "Tver".to_string(),
    }
}

#[tokio::test]
async fn register_stores_user_with_application() {
    let (svc, repo) = memory_service();

    let user = svc.register(registration("bob", "x")).await.unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.visits, 0);

    let records = repo.store().records().await;
    assert_eq!(records.len(), 1);
    let app = records[0].application.as_ref().unwrap();
    assert_eq!(app.husband_name, "Ivan Petrov");
    assert_eq!(app.login, "bob");
    assert_eq!(records[0].password, "x");
}

#[tokio::test]
async fn register_trims_text_but_not_password() {
    let (svc, repo) = memory_service();
    let mut reg = registration("  bob ", " pass ");
    reg.wife_name = "  Anna  ".to_string();

    svc.register(reg).await.unwrap();

    let user = repo.find_by_login("bob").await.unwrap().unwrap();
    assert_eq!(user.password, " pass ");
    assert_eq!(user.application.unwrap().wife_name, "Anna");
}

#[tokio::test]
async fn duplicate_login_is_a_field_error() {
    let (svc, repo) = memory_service();
    svc.register(registration("bob", "x")).await.unwrap();

    let err = svc.register(registration("bob", "y")).await.unwrap_err();
    match err {
        DomainError::Validation { errors } => {
            assert_eq!(errors.len(), 1);
            assert!(errors.contains(fields::LOGIN));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(repo.store().records().await.len(), 1);
}

#[tokio::test]
async fn invalid_registration_writes_nothing() {
    let (svc, repo) = memory_service();
    let mut reg = registration("bob", "x");
    reg.contact_number = "call me".to_string();
    reg.husband_name = String::new();

    let err = svc.register(reg).await.unwrap_err();
    let DomainError::Validation { errors } = err else {
        panic!("expected validation error");
    };
    assert!(errors.contains(fields::CONTACT_NUMBER));
    assert!(errors.contains(fields::HUSBAND_NAME));
    assert_eq!(repo.store().save_count(), 0);
}

#[tokio::test]
async fn login_counts_each_visit() {
    let (svc, _repo) = memory_service();
    let user = svc.register(registration("bob", "x")).await.unwrap();

    let first = svc.login("bob", "x").await.unwrap();
    assert_eq!(first.id, user.id);
    assert_eq!(first.login, "bob");
    assert_eq!(first.visits, 1);

    let second = svc.login("bob", "x").await.unwrap();
    assert_eq!(second.visits, 2);
}

#[tokio::test]
async fn wrong_password_does_not_count_a_visit() {
    let (svc, repo) = memory_service();
    svc.register(registration("bob", "x")).await.unwrap();

    let err = svc.login("bob", "y").await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidCredentials));
    let err = svc.login("nobody", "x").await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidCredentials));

    let user = repo.find_by_login("bob").await.unwrap().unwrap();
    assert_eq!(user.visits, 0);
}

#[tokio::test]
async fn add_application_skips_login_uniqueness() {
    let (svc, repo) = memory_service();
    let user = svc.register(registration("bob", "x")).await.unwrap();

    svc.add_application(submission("bob")).await.unwrap();

    let app = repo.find_by_id(user.id).await.unwrap().unwrap().application.unwrap();
    assert_eq!(app.husband_name, "Oleg Sidorov");
    assert_eq!(app.marriage_place, "Tver");
}

#[tokio::test]
async fn add_application_for_unknown_login_fails_softly() {
    let (svc, _repo) = memory_service();
    let err = svc.add_application(submission("ghost")).await.unwrap_err();
    assert!(matches!(err, DomainError::UserNotFound { .. }));
    assert!(err.is_soft());
}

#[tokio::test]
async fn edit_application_merges_present_fields() {
    let (svc, _repo) = memory_service();
    let user = svc.register(registration("bob", "x")).await.unwrap();

    svc.edit_application(
        user.id,
        ApplicationPatch {
            contact_number: Some("+7 901 000 00 01".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let app = svc.get_application(user.id).await.unwrap();
    assert_eq!(app.contact_number, "+7 901 000 00 01");
    assert_eq!(app.husband_name, "Ivan Petrov");
}

#[tokio::test]
async fn edit_application_rejects_bad_fields() {
    let (svc, _repo) = memory_service();
    let user = svc.register(registration("bob", "x")).await.unwrap();

    let err = svc
        .edit_application(
            user.id,
            ApplicationPatch {
                wife_name: Some("   ".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    let DomainError::Validation { errors } = err else {
        panic!("expected validation error");
    };
    assert!(errors.contains(fields::WIFE_NAME));
}

#[tokio::test]
async fn edit_application_accepts_blank_marriage_place() {
    let (svc, _repo) = memory_service();
    let mut reg = registration("bob", "x");
    reg.marriage_place = String::new();
    let user = svc.register(reg).await.unwrap();

    // The edit form resends every field, including an empty marriage place.
    svc.edit_application(
        user.id,
        ApplicationPatch {
            husband_name: Some("Ivan Petrov".to_string()),
            wife_name: Some("Maria Petrova".to_string()),
            contact_number: Some("+7 901 000 00 02".to_string()),
            marriage_place: Some(String::new()),
        },
    )
    .await
    .unwrap();

    let app = svc.get_application(user.id).await.unwrap();
    assert_eq!(app.contact_number, "+7 901 000 00 02");
    assert_eq!(app.marriage_place, "");
}

#[tokio::test]
async fn edit_of_missing_application_leaves_store_alone() {
    let (svc, repo) = memory_service();
    svc.register(registration("bob", "x")).await.unwrap();
    let saves = repo.store().save_count();
    let before = repo.store().records().await;

    let err = svc
        .edit_application(
            99,
            ApplicationPatch {
                wife_name: Some("Maria".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::ApplicationNotFound { id: 99 }));
    assert_eq!(repo.store().save_count(), saves);
    assert_eq!(repo.store().records().await, before);
}

#[tokio::test]
async fn get_application_of_unknown_owner() {
    let (svc, _repo) = memory_service();
    let err = svc.get_application(5).await.unwrap_err();
    assert!(matches!(err, DomainError::ApplicationNotFound { id: 5 }));
}

#[tokio::test]
async fn local_client_maps_errors_to_contract() {
    use marriage_registry::contract::client::MarriageRegistryApi;
    use marriage_registry::contract::error::MarriageRegistryError;
    use marriage_registry::gateways::local::MarriageRegistryLocalClient;

    let (svc, _repo) = memory_service();
    let client = MarriageRegistryLocalClient::new(svc);

    let user = client.register(registration("bob", "x")).await.unwrap();
    let summary = client.login("bob", "x").await.unwrap();
    assert_eq!(summary.visits, 1);

    let err = client.login("bob", "nope").await.unwrap_err();
    assert_eq!(err, MarriageRegistryError::InvalidCredentials);

    let err = client
        .register(registration("bob", "x"))
        .await
        .unwrap_err();
    match err {
        MarriageRegistryError::Validation { errors } => {
            assert_eq!(errors.get("login").map(String::as_str), Some("This login is already taken"));
        }
        other => panic!("unexpected {other:?}"),
    }

    let app = client.get_application(user.id).await.unwrap();
    assert_eq!(app.login, "bob");
}
