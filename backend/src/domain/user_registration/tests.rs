//! Tests for the user registration engine.

use std::sync::Arc;

use mockall::Sequence;
use rstest::rstest;

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::MockUserRepository;

fn make_service(repo: MockUserRepository) -> UserRegistrationService<MockUserRepository> {
    UserRegistrationService::new(Arc::new(repo))
}

fn stored(name: &str, email: &str, age: i32) -> User {
    NewUser::try_from(UserCandidate::new(name, email, age))
        .expect("valid fixture user")
        .into_user(UserId::random())
}

fn assign_ids(users: Vec<NewUser>) -> Vec<User> {
    users
        .into_iter()
        .map(|user| user.into_user(UserId::random()))
        .collect()
}

fn emails(users: &[User]) -> Vec<&str> {
    users.iter().map(|user| user.email.as_str()).collect()
}

fn expect_lookup(repo: &mut MockUserRepository, seq: &mut Sequence, email: &'static str, hit: Option<User>) {
    repo.expect_find_by_email()
        .withf(move |candidate| candidate == email)
        .times(1)
        .in_sequence(seq)
        .return_once(move |_| Ok(hit));
}

#[tokio::test]
async fn batch_of_novel_emails_is_inserted_in_one_call() {
    let mut repo = MockUserRepository::new();
    let mut seq = Sequence::new();
    expect_lookup(&mut repo, &mut seq, "a@x.com", None);
    expect_lookup(&mut repo, &mut seq, "b@x.com", None);
    repo.expect_insert_many()
        .withf(|users| users.len() == 2)
        .times(1)
        .in_sequence(&mut seq)
        .returning(|users| Ok(assign_ids(users)));

    let outcome = make_service(repo)
        .create(Submission::Batch(vec![
            UserCandidate::new("A", "a@x.com", 30),
            UserCandidate::new("B", "b@x.com", 25),
        ]))
        .await
        .expect("batch succeeds");

    assert!(matches!(outcome, UserCreation::Created { .. }));
    assert_eq!(emails(outcome.inserted()), vec!["a@x.com", "b@x.com"]);
    assert!(outcome.rejected().is_empty());
}

#[tokio::test]
async fn duplicates_are_reported_while_novel_candidates_are_persisted() {
    let mut repo = MockUserRepository::new();
    let mut seq = Sequence::new();
    expect_lookup(&mut repo, &mut seq, "taken@x.com", Some(stored("Old", "taken@x.com", 40)));
    expect_lookup(&mut repo, &mut seq, "new@x.com", None);
    repo.expect_insert_many()
        .withf(|users| users.len() == 1 && users[0].email() == "new@x.com")
        .times(1)
        .in_sequence(&mut seq)
        .returning(|users| Ok(assign_ids(users)));

    let outcome = make_service(repo)
        .create(Submission::Batch(vec![
            UserCandidate::new("Dup", "taken@x.com", 30),
            UserCandidate::new("New", "new@x.com", 25),
        ]))
        .await
        .expect("partial conflict is not an error");

    assert_eq!(outcome.rejected(), ["taken@x.com".to_owned()]);
    assert_eq!(emails(outcome.inserted()), vec!["new@x.com"]);
}

#[tokio::test]
async fn batch_of_only_duplicates_skips_the_insert() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email()
        .times(2)
        .returning(|email| Ok(Some(stored("Old", email, 40))));

    let outcome = make_service(repo)
        .create(Submission::Batch(vec![
            UserCandidate::new("A", "a@x.com", 30),
            UserCandidate::new("A again", "a@x.com", 31),
        ]))
        .await
        .expect("partial conflict is not an error");

    assert!(outcome.inserted().is_empty());
    assert_eq!(outcome.rejected(), ["a@x.com".to_owned(), "a@x.com".to_owned()]);
}

#[tokio::test]
async fn same_batch_duplicates_are_not_detected() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email().times(2).returning(|_| Ok(None));
    repo.expect_insert_many()
        .withf(|users| users.len() == 2)
        .times(1)
        .returning(|users| Ok(assign_ids(users)));

    let outcome = make_service(repo)
        .create(Submission::Batch(vec![
            UserCandidate::new("A", "a@x.com", 30),
            UserCandidate::new("B", "a@x.com", 25),
        ]))
        .await
        .expect("batch succeeds");

    assert!(matches!(outcome, UserCreation::Created { .. }));
    assert_eq!(emails(outcome.inserted()), vec!["a@x.com", "a@x.com"]);
}

#[rstest]
#[case(UserCandidate { name: None, ..UserCandidate::new("", "b@x.com", 25) }, "name")]
#[case(UserCandidate::new("B", "", 25), "email")]
#[case(UserCandidate::new("B", "b@x.com", 0), "age")]
#[tokio::test]
async fn incomplete_candidate_aborts_whole_batch(
    #[case] incomplete: UserCandidate,
    #[case] field: &str,
) {
    let mut repo = MockUserRepository::new();
    // The first candidate is looked up before the second one is validated.
    repo.expect_find_by_email().times(1).returning(|_| Ok(None));

    let err = make_service(repo)
        .create(Submission::Batch(vec![
            UserCandidate::new("A", "a@x.com", 30),
            incomplete,
        ]))
        .await
        .expect_err("batch is rejected");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(err.message(), MISSING_USER_FIELDS);
    let details = err.details().expect("details present");
    assert_eq!(details["index"], 1);
    assert_eq!(details["fields"], serde_json::json!([field]));
}

#[tokio::test]
async fn lookup_failure_stops_the_batch_before_inserting() {
    let mut repo = MockUserRepository::new();
    let mut seq = Sequence::new();
    expect_lookup(&mut repo, &mut seq, "a@x.com", None);
    repo.expect_find_by_email()
        .times(1)
        .in_sequence(&mut seq)
        .return_once(|_| Err(UserPersistenceError::connection("pool exhausted")));

    let err = make_service(repo)
        .create(Submission::Batch(vec![
            UserCandidate::new("A", "a@x.com", 30),
            UserCandidate::new("B", "b@x.com", 25),
            UserCandidate::new("C", "c@x.com", 20),
        ]))
        .await
        .expect_err("store failure propagates");

    assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
    assert!(err.message().contains("pool exhausted"));
}

#[tokio::test]
async fn bulk_insert_failure_is_an_internal_error() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email().returning(|_| Ok(None));
    repo.expect_insert_many()
        .times(1)
        .return_once(|_| Err(UserPersistenceError::query("constraint violated")));

    let err = make_service(repo)
        .create(Submission::Batch(vec![UserCandidate::new("A", "a@x.com", 30)]))
        .await
        .expect_err("insert failure propagates");

    assert_eq!(err.code(), ErrorCode::InternalError);
}

#[tokio::test]
async fn empty_batch_touches_nothing() {
    let outcome = make_service(MockUserRepository::new())
        .create(Submission::Batch(Vec::new()))
        .await
        .expect("empty batch succeeds");

    assert_eq!(outcome, UserCreation::Created { inserted: Vec::new() });
}

#[tokio::test]
async fn single_novel_candidate_is_saved_individually() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email().times(1).returning(|_| Ok(None));
    repo.expect_insert_one()
        .times(1)
        .returning(|user| Ok(user.into_user(UserId::random())));

    let outcome = make_service(repo)
        .create(Submission::Single(UserCandidate::new("A", "a@x.com", 30)))
        .await
        .expect("single create succeeds");

    assert_eq!(emails(outcome.inserted()), vec!["a@x.com"]);
}

#[tokio::test]
async fn single_duplicate_is_a_conflict_and_writes_nothing() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email()
        .times(1)
        .returning(|email| Ok(Some(stored("Old", email, 40))));

    let err = make_service(repo)
        .create(Submission::Single(UserCandidate::new("A", "a@x.com", 30)))
        .await
        .expect_err("duplicate is rejected");

    assert_eq!(err.code(), ErrorCode::Conflict);
    assert_eq!(err.message(), DUPLICATE_EMAIL);
}

#[tokio::test]
async fn single_incomplete_candidate_is_rejected_without_lookup() {
    let err = make_service(MockUserRepository::new())
        .create(Submission::Single(UserCandidate::default()))
        .await
        .expect_err("incomplete candidate is rejected");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(err.details().and_then(|d| d.get("index")), Some(&serde_json::Value::Null));
}

#[tokio::test]
async fn empty_patch_is_a_no_op() {
    make_service(MockUserRepository::new())
        .update(&UserId::random(), UserPatch::default())
        .await
        .expect("empty patch succeeds");
}

#[tokio::test]
async fn patch_is_forwarded_to_the_store() {
    let id = UserId::random();
    let mut repo = MockUserRepository::new();
    repo.expect_update()
        .withf(move |target, patch| *target == id && patch.age == Some(31.0))
        .times(1)
        .returning(|_, _| Ok(()));

    make_service(repo)
        .update(
            &id,
            UserPatch {
                age: Some(31.0),
                ..UserPatch::default()
            },
        )
        .await
        .expect("update succeeds");
}

#[rstest]
#[case(UserPersistenceError::connection("refused"), ErrorCode::ServiceUnavailable)]
#[case(UserPersistenceError::query("syntax"), ErrorCode::InternalError)]
#[tokio::test]
async fn list_maps_persistence_failures(
    #[case] failure: UserPersistenceError,
    #[case] expected: ErrorCode,
) {
    let mut repo = MockUserRepository::new();
    repo.expect_list().times(1).return_once(move || Err(failure));

    let err = make_service(repo)
        .list_users()
        .await
        .expect_err("failure propagates");

    assert_eq!(err.code(), expected);
}
