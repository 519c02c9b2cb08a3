// Integration tests for the session provider

use persona_core::{BasePerson, Customer, Employee, ExErrorKind, Person};
use persona_store::repo::PersonRepo;
use persona_store::{DatabaseLocation, SessionFactory, StoreConfig};
use rust_decimal::Decimal;
use std::str::FromStr;
use tempfile::TempDir;

fn seed(factory: &SessionFactory) {
    factory
        .with_session(|session| {
            let map = session.discriminators().clone();
            let conn = session.connection();
            PersonRepo::insert(
                conn,
                &Customer::new("Maria")
                    .with_monthly_income(Decimal::from_str("3200.50").unwrap())
                    .into(),
                &map,
            )?;
            PersonRepo::insert(
                conn,
                &Employee::new("Ana")
                    .with_job_title("Engineer")
                    .with_salary(Decimal::from_str("5000.00").unwrap())
                    .into(),
                &map,
            )?;
            PersonRepo::insert(conn, &BasePerson::new("Joao").into(), &map)?;
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_in_memory_data_survives_between_sessions() {
    // Given: Rows written in one session
    let factory = SessionFactory::in_memory();
    seed(&factory);

    // When: A new session loads customers
    let customers = factory
        .with_session(|session| session.load_all::<Customer>())
        .unwrap();

    // Then: The rows written earlier are visible
    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0].name, "Maria");
}

#[test]
fn test_typed_queries() {
    let factory = SessionFactory::in_memory();
    seed(&factory);

    factory
        .with_session(|session| {
            let employees = session
                .create_query::<Employee>("from Employee")?
                .result_list()?;
            assert_eq!(employees.len(), 1);
            assert_eq!(employees[0].job_title.as_deref(), Some("Engineer"));

            let people = session.create_query::<Person>("from Person")?.result_list()?;
            assert_eq!(people.len(), 3);

            let employees_as_people = session
                .create_query::<Person>("from Employee")?
                .result_list()?;
            assert_eq!(employees_as_people.len(), 1);
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_query_type_mismatch_and_malformed_queries() {
    let factory = SessionFactory::in_memory();
    let session = factory.open_session().unwrap();

    let err = session.create_query::<Customer>("from Person").err().unwrap();
    assert_eq!(err.kind(), ExErrorKind::Query);

    let err = session.create_query::<Person>("select p from Person p").err().unwrap();
    assert_eq!(err.kind(), ExErrorKind::Query);

    session.close().unwrap();
}

#[test]
fn test_entities_remain_readable_after_close() {
    let factory = SessionFactory::in_memory();
    seed(&factory);

    let session = factory.open_session().unwrap();
    let people = session.load_all::<Person>().unwrap();
    session.close().unwrap();

    assert_eq!(people[0].name(), "Maria");
}

#[test]
fn test_find_by_id_narrows_type() {
    let factory = SessionFactory::in_memory();
    seed(&factory);

    factory
        .with_session(|session| {
            let first_id = session.load_all::<Person>()?[0].id().unwrap();
            assert!(session.find::<Customer>(first_id)?.is_some());
            assert!(session.find::<Employee>(first_id)?.is_none());
            assert!(session.find::<Person>(9999)?.is_none());
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_empty_table_loads_nothing() {
    let factory = SessionFactory::in_memory();
    let people = factory
        .with_session(|session| session.load_all::<Person>())
        .unwrap();
    assert!(people.is_empty());
}

#[test]
fn test_shutdown_is_idempotent_and_blocks_new_sessions() {
    let factory = SessionFactory::in_memory();
    assert!(factory.is_open());

    factory.shutdown();
    factory.shutdown();

    assert!(!factory.is_open());
    let err = factory.open_session().err().unwrap();
    assert_eq!(err.kind(), ExErrorKind::SessionClosed);
}

#[test]
fn test_unreachable_database_is_connection_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("no-such-dir").join("people.db");
    let factory = SessionFactory::new(StoreConfig::new(DatabaseLocation::File(missing)));

    let err = factory.open_session().err().unwrap();
    assert_eq!(err.kind(), ExErrorKind::Connection);
}

#[test]
fn test_missing_file_is_connection_error_and_not_created() {
    // Given: An existing directory without the database file
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("peple.db");
    let factory = SessionFactory::new(StoreConfig::new(DatabaseLocation::File(missing.clone())));

    // When: A session is opened for reading
    let err = factory.open_session().err().unwrap();

    // Then: It fails and leaves nothing behind
    assert_eq!(err.kind(), ExErrorKind::Connection);
    assert!(!missing.exists());
}

#[test]
fn test_create_if_missing_creates_and_migrates() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("people.db");
    let config = StoreConfig::new(DatabaseLocation::File(path.clone())).with_create_if_missing(true);

    let people = SessionFactory::new(config)
        .with_session(|session| session.load_all::<Person>())
        .unwrap();

    assert!(people.is_empty());
    assert!(path.exists());
}

#[test]
fn test_not_a_database_is_connection_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("people.db");
    std::fs::write(&path, "not a sqlite database\n".repeat(200)).unwrap();
    let factory = SessionFactory::new(StoreConfig::new(DatabaseLocation::File(path)));

    let err = factory.open_session().err().unwrap();
    assert_eq!(err.kind(), ExErrorKind::Connection);
}

#[test]
fn test_with_session_returns_closure_error() {
    let factory = SessionFactory::in_memory();
    let result: persona_store::Result<()> = factory.with_session(|session| {
        session.create_query::<Person>("from Supplier")?;
        Ok(())
    });

    assert_eq!(result.unwrap_err().kind(), ExErrorKind::Query);
    // The factory is still usable afterwards
    assert!(factory.open_session().is_ok());
}

#[test]
fn test_file_database_persists_across_factories() {
    let temp_dir = TempDir::new().unwrap();
    let location = DatabaseLocation::File(temp_dir.path().join("people.db"));

    let first =
        SessionFactory::new(StoreConfig::new(location.clone()).with_create_if_missing(true));
    seed(&first);
    first.shutdown();

    let second = SessionFactory::new(StoreConfig::new(location));
    let employees = second
        .with_session(|session| session.load_all::<Employee>())
        .unwrap();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].salary.unwrap().to_string(), "5000.00");
}
