//! Tests for CommandDispatcher end to end against a real data file

use std::path::PathBuf;
use std::sync::Arc;

use rstest::rstest;
use rust_decimal_macros::dec;
use tempfile::TempDir;

use empman::application::services::{CommandDispatcher, CommandOutcome, EmployeeStore, LoadStatus};
use empman::application::ApplicationError;
use empman::config::Settings;
use empman::domain::{DomainError, Employee};
use empman::infrastructure::di::ServiceContainer;
use empman::infrastructure::traits::RealFileSystem;
use empman::util::testing;

fn dispatcher(dir: &TempDir) -> CommandDispatcher {
    testing::init_test_setup();
    CommandDispatcher::new(dir.path().join("Employees.json"), Arc::new(RealFileSystem))
}

#[test]
fn given_added_john_when_getting_id_1_then_returns_record() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let mut dispatcher = dispatcher(&temp);
    dispatcher
        .execute(&["add", "FirstName:John", "LastName:Doe", "Salary:100.50"])
        .unwrap();

    // Act
    let outcome = dispatcher.execute(&["get", "Id:1"]).unwrap();

    // Assert
    assert_eq!(
        outcome,
        CommandOutcome::Found(Employee::new(1, "John", "Doe", dec!(100.50)))
    );
}

#[test]
fn given_two_adds_when_listing_then_both_in_insertion_order() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let mut dispatcher = dispatcher(&temp);
    dispatcher
        .execute(&["add", "FirstName:John LastName:Doe Salary:100.50"])
        .unwrap();
    dispatcher
        .execute(&["add", "FirstName:Jane LastName:Smith Salary:120.75"])
        .unwrap();

    // Act
    let outcome = dispatcher.execute(&["list"]).unwrap();

    // Assert
    assert_eq!(
        outcome,
        CommandOutcome::Listed(vec![
            Employee::new(1, "John", "Doe", dec!(100.50)),
            Employee::new(2, "Jane", "Smith", dec!(120.75)),
        ])
    );
}

#[test]
fn given_empty_store_when_deleting_id_1_then_not_found() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let mut dispatcher = dispatcher(&temp);

    // Act
    let result = dispatcher.execute(&["delete", "Id:1"]);

    // Assert
    assert!(matches!(result, Err(ApplicationError::RecordNotFound(1))));
    assert!(dispatcher.store().list().is_empty());
}

#[test]
fn given_update_with_one_name_when_executing_then_other_fields_kept() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let mut dispatcher = dispatcher(&temp);
    dispatcher
        .execute(&["add", "FirstName:John", "LastName:Doe", "Salary:100.50"])
        .unwrap();

    // Act
    let outcome = dispatcher
        .execute(&["update", "FirstName:Johnny", "Id:1"])
        .unwrap();

    // Assert
    assert_eq!(
        outcome,
        CommandOutcome::Updated(Employee::new(1, "Johnny", "Doe", dec!(100.50)))
    );
}

#[test]
fn given_dash_prefixed_commands_when_executing_then_dispatch_same_as_plain() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let mut dispatcher = dispatcher(&temp);

    // Act
    dispatcher
        .execute(&["-add", "FirstName:John LastName:Doe Salary:100.50"])
        .unwrap();
    dispatcher.execute(&["-update", "Id:1", "Salary:99"]).unwrap();
    let found = dispatcher.execute(&["-get", "Id:1"]).unwrap();
    let deleted = dispatcher.execute(&["-delete", "Id:1"]).unwrap();
    let listed = dispatcher.execute(&["-getall"]).unwrap();

    // Assert
    assert_eq!(
        found,
        CommandOutcome::Found(Employee::new(1, "John", "Doe", dec!(99)))
    );
    assert!(matches!(deleted, CommandOutcome::Deleted(e) if e.id == 1));
    assert_eq!(listed, CommandOutcome::Listed(vec![]));
}

#[test]
fn given_no_tokens_when_executing_then_no_arguments() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let mut dispatcher = dispatcher(&temp);
    let tokens: Vec<String> = Vec::new();

    // Act
    let result = dispatcher.execute(&tokens);

    // Assert
    assert!(matches!(
        result,
        Err(ApplicationError::Domain(DomainError::NoArguments))
    ));
}

#[rstest]
#[case(&["add", "FirstName:John", "LastName:Doe", "Salary:ten"], "add")]
#[case(&["update", "Salary:10"], "update")]
#[case(&["get", "Id:x"], "get")]
#[case(&["delete"], "delete")]
fn given_invalid_arguments_when_executing_then_nothing_written(
    #[case] tokens: &[&str],
    #[case] command: &str,
) {
    // Arrange
    let temp = TempDir::new().unwrap();
    let mut dispatcher = dispatcher(&temp);

    // Act
    let err = dispatcher.execute(tokens).unwrap_err();

    // Assert
    assert!(
        err.to_string()
            .starts_with(&format!("invalid arguments for {command}")),
        "unexpected message: {err}"
    );
    assert!(!temp.path().join("Employees.json").exists());
}

#[test]
fn given_existing_file_when_dispatcher_created_then_loads_eagerly() {
    // Arrange
    let temp = TempDir::new().unwrap();
    {
        let mut first = dispatcher(&temp);
        first
            .execute(&["add", "FirstName:John", "LastName:Doe", "Salary:100.50"])
            .unwrap();
    }

    // Act
    let second = dispatcher(&temp);

    // Assert
    assert_eq!(second.store().load_status(), &LoadStatus::Loaded(1));
}

#[test]
fn given_container_with_settings_when_dispatching_then_uses_configured_file() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let data_file: PathBuf = temp.path().join("nested").join("staff.json");
    let settings = Settings::default().with_data_file(&data_file);
    let container = ServiceContainer::new(settings);

    // Act
    let mut dispatcher = container.dispatcher().unwrap();
    dispatcher
        .execute(&["add", "FirstName:Jane", "LastName:Smith", "Salary:120.75"])
        .unwrap();

    // Assert
    assert_eq!(container.data_file().unwrap(), data_file);
    assert!(data_file.is_file());
}
