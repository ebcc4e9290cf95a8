use employee_server::{AppError, Employee, EmployeeService};
use std::collections::HashSet;

mod common;

async fn sqlite_service() -> EmployeeService {
    EmployeeService::new(common::setup_test_backend().await.unwrap())
}

#[tokio::test]
async fn test_save_then_get_by_id_round_trips() {
    let service = sqlite_service().await;
    let employee = common::new_employee();

    let saved = service.save(&employee).await.unwrap();
    let fetched = service
        .get_employee_by_id(saved.id.unwrap())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(fetched, saved);
    assert_eq!(fetched.first_name, employee.first_name);
    assert_eq!(fetched.last_name, employee.last_name);
    assert_eq!(fetched.email, employee.email);
}

#[tokio::test]
async fn test_duplicate_email_scenario() {
    let service = sqlite_service().await;

    let saved = service
        .save(&Employee::new("Tom", "lin", "lin@gmail.com"))
        .await
        .unwrap();
    assert!(saved.id.unwrap() > 0);

    let err = service
        .save(&Employee::new("Tim", "lang", "lin@gmail.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::DuplicateResource(ref email) if email == "lin@gmail.com"));
    assert!(err.to_string().contains("lin@gmail.com"));
    assert_eq!(service.get_all_employees().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_get_all_returns_saved_set() {
    let service = sqlite_service().await;
    let employees = common::new_employees(5);

    for employee in &employees {
        service.save(employee).await.unwrap();
    }

    let all = service.get_all_employees().await.unwrap();
    let emails: HashSet<&str> = all.iter().map(|e| e.email.as_str()).collect();
    let expected: HashSet<&str> = employees.iter().map(|e| e.email.as_str()).collect();

    assert_eq!(all.len(), 5);
    assert_eq!(emails, expected);
}

#[tokio::test]
async fn test_get_all_on_empty_store_is_empty() {
    let service = sqlite_service().await;
    assert!(service.get_all_employees().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_employee_overwrites_fields() {
    let service = sqlite_service().await;
    let saved = service.save(&common::new_employee()).await.unwrap();

    let mut changed = saved.clone();
    changed.apply_update(&common::new_employee());
    let updated = service.update_employee(&changed).await.unwrap();

    assert_eq!(updated.id, saved.id);
    assert_eq!(updated.first_name, changed.first_name);
    assert_eq!(updated.last_name, changed.last_name);
    assert_eq!(updated.email, changed.email);
}

#[tokio::test]
async fn test_delete_then_get_is_none() {
    let service = sqlite_service().await;
    let saved = service.save(&common::new_employee()).await.unwrap();
    let id = saved.id.unwrap();

    service.delete_employee(id).await.unwrap();
    assert_eq!(service.get_employee_by_id(id).await.unwrap(), None);

    // Ids that never existed behave the same
    service.delete_employee(424242).await.unwrap();
    assert_eq!(service.get_employee_by_id(424242).await.unwrap(), None);
}

#[tokio::test]
async fn test_blank_fields_are_rejected_by_store() {
    let service = sqlite_service().await;

    let err = service
        .save(&Employee::new("", "lin", "blank@gmail.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::BadRequest(_)));
    assert!(service.get_all_employees().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_concurrent_saves_keep_email_unique() {
    let service = sqlite_service().await;
    let employee = Employee::new("Tom", "lin", "race@gmail.com");

    let mut handles = Vec::new();
    for _ in 0..8 {
        let service = service.clone();
        let employee = employee.clone();
        handles.push(tokio::spawn(async move { service.save(&employee).await }));
    }

    let mut created = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => created += 1,
            Err(AppError::DuplicateResource(_)) => {}
            Err(other) => panic!("unexpected error: {}", other),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(service.get_all_employees().await.unwrap().len(), 1);
}
