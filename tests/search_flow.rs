//! End-to-end search flow over the public API, without a terminal

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use emsearch::tui::app::{App, ResultsView};
use emsearch::tui::form::FormField;
use emsearch::{builtin_records, InMemoryDirectory};

fn type_into(app: &mut App, field: FormField, text: &str) {
    app.form.focused_field = field;
    for c in text.chars() {
        app.form.insert_char(c);
    }
}

/// Pump messages until the search settles or the deadline passes
fn wait_until_settled(app: &mut App) {
    let deadline = Instant::now() + Duration::from_secs(2);
    while matches!(app.view, ResultsView::Loading) {
        app.process_messages();
        if Instant::now() > deadline {
            panic!("search never settled");
        }
        thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn search_then_clear_runs_the_full_cycle() {
    let directory = Arc::new(
        InMemoryDirectory::new(builtin_records()).with_latency(Duration::from_millis(50)),
    );
    let mut app = App::new(directory);

    type_into(&mut app, FormField::EmployeeNumber, "DC0001");
    app.submit();
    assert!(matches!(app.view, ResultsView::Loading));

    wait_until_settled(&mut app);
    match &app.view {
        ResultsView::Results(results) => {
            assert_eq!(results.len(), 1);
            assert_eq!(results[0].name, "山田 太郎");
            assert_eq!(results[0].department, "人事部");
        }
        other => panic!("unexpected view: {other:?}"),
    }

    app.clear();
    assert_eq!(app.view, ResultsView::Idle);
    assert!(app.form.employee_number.is_empty());
    assert!(app.form.name.is_empty());
}

#[test]
fn case_insensitive_prefix_returns_the_whole_store_in_order() {
    let directory =
        Arc::new(InMemoryDirectory::new(builtin_records()).with_latency(Duration::ZERO));
    let mut app = App::new(directory);

    type_into(&mut app, FormField::EmployeeNumber, "dc");
    app.submit();
    wait_until_settled(&mut app);

    match &app.view {
        ResultsView::Results(results) => {
            let numbers: Vec<&str> =
                results.iter().map(|e| e.employee_number.as_str()).collect();
            assert_eq!(numbers, ["DC0001", "DC0002", "DC0003", "DC0004", "DC0005"]);
        }
        other => panic!("unexpected view: {other:?}"),
    }
}

#[test]
fn department_text_as_a_name_lands_in_the_empty_view() {
    let directory =
        Arc::new(InMemoryDirectory::new(builtin_records()).with_latency(Duration::ZERO));
    let mut app = App::new(directory);

    type_into(&mut app, FormField::Name, "人事部");
    app.submit();
    wait_until_settled(&mut app);
    assert_eq!(app.view, ResultsView::Empty);
}

#[test]
fn empty_submission_errors_before_any_latency_is_paid() {
    // With a latency this large, reaching the directory would hang the test
    let directory = Arc::new(
        InMemoryDirectory::new(builtin_records()).with_latency(Duration::from_secs(30)),
    );
    let mut app = App::new(directory);

    app.submit();
    match &app.view {
        ResultsView::Error(message) => {
            assert!(message.contains("employee number or a name"));
        }
        other => panic!("unexpected view: {other:?}"),
    }
}
