use super::*;
use crate::state::project::ProjectStatus;

fn input(title: &str, description: &str, people: &str) -> ProjectInput {
    ProjectInput {
        title: title.to_owned(),
        description: description.to_owned(),
        people: people.to_owned(),
    }
}

// =============================================================
// Validatable
// =============================================================

#[test]
fn required_text_rejects_blank() {
    assert!(!Validatable::text("").required().is_valid());
    assert!(!Validatable::text("   \t").required().is_valid());
    assert!(Validatable::text(" x ").required().is_valid());
}

#[test]
fn optional_text_accepts_blank() {
    assert!(Validatable::text("").is_valid());
}

#[test]
fn length_bounds_are_inclusive() {
    let rule = |s: &str| Validatable::text(s).length(8, 99).is_valid();
    assert!(!rule("1234567"));
    assert!(rule("12345678"));
    assert!(rule(&"x".repeat(99)));
    assert!(!rule(&"x".repeat(100)));
}

#[test]
fn length_counts_characters_not_bytes() {
    // Eight characters, sixteen bytes.
    assert!(Validatable::text("éééééééé").length(8, 8).is_valid());
}

#[test]
fn range_bounds_are_inclusive() {
    let rule = |n| Validatable::number(n).required().range(1, 5).is_valid();
    assert!(!rule(0));
    assert!(rule(1));
    assert!(rule(5));
    assert!(!rule(6));
}

#[test]
fn length_rules_ignore_numbers() {
    assert!(Validatable::number(42).length(8, 99).is_valid());
}

#[test]
fn range_rules_ignore_text() {
    assert!(Validatable::text("hello").range(1, 5).is_valid());
}

// =============================================================
// gather
// =============================================================

#[test]
fn gather_accepts_valid_input() {
    let project = input("Website", "Build a site", "3").gather().unwrap();
    assert_eq!(
        project,
        NewProject {
            title: "Website".to_owned(),
            description: "Build a site".to_owned(),
            people: 3,
        }
    );
}

#[test]
fn gather_rejects_blank_title() {
    assert_eq!(input("  ", "Build a site", "3").gather(), Err(InputError::Title));
}

#[test]
fn gather_rejects_short_description() {
    assert_eq!(input("Website", "Build", "3").gather(), Err(InputError::Description));
}

#[test]
fn gather_rejects_long_description() {
    let long = "x".repeat(100);
    assert_eq!(input("Website", &long, "3").gather(), Err(InputError::Description));
}

#[test]
fn gather_rejects_whitespace_description() {
    let blank = " ".repeat(10);
    assert_eq!(input("Website", &blank, "3").gather(), Err(InputError::Description));
}

#[test]
fn gather_rejects_people_out_of_range() {
    assert_eq!(input("Website", "Build a site", "0").gather(), Err(InputError::People));
    assert_eq!(input("Website", "Build a site", "6").gather(), Err(InputError::People));
    assert_eq!(input("Website", "Build a site", "-2").gather(), Err(InputError::People));
}

#[test]
fn gather_rejects_non_numeric_people() {
    assert_eq!(input("Website", "Build a site", "").gather(), Err(InputError::People));
    assert_eq!(input("Website", "Build a site", "three").gather(), Err(InputError::People));
    assert_eq!(input("Website", "Build a site", "2.5").gather(), Err(InputError::People));
}

#[test]
fn gather_trims_people_field() {
    assert_eq!(input("Website", "Build a site", " 5 ").gather().unwrap().people, 5);
}

#[test]
fn gather_keeps_title_as_typed() {
    assert_eq!(input(" Website ", "Build a site", "1").gather().unwrap().title, " Website ");
}

#[test]
fn gather_reports_first_failing_field() {
    assert_eq!(input("", "short", "9").gather(), Err(InputError::Title));
    assert_eq!(input("ok", "short", "9").gather(), Err(InputError::Description));
}

#[test]
fn every_valid_combination_is_accepted() {
    for people in PEOPLE_MIN..=PEOPLE_MAX {
        for len in [DESCRIPTION_MIN_LEN, 20, DESCRIPTION_MAX_LEN] {
            let description = "d".repeat(len);
            assert!(input("t", &description, &people.to_string()).gather().is_ok());
        }
    }
}

// =============================================================
// submit
// =============================================================

#[test]
fn submit_adds_active_project_and_clears_form() {
    let store = ProjectStore::new();
    let mut form = input("Website", "Build a site", "3");

    let id = form.submit(&store).unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store.get(id).unwrap().status, ProjectStatus::Active);
    assert_eq!(form, ProjectInput::default());
}

#[test]
fn rejected_submit_leaves_store_and_form_untouched() {
    let store = ProjectStore::new();
    let notified = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let counter = std::sync::Arc::clone(&notified);
    store.subscribe(move |_| {
        counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    });

    for bad in [
        input("Website", "Short", "3"),
        input("Website", "Build a site", "6"),
        input("", "Build a site", "3"),
    ] {
        let mut form = bad.clone();
        assert!(form.submit(&store).is_err());
        assert_eq!(form, bad);
    }

    assert!(store.is_empty());
    assert_eq!(notified.load(std::sync::atomic::Ordering::SeqCst), 0);
}

#[test]
fn input_error_messages_name_the_field() {
    assert_eq!(InputError::Title.to_string(), "title is required");
    assert_eq!(InputError::Description.to_string(), "description must be 8 to 99 characters");
    assert_eq!(InputError::People.to_string(), "people must be a whole number from 1 to 5");
}

// =============================================================
// report_submission
// =============================================================

#[test]
fn accepted_submission_is_not_reported_to_user() {
    let store = ProjectStore::new();
    let mut messages = Vec::new();

    let id = report_submission(input("Website", "Build a site", "3").submit(&store), |m| {
        messages.push(m.to_owned());
    });

    assert_eq!(id, store.snapshot().first().map(|p| p.id));
    assert!(messages.is_empty());
}

#[test]
fn rejected_submission_shows_generic_message_once() {
    let store = ProjectStore::new();
    let mut form = input("Website", "Build a site", "6");
    let mut messages = Vec::new();

    let id = report_submission(form.submit(&store), |m| messages.push(m.to_owned()));

    assert_eq!(id, None);
    assert_eq!(messages, vec!["Wrong input, try again"]);
    assert_eq!(form.people, "6");
    assert!(store.is_empty());
}
