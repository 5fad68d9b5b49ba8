use super::*;

fn make_project(status: ProjectStatus) -> Project {
    Project {
        status,
        ..Project::new("Website", "Build a site", 3)
    }
}

// =============================================================
// Project::new
// =============================================================

#[test]
fn new_project_is_active() {
    let project = Project::new("Website", "Build a site", 3);
    assert_eq!(project.status, ProjectStatus::Active);
    assert_eq!(project.title, "Website");
    assert_eq!(project.description, "Build a site");
    assert_eq!(project.people, 3);
}

#[test]
fn new_projects_get_distinct_ids() {
    let a = Project::new("a", "aaaaaaaa", 1);
    let b = Project::new("a", "aaaaaaaa", 1);
    assert_ne!(a.id, b.id);
}

// =============================================================
// people_label
// =============================================================

#[test]
fn people_label_singular() {
    assert_eq!(people_label(1), "only 1 person");
}

#[test]
fn people_label_plural() {
    assert_eq!(people_label(4), "4 people");
    assert_eq!(people_label(2), "2 people");
}

#[test]
fn project_people_label_uses_count() {
    let project = Project::new("Solo", "one person job", 1);
    assert_eq!(project.people_label(), "only 1 person");
}

#[test]
fn assigned_label_wraps_people_label() {
    let solo = Project::new("Solo", "one person job", 1);
    let team = Project::new("Team", "four person job", 4);
    assert_eq!(solo.assigned_label(), "only 1 person assigned");
    assert_eq!(team.assigned_label(), "4 people assigned");
}

// =============================================================
// ProjectStatus
// =============================================================

#[test]
fn status_default_is_active() {
    assert_eq!(ProjectStatus::default(), ProjectStatus::Active);
}

#[test]
fn status_all_in_board_order() {
    assert_eq!(
        ProjectStatus::ALL,
        [ProjectStatus::Active, ProjectStatus::InProgress, ProjectStatus::Finished]
    );
}

#[test]
fn status_slugs_are_distinct() {
    assert_eq!(ProjectStatus::Active.slug(), "active");
    assert_eq!(ProjectStatus::InProgress.slug(), "in-progress");
    assert_eq!(ProjectStatus::Finished.slug(), "finished");
}

#[test]
fn status_headings() {
    assert_eq!(ProjectStatus::Active.heading(), "ACTIVE PROJECTS");
    assert_eq!(ProjectStatus::InProgress.heading(), "IN PROGRESS PROJECTS");
    assert_eq!(ProjectStatus::Finished.heading(), "FINISHED PROJECTS");
}

#[test]
fn status_serde_uses_slug() {
    for status in ProjectStatus::ALL {
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, format!("\"{}\"", status.slug()));
    }
}

#[test]
fn matches_only_own_status() {
    let project = make_project(ProjectStatus::InProgress);
    assert!(ProjectStatus::InProgress.matches(&project));
    assert!(!ProjectStatus::Active.matches(&project));
    assert!(!ProjectStatus::Finished.matches(&project));
}
