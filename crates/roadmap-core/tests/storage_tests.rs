mod common;

use common::{create_test_advisor, profile, sample_catalog};
use roadmap_core::{
    AdvisorBuilder, Catalog, CatalogSnapshot, Course, Database, ImportCatalog, JsonCatalog,
    JsonPlanStore, Level, ListCourses, MemoryCatalog, MemoryPlanStore, Plan, PlanStep, PlanStore,
    Recommend, RoadmapError, SqliteCatalog, SqlitePlanStore, StoredPlan, UserId,
};
use rusqlite::Connection;
use tempfile::TempDir;

fn sample_plan() -> Plan {
    Plan {
        total_hours: 20,
        steps: vec![
            PlanStep {
                sequence_number: 1,
                course_id: 1,
                hours: 12,
                note: "Score: 1.000".to_string(),
            },
            PlanStep {
                sequence_number: 2,
                course_id: 4,
                hours: 8,
                note: "Score: 0.450".to_string(),
            },
        ],
    }
}

fn exercise_store(store: &dyn PlanStore) {
    assert_eq!(store.load_plan(1).unwrap(), None);

    store.save_plan(1, &sample_plan()).unwrap();
    assert_eq!(store.load_plan(1).unwrap(), Some(sample_plan()));

    // saving again replaces the earlier plan
    store.save_plan(1, &Plan::default()).unwrap();
    let record = store.load(1).unwrap().expect("plan should be stored");
    assert!(record.plan.is_empty());
    assert!(record.saved_at.is_some());

    // other users are unaffected
    assert_eq!(store.load_plan(2).unwrap(), None);
}

#[test]
fn test_memory_plan_store() {
    exercise_store(&MemoryPlanStore::new());
}

#[test]
fn test_json_plan_store() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonPlanStore::new(temp_dir.path().join("plans"));
    exercise_store(&store);
    assert!(store.plan_path(1).exists());
}

#[test]
fn test_sqlite_plan_store() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("plans.db");
    let store = SqlitePlanStore::new(&db_path);
    exercise_store(&store);
}

#[test]
fn test_sqlite_plan_store_rejects_unstorable_user_id() {
    let temp_dir = TempDir::new().unwrap();
    let store = SqlitePlanStore::new(temp_dir.path().join("plans.db"));

    let err = store.save_plan(u64::MAX, &sample_plan()).unwrap_err();
    assert!(matches!(err, RoadmapError::InvalidInput { ref field, .. } if field == "userId"));
    assert_eq!(store.load_plan(u64::MAX).unwrap(), None);

    store.save_plan(1, &sample_plan()).unwrap();
    assert_eq!(store.load_plan(1).unwrap(), Some(sample_plan()));
}

#[test]
fn test_legacy_plan_rows_are_migrated() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("legacy.db");
    {
        let conn = Connection::open(&db_path).unwrap();
        conn.execute_batch(
            "CREATE TABLE plans (
                user_id INTEGER PRIMARY KEY,
                total_hours INTEGER NOT NULL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );
            CREATE TABLE plan_steps (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER,
                step INTEGER NOT NULL,
                course_id INTEGER NOT NULL,
                hours INTEGER NOT NULL,
                note TEXT,
                FOREIGN KEY (user_id) REFERENCES plans(user_id)
            );
            INSERT INTO plans (user_id, total_hours, created_at) VALUES (7, 12, '2024-03-01 10:20:30');
            INSERT INTO plan_steps (user_id, step, course_id, hours, note) VALUES (7, 1, 1, 12, NULL);",
        )
        .unwrap();
    }

    // opening runs the migrations; running them twice changes nothing
    Database::new(&db_path).unwrap();
    let store = SqlitePlanStore::new(&db_path);
    let record = store.load(7).unwrap().expect("legacy plan should load");

    let expected: jiff::Timestamp = "2024-03-01T10:20:30Z".parse().unwrap();
    assert_eq!(record.saved_at, Some(expected));
    assert_eq!(record.plan.total_hours, 12);
    assert_eq!(record.plan.steps[0].note, "");

    // the legacy tables still accept new plans
    store.save_plan(7, &sample_plan()).unwrap();
    assert_eq!(store.load_plan(7).unwrap(), Some(sample_plan()));
}

#[test]
fn test_json_plan_file_shape() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonPlanStore::new(temp_dir.path());
    store.save_plan(42, &sample_plan()).unwrap();

    let text = std::fs::read_to_string(temp_dir.path().join("plan_42.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["userId"], 42);
    assert_eq!(json["totalHours"], 20);
    assert_eq!(json["steps"][1]["step"], 2);
    assert_eq!(json["steps"][1]["courseId"], 4);
    assert_eq!(json["steps"][1]["hours"], 8);
    assert_eq!(json["steps"][1]["note"], "Score: 0.450");
}

#[test]
fn test_json_plan_file_without_timestamp_loads() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("plan_3.json"),
        r#"{"userId":3,"totalHours":5,"steps":[{"step":1,"courseId":9,"hours":5,"note":"Score: 0.500"}]}"#,
    )
    .unwrap();

    let record: StoredPlan = JsonPlanStore::new(temp_dir.path())
        .load(3)
        .unwrap()
        .unwrap();
    assert_eq!(record.saved_at, None);
    assert_eq!(record.plan.course_ids(), vec![9]);
}

#[test]
fn test_json_catalog_reads_courses() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("courses.json");
    std::fs::write(
        &path,
        r#"[
            {"id": 1, "domain": "AI", "level": "Beginner", "durationHours": 6, "tags": ["ml"]},
            {"id": 2, "title": "Next", "domain": "AI", "level": "Intermediate", "durationHours": 9,
             "prerequisiteCourseIds": [1], "score": 0.8}
        ]"#,
    )
    .unwrap();

    let courses = JsonCatalog::new(&path).get_all().unwrap();
    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0].intrinsic_score, 1.0);
    assert!(courses[0].prerequisite_course_ids.is_empty());
    assert_eq!(courses[1].prerequisite_course_ids, vec![1]);
    assert_eq!(courses[1].intrinsic_score, 0.8);
}

#[test]
fn test_json_catalog_errors() {
    let temp_dir = TempDir::new().unwrap();

    let missing = JsonCatalog::new(temp_dir.path().join("absent.json"))
        .get_all()
        .unwrap_err();
    assert!(matches!(missing, RoadmapError::FileSystem { .. }));

    let path = temp_dir.path().join("broken.json");
    std::fs::write(&path, r#"[{"id": 1, "domain": "AI", "level": "Expert", "durationHours": 3}]"#)
        .unwrap();
    let broken = JsonCatalog::new(&path).get_all().unwrap_err();
    assert!(matches!(broken, RoadmapError::Serialization { .. }));
}

fn invalid_input_field(err: RoadmapError) -> String {
    match err {
        RoadmapError::InvalidInput { field, .. } => field,
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_json_catalog_rejects_duplicate_ids() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("courses.json");
    std::fs::write(
        &path,
        r#"[
            {"id": 1, "domain": "AI", "level": "Beginner", "durationHours": 6, "tags": ["ml"]},
            {"id": 1, "domain": "AI", "level": "Beginner", "durationHours": 4}
        ]"#,
    )
    .unwrap();

    let err = JsonCatalog::new(&path).get_all().unwrap_err();
    assert_eq!(invalid_input_field(err), "id");
}

#[test]
fn test_json_catalog_rejects_zero_duration() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("courses.json");
    std::fs::write(
        &path,
        r#"[{"id": 1, "domain": "AI", "level": "Beginner", "durationHours": 0}]"#,
    )
    .unwrap();

    let err = JsonCatalog::new(&path).get_all().unwrap_err();
    assert_eq!(invalid_input_field(err), "durationHours");
}

#[tokio::test]
async fn test_advisor_rejects_catalog_with_duplicate_ids() {
    let catalog = MemoryCatalog::new(vec![
        Course::new(1, "AI", Level::Beginner, 6).with_tags(["ml"]),
        Course::new(1, "AI", Level::Beginner, 4),
    ]);
    let advisor = AdvisorBuilder::new()
        .with_catalog(catalog)
        .with_store(MemoryPlanStore::new())
        .build()
        .await
        .unwrap();

    let err = advisor
        .recommend(&Recommend {
            profile: profile("AI", Level::Beginner, &["ml"], (10, 2)),
        })
        .await
        .unwrap_err();
    assert_eq!(invalid_input_field(err), "id");
    assert_eq!(advisor.get_plan(&UserId { user_id: 1 }).await.unwrap(), None);
}

#[test]
fn test_sqlite_catalog_round_trips_courses() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = SqliteCatalog::new(temp_dir.path().join("catalog.db"));

    assert_eq!(catalog.import(&sample_catalog()).unwrap(), 8);
    assert_eq!(catalog.get_all().unwrap(), sample_catalog());

    // re-importing replaces tags and prerequisites instead of appending
    let mut revised = sample_catalog();
    revised[1].tags = vec!["transformers".to_string()];
    revised[1].prerequisite_course_ids.clear();
    catalog.import(&revised[1..2]).unwrap();

    let courses = catalog.get_all().unwrap();
    assert_eq!(courses.len(), 8);
    assert_eq!(courses[1].tags, vec!["transformers".to_string()]);
    assert!(courses[1].prerequisite_course_ids.is_empty());
}

#[test]
fn test_sqlite_import_rejects_invalid_course() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("catalog.db");
    let catalog = SqliteCatalog::new(&db_path);

    let mut courses = sample_catalog();
    courses[3].duration_hours = 0;
    let err = catalog.import(&courses).unwrap_err();
    assert!(matches!(err, RoadmapError::InvalidInput { .. }));

    assert!(catalog.get_all().unwrap().is_empty());
}

#[test]
fn test_sqlite_import_rejects_duplicate_ids() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = SqliteCatalog::new(temp_dir.path().join("catalog.db"));

    let mut courses = sample_catalog();
    courses[4].id = courses[0].id;
    let err = catalog.import(&courses).unwrap_err();
    assert_eq!(invalid_input_field(err), "id");
    assert!(catalog.get_all().unwrap().is_empty());
}

#[test]
fn test_sqlite_import_rejects_unstorable_ids() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = SqliteCatalog::new(temp_dir.path().join("catalog.db"));
    let too_large = i64::MAX as u64 + 1;

    let err = catalog
        .import(&[
            Course::new(1, "AI", Level::Beginner, 6),
            Course::new(too_large, "AI", Level::Beginner, 6),
        ])
        .unwrap_err();
    assert_eq!(invalid_input_field(err), "id");

    let err = catalog
        .import(&[Course::new(2, "AI", Level::Beginner, 6).with_prerequisites([too_large])])
        .unwrap_err();
    assert_eq!(invalid_input_field(err), "prerequisiteCourseIds");

    // nothing was written and the catalog stays readable
    assert!(catalog.get_all().unwrap().is_empty());
    assert_eq!(catalog.import(&sample_catalog()).unwrap(), 8);
    assert_eq!(catalog.get_all().unwrap().len(), 8);
}

#[test]
fn test_snapshot_readers_keep_their_copy() {
    let snapshot = CatalogSnapshot::load(&MemoryCatalog::new(sample_catalog())).unwrap();
    let held = snapshot.current();

    let refreshed = snapshot
        .refresh(&MemoryCatalog::new(sample_catalog()[..2].to_vec()))
        .unwrap();

    assert_eq!(refreshed, 2);
    assert_eq!(held.len(), 8);
    assert_eq!(snapshot.current().len(), 2);
}

#[test]
fn test_snapshot_keeps_courses_when_refresh_is_invalid() {
    let snapshot = CatalogSnapshot::load(&MemoryCatalog::new(sample_catalog())).unwrap();

    let mut duplicated = sample_catalog();
    duplicated.push(duplicated[0].clone());
    let err = snapshot.refresh(&MemoryCatalog::new(duplicated)).unwrap_err();

    assert!(matches!(err, RoadmapError::InvalidInput { .. }));
    assert_eq!(snapshot.current().len(), 8);
}

#[tokio::test]
async fn test_advisor_end_to_end_over_sqlite() {
    let (temp_dir, advisor) = create_test_advisor().await;

    let path = temp_dir.path().join("courses.json");
    std::fs::write(&path, serde_json::to_string_pretty(&sample_catalog()).unwrap()).unwrap();
    let imported = advisor
        .import_catalog(&ImportCatalog {
            path: path.to_string_lossy().into_owned(),
        })
        .await
        .unwrap();
    assert_eq!(imported, 8);

    let ai = advisor
        .list_courses(&ListCourses {
            domain: Some("AI".to_string()),
            level: None,
        })
        .await
        .unwrap();
    assert_eq!(ai.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2, 3, 6, 8]);

    let learner = profile("AI", Level::Beginner, &["ml"], (8, 5));
    let plan = advisor
        .recommend(&Recommend {
            profile: learner.clone(),
        })
        .await
        .unwrap();
    plan.check_invariants(&learner, &sample_catalog()).unwrap();
    assert!(!plan.is_empty());

    let stored = advisor.get_plan(&UserId { user_id: 1 }).await.unwrap();
    assert_eq!(stored, Some(plan));
}
