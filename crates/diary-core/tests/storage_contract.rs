//! Behavior every storage backend must share, run against both backends.

use std::collections::HashSet;

use chrono::NaiveDate;
use tempfile::TempDir;
use uuid::Uuid;

use diary_core::storage::{open_backend, BackendKind, Entry, NewEntry, StorageEngine};
use diary_core::DiaryError;

struct TestStore {
    // Keeps the directory alive for the store's lifetime.
    _dir: TempDir,
    kind: BackendKind,
    storage: Box<dyn StorageEngine>,
}

fn open_store(kind: BackendKind) -> TestStore {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let path = dir.path().join(kind.default_file_name());
    let storage = open_backend(kind, &path).expect("backend should open");
    TestStore {
        _dir: dir,
        kind,
        storage,
    }
}

fn stores() -> Vec<TestStore> {
    BackendKind::ALL.into_iter().map(open_store).collect()
}

fn day(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("valid test date")
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn ids(entries: &[Entry]) -> Vec<Uuid> {
    entries.iter().map(|e| e.id).collect()
}

#[test]
fn test_add_then_get_round_trip() {
    for mut store in stores() {
        let draft = NewEntry::new(day("2024-01-01"))
            .with_title("First")
            .with_body("line one\nline two")
            .with_mood("happy")
            .with_tags(tags(&["x", "y", "x"]));

        let id = store.storage.add_entry(&draft).expect("add should succeed");
        let entry = store
            .storage
            .get_entry(&id)
            .expect("get should succeed")
            .expect("entry should exist");

        assert_eq!(entry.id, id, "{}", store.kind);
        assert_eq!(NewEntry::from(&entry), draft, "{}", store.kind);
        assert_eq!(entry.created_at, entry.updated_at, "{}", store.kind);
    }
}

#[test]
fn test_add_defaults_optional_fields_to_empty() {
    for mut store in stores() {
        let id = store
            .storage
            .add_entry(&NewEntry::new(day("2024-01-01")))
            .unwrap();
        let entry = store.storage.get_entry(&id).unwrap().unwrap();

        assert!(entry.title.is_empty());
        assert!(entry.body.is_empty());
        assert!(entry.mood.is_empty());
        assert!(entry.tags.is_empty(), "{}", store.kind);
    }
}

#[test]
fn test_add_without_date_is_invalid_input() {
    for mut store in stores() {
        let err = store
            .storage
            .add_entry(&NewEntry::default().with_title("undated"))
            .unwrap_err();

        assert!(matches!(err, DiaryError::InvalidInput(_)), "{}", store.kind);
        assert!(store.storage.list_entries().unwrap().is_empty());
    }
}

#[test]
fn test_ids_are_unique() {
    for mut store in stores() {
        let mut seen = HashSet::new();
        for i in 0..25 {
            let id = store
                .storage
                .add_entry(&NewEntry::new(day("2024-01-01")).with_title(format!("entry {}", i)))
                .unwrap();
            assert!(seen.insert(id), "duplicate id from {}", store.kind);
        }
        assert_eq!(store.storage.list_entries().unwrap().len(), 25);
    }
}

#[test]
fn test_get_missing_is_none() {
    for store in stores() {
        assert!(store.storage.get_entry(&Uuid::new_v4()).unwrap().is_none());
    }
}

#[test]
fn test_update_replaces_field_group() {
    for mut store in stores() {
        let id = store
            .storage
            .add_entry(
                &NewEntry::new(day("2024-01-01"))
                    .with_title("Before")
                    .with_body("old body")
                    .with_mood("happy")
                    .with_tags(tags(&["x", "y"])),
            )
            .unwrap();
        let original = store.storage.get_entry(&id).unwrap().unwrap();

        let fields = NewEntry::new(day("2024-01-02"))
            .with_title("After")
            .with_mood("sad")
            .with_tags(tags(&["y"]));
        assert!(store.storage.update_entry(&id, &fields).unwrap());

        let updated = store.storage.get_entry(&id).unwrap().unwrap();
        assert_eq!(NewEntry::from(&updated), fields, "{}", store.kind);
        assert_eq!(updated.body, "", "body is replaced, not merged");
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert!(updated.updated_at > original.updated_at, "{}", store.kind);
    }
}

#[test]
fn test_update_missing_returns_false() {
    for mut store in stores() {
        store
            .storage
            .add_entry(&NewEntry::new(day("2024-01-01")).with_title("only"))
            .unwrap();

        let updated = store
            .storage
            .update_entry(&Uuid::new_v4(), &NewEntry::new(day("2024-02-02")))
            .unwrap();

        assert!(!updated, "{}", store.kind);
        let entries = store.storage.list_entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "only");
    }
}

#[test]
fn test_update_without_date_is_invalid_input() {
    for mut store in stores() {
        let id = store
            .storage
            .add_entry(&NewEntry::new(day("2024-01-01")).with_title("keep"))
            .unwrap();

        let err = store
            .storage
            .update_entry(&id, &NewEntry::default().with_title("lost"))
            .unwrap_err();

        assert!(matches!(err, DiaryError::InvalidInput(_)), "{}", store.kind);
        assert_eq!(store.storage.get_entry(&id).unwrap().unwrap().title, "keep");
    }
}

#[test]
fn test_delete_semantics() {
    for mut store in stores() {
        let keep = store
            .storage
            .add_entry(&NewEntry::new(day("2024-01-01")))
            .unwrap();
        let gone = store
            .storage
            .add_entry(&NewEntry::new(day("2024-01-01")))
            .unwrap();

        assert!(store.storage.delete_entry(&gone).unwrap());
        assert!(store.storage.get_entry(&gone).unwrap().is_none());
        assert!(!store.storage.delete_entry(&gone).unwrap(), "{}", store.kind);
        assert!(!store.storage.delete_entry(&Uuid::new_v4()).unwrap());
        assert_eq!(ids(&store.storage.list_entries().unwrap()), vec![keep]);
    }
}

#[test]
fn test_get_by_date_filters_and_orders_newest_first() {
    for mut store in stores() {
        let first = store
            .storage
            .add_entry(&NewEntry::new(day("2024-03-01")).with_title("morning"))
            .unwrap();
        store
            .storage
            .add_entry(&NewEntry::new(day("2024-03-02")).with_title("other day"))
            .unwrap();
        let second = store
            .storage
            .add_entry(&NewEntry::new(day("2024-03-01")).with_title("evening"))
            .unwrap();

        let entries = store.storage.get_entries_by_date(day("2024-03-01")).unwrap();
        assert_eq!(ids(&entries), vec![second, first], "{}", store.kind);
        assert!(store
            .storage
            .get_entries_by_date(day("1999-01-01"))
            .unwrap()
            .is_empty());
    }
}

#[test]
fn test_search_matches_title_body_and_tags() {
    for mut store in stores() {
        let sunny = store
            .storage
            .add_entry(
                &NewEntry::new(day("2024-01-01"))
                    .with_title("Sunny day")
                    .with_tags(tags(&["work"])),
            )
            .unwrap();
        let rainy = store
            .storage
            .add_entry(
                &NewEntry::new(day("2024-01-02"))
                    .with_title("Rainy")
                    .with_body("worked late"),
            )
            .unwrap();
        store
            .storage
            .add_entry(
                &NewEntry::new(day("2024-01-03"))
                    .with_title("Weekend")
                    .with_mood("work")
                    .with_body("nothing"),
            )
            .unwrap();

        let results = store.storage.search_entries("work").unwrap();
        assert_eq!(ids(&results), vec![rainy, sunny], "{}", store.kind);

        let results = store.storage.search_entries("SUNNY").unwrap();
        assert_eq!(ids(&results), vec![sunny], "{}", store.kind);

        assert!(store.storage.search_entries("absent").unwrap().is_empty());
    }
}

#[test]
fn test_search_folds_ascii_case_only() {
    for mut store in stores() {
        let summer = store
            .storage
            .add_entry(&NewEntry::new(day("2024-07-01")).with_title("été à Paris"))
            .unwrap();

        let results = store.storage.search_entries("été").unwrap();
        assert_eq!(ids(&results), vec![summer], "{}", store.kind);

        let results = store.storage.search_entries("PARIS").unwrap();
        assert_eq!(ids(&results), vec![summer], "{}", store.kind);

        // Non-ASCII letters are compared as written.
        assert!(
            store.storage.search_entries("ÉTÉ").unwrap().is_empty(),
            "{}",
            store.kind
        );
        assert!(
            store.storage.search_entries("À").unwrap().is_empty(),
            "{}",
            store.kind
        );
    }
}

#[test]
fn test_search_orders_by_date_descending() {
    for mut store in stores() {
        for date in ["2024-05-01", "2024-07-01", "2024-06-01"] {
            store
                .storage
                .add_entry(&NewEntry::new(day(date)).with_body("walk"))
                .unwrap();
        }

        let dates: Vec<NaiveDate> = store
            .storage
            .search_entries("walk")
            .unwrap()
            .iter()
            .map(|e| e.date)
            .collect();
        assert_eq!(
            dates,
            vec![day("2024-07-01"), day("2024-06-01"), day("2024-05-01")],
            "{}",
            store.kind
        );
    }
}

#[test]
fn test_list_orders_by_date_then_created_at() {
    for mut store in stores() {
        let older_day = store
            .storage
            .add_entry(&NewEntry::new(day("2024-01-01")))
            .unwrap();
        let newer_day_first = store
            .storage
            .add_entry(&NewEntry::new(day("2024-02-01")))
            .unwrap();
        let newer_day_second = store
            .storage
            .add_entry(&NewEntry::new(day("2024-02-01")))
            .unwrap();

        let expected = vec![newer_day_second, newer_day_first, older_day];
        assert_eq!(ids(&store.storage.list_entries().unwrap()), expected, "{}", store.kind);
        assert_eq!(ids(&store.storage.export_all().unwrap()), expected, "{}", store.kind);
    }
}

#[test]
fn test_empty_store_reads_are_empty() {
    for store in stores() {
        assert!(store.storage.list_entries().unwrap().is_empty());
        assert!(store.storage.export_all().unwrap().is_empty());
        assert!(store.storage.search_entries("anything").unwrap().is_empty());
        assert!(store
            .storage
            .get_entries_by_date(day("2024-01-01"))
            .unwrap()
            .is_empty());
    }
}

#[test]
fn test_mutations_are_durable_across_reopen() {
    for kind in BackendKind::ALL {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(kind.default_file_name());

        let (kept, edited) = {
            let mut storage = open_backend(kind, &path).unwrap();
            let kept = storage
                .add_entry(&NewEntry::new(day("2024-01-01")).with_title("kept"))
                .unwrap();
            let edited = storage
                .add_entry(&NewEntry::new(day("2024-01-01")).with_title("draft"))
                .unwrap();
            let dropped = storage
                .add_entry(&NewEntry::new(day("2024-01-01")))
                .unwrap();
            storage
                .update_entry(&edited, &NewEntry::new(day("2024-01-05")).with_title("final"))
                .unwrap();
            storage.delete_entry(&dropped).unwrap();
            (kept, edited)
        };

        let storage = open_backend(kind, &path).unwrap();
        let entries = storage.list_entries().unwrap();
        assert_eq!(ids(&entries), vec![edited, kept], "{}", kind);
        assert_eq!(entries[0].title, "final");
    }
}

#[test]
fn test_scenario_add_update_delete() {
    for mut store in stores() {
        let id = store
            .storage
            .add_entry(
                &NewEntry::new(day("2024-01-01"))
                    .with_title("First")
                    .with_mood("happy")
                    .with_tags(tags(&["x", "y"])),
            )
            .unwrap();

        let added = store.storage.get_entry(&id).unwrap().unwrap();
        assert_eq!(added.created_at, added.updated_at);

        let updated = store
            .storage
            .update_entry(
                &id,
                &NewEntry::new(day("2024-01-02"))
                    .with_title("First")
                    .with_mood("sad")
                    .with_tags(tags(&["x"])),
            )
            .unwrap();
        assert!(updated);

        let after = store.storage.get_entry(&id).unwrap().unwrap();
        assert_eq!(after.mood, "sad");
        assert!(after.updated_at > added.updated_at);

        assert!(store.storage.delete_entry(&id).unwrap());
        assert!(store.storage.get_entry(&id).unwrap().is_none(), "{}", store.kind);
    }
}

#[test]
fn test_backends_agree_on_replayed_operations() {
    fn replay(storage: &mut dyn StorageEngine) -> Vec<NewEntry> {
        let a = storage
            .add_entry(
                &NewEntry::new(day("2024-01-01"))
                    .with_title("Sunny day")
                    .with_mood("happy")
                    .with_tags(tags(&["work", "outside"])),
            )
            .unwrap();
        let b = storage
            .add_entry(
                &NewEntry::new(day("2024-01-03"))
                    .with_title("Rainy")
                    .with_body("worked late\nthen slept"),
            )
            .unwrap();
        let c = storage
            .add_entry(&NewEntry::new(day("2024-01-02")).with_mood("calm"))
            .unwrap();
        storage
            .add_entry(&NewEntry::new(day("2024-01-03")).with_title("Later same day"))
            .unwrap();
        storage
            .update_entry(
                &b,
                &NewEntry::new(day("2024-01-04"))
                    .with_title("Rainy, edited")
                    .with_tags(tags(&["edited"])),
            )
            .unwrap();
        storage.delete_entry(&c).unwrap();
        storage.update_entry(&Uuid::new_v4(), &NewEntry::new(day("2024-01-09"))).unwrap();
        storage.delete_entry(&Uuid::new_v4()).unwrap();
        assert!(storage.get_entry(&a).unwrap().is_some());

        storage.list_entries().unwrap().iter().map(NewEntry::from).collect()
    }

    let mut sqlite = open_store(BackendKind::Sqlite);
    let mut json = open_store(BackendKind::Json);

    let from_sqlite = replay(sqlite.storage.as_mut());
    let from_json = replay(json.storage.as_mut());

    assert_eq!(from_sqlite.len(), 3);
    assert_eq!(from_sqlite, from_json);
}
