//! Property tests for the record store.

use proptest::prelude::*;

use contactbook::{BookError, RecordStore};
use contactbook_store::MemoryMedium;
use contactbook_testkit::generators::{distinct_records, record};

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("build runtime")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn distinct_appends_all_succeed_in_order(records in distinct_records(25)) {
        let listed = runtime().block_on(async {
            let store = RecordStore::with_medium(MemoryMedium::new());
            for r in &records {
                store.append(r.clone()).await.expect("distinct append");
            }
            store.list().await
        });

        prop_assert_eq!(listed, records);
    }

    #[test]
    fn reappending_any_member_is_rejected(
        records in distinct_records(12).prop_filter("non-empty", |r| !r.is_empty()),
        pick in any::<prop::sample::Index>(),
    ) {
        let member = pick.get(&records).clone();

        let (err, listed) = runtime().block_on(async {
            let store = RecordStore::with_medium(MemoryMedium::new());
            for r in &records {
                store.append(r.clone()).await.expect("distinct append");
            }
            let err = store.append(member).await.unwrap_err();
            (err, store.list().await)
        });

        prop_assert!(matches!(err, BookError::DuplicateEmail { .. }), "got {:?}", err);
        prop_assert_eq!(listed, records);
    }

    #[test]
    fn delete_removes_exactly_one_position(
        records in distinct_records(12).prop_filter("non-empty", |r| !r.is_empty()),
        pick in any::<prop::sample::Index>(),
    ) {
        let index = pick.index(records.len());

        let listed = runtime().block_on(async {
            let store = RecordStore::with_medium(MemoryMedium::new());
            for r in &records {
                store.append(r.clone()).await.expect("distinct append");
            }
            store.delete_at(index as i64).await.expect("in-range delete");
            store.list().await
        });

        let mut expected = records.clone();
        expected.remove(index);
        prop_assert_eq!(listed, expected);
    }

    #[test]
    fn update_with_fresh_record_replaces_in_place(
        records in distinct_records(8).prop_filter("non-empty", |r| !r.is_empty()),
        pick in any::<prop::sample::Index>(),
        fresh in record(),
    ) {
        let index = pick.index(records.len());
        let mut fresh = fresh;
        // Keys outside anything distinct_records can produce.
        fresh.email = "fresh-unique@update.test".to_string();
        fresh.phone_number = "0".to_string();

        let listed = runtime().block_on(async {
            let store = RecordStore::with_medium(MemoryMedium::new());
            for r in &records {
                store.append(r.clone()).await.expect("distinct append");
            }
            store.update_at(index as i64, fresh.clone()).await.expect("fresh update");
            store.list().await
        });

        let mut expected = records.clone();
        expected[index] = fresh;
        prop_assert_eq!(listed, expected);
    }
}
