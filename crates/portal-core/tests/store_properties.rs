//! Property-based checks of store dispatch and pagination.

use portal_core::{DispatchOutcome, Pager, PropertyAction, PropertyStore, seed_properties};
use portal_model::{Property, PropertyId};
use proptest::prelude::*;

fn property(id: u64, name: &str) -> Property {
    let mut property = seed_properties()[0].clone();
    property.id = PropertyId::from(id);
    property.name = name.to_string();
    property
}

#[derive(Debug, Clone)]
enum Op {
    Add(u64),
    Update(u64),
    Delete(u64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1u64..12).prop_map(Op::Add),
        (1u64..12).prop_map(Op::Update),
        (1u64..12).prop_map(Op::Delete),
    ]
}

proptest! {
    #[test]
    fn add_appends_exactly_one(existing in proptest::collection::btree_set(1u64..50, 0..8), new in 50u64..100) {
        let seeds: Vec<Property> = existing.iter().map(|id| property(*id, "seed")).collect();
        let mut store = PropertyStore::from_properties(seeds.clone()).unwrap();
        let added = property(new, "new");

        store.dispatch(PropertyAction::Add(added.clone())).unwrap();

        prop_assert_eq!(store.len(), seeds.len() + 1);
        prop_assert_eq!(&store.properties()[..seeds.len()], seeds.as_slice());
        prop_assert_eq!(store.properties().last(), Some(&added));
    }

    #[test]
    fn update_touches_only_its_target(count in 1u64..8, pick in 0u64..8) {
        let target = pick % count + 1;
        let seeds: Vec<Property> = (1..=count).map(|id| property(id, "seed")).collect();
        let mut store = PropertyStore::from_properties(seeds.clone()).unwrap();

        let outcome = store.dispatch(PropertyAction::Update(property(target, "changed"))).unwrap();

        prop_assert!(matches!(outcome, DispatchOutcome::Updated(_)));
        for (before, after) in seeds.iter().zip(store.properties()) {
            if before.id == PropertyId::from(target) {
                prop_assert_eq!(after.name.as_str(), "changed");
            } else {
                prop_assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn delete_is_idempotent(count in 0u64..8, target in 1u64..10) {
        let seeds: Vec<Property> = (1..=count).map(|id| property(id, "seed")).collect();
        let mut store = PropertyStore::from_properties(seeds).unwrap();
        let id = PropertyId::from(target);

        store.dispatch(PropertyAction::Delete(id.clone())).unwrap();
        let once = store.properties().to_vec();
        let second = store.dispatch(PropertyAction::Delete(id.clone())).unwrap();

        prop_assert_eq!(second, DispatchOutcome::NotFound(id.clone()));
        prop_assert_eq!(store.properties(), once.as_slice());
        prop_assert!(store.find(id.as_str()).is_none());
    }

    #[test]
    fn ids_stay_unique(ops in proptest::collection::vec(op(), 0..40)) {
        let mut store = PropertyStore::new();
        let mut last_revision = store.revision();
        for op in ops {
            let result = match op {
                Op::Add(id) => store.dispatch(PropertyAction::Add(property(id, "p"))),
                Op::Update(id) => store.dispatch(PropertyAction::Update(property(id, "q"))),
                Op::Delete(id) => store.dispatch(PropertyAction::Delete(PropertyId::from(id))),
            };
            let changed = result.map(|outcome| outcome.changed()).unwrap_or(false);
            prop_assert_eq!(store.revision() > last_revision, changed);
            last_revision = store.revision();
        }
        let mut ids: Vec<&str> = store.properties().iter().map(|p| p.id.as_str()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), total);
    }

    #[test]
    fn pages_partition_the_list(total in 0usize..200, size in 1usize..25) {
        let mut pager = Pager::new(size);
        let pages = pager.page_count(total);
        prop_assert_eq!(pages, total.div_ceil(size));

        let mut seen = 0;
        for page in 1..=pages {
            pager.go_to(page, total);
            let len = pager.range(total).len();
            if page == pages {
                prop_assert_eq!(len, total - size * (pages - 1));
            } else {
                prop_assert_eq!(len, size);
            }
            seen += len;
        }
        prop_assert_eq!(seen, total);

        pager.go_to(pages, total);
        pager.next(total);
        prop_assert_eq!(pager.page(), pages.max(1));
    }
}
