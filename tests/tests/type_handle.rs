use tests::prelude::*;

use pretty_assertions::assert_eq;
use std::collections::HashSet;
use std::thread;

#[derive(Debug, tagged::Enum)]
enum Fresh {
    A,
    B(String),
}

fn concurrent_lookups_agree() {
    let handles: Vec<TypeHandle> = thread::scope(|scope| {
        let workers: Vec<_> = (0..8)
            .map(|_| scope.spawn(type_id::<Fresh>))
            .collect();
        workers
            .into_iter()
            .map(|worker| worker.join().unwrap())
            .collect()
    });

    let distinct: HashSet<_> = handles.into_iter().collect();
    assert_eq!(distinct.len(), 1);
}

fn handles_identify_types_not_values() {
    assert_eq!(Fresh::A.type_handle(), Fresh::B("x".into()).type_handle());
    assert_eq!(Fresh::def().id, type_id::<Fresh>());
}

fn runtime_definitions_never_collide_with_derived_ones() {
    let def = EnumDef::builder("Fresh").unit("A").build().unwrap();
    assert_ne!(def.id, type_id::<Fresh>());
    assert_ne!(def.id, type_id::<Status>());
}

fn handles_display_with_a_hash() {
    assert_eq!(TypeHandle(12).to_string(), "#12");
}

tests!(
    concurrent_lookups_agree,
    handles_identify_types_not_values,
    runtime_definitions_never_collide_with_derived_ones,
    handles_display_with_a_hash,
);
