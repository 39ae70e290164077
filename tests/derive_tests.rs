#![cfg(feature = "derive")]
//! Tests for the `Fields` derive macro.
//!
//! Derived structs expose their named fields as `Value`s, which makes them
//! usable with `pluck` and with `sort_by` by field name.

use eachfold::Value;
use eachfold::collection::{Selector, pluck, sort_by};
use eachfold::typeclass::Fields;
use rstest::rstest;

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Clone, Debug, PartialEq, Fields)]
struct Stooge {
    name: String,
    age: u32,
}

/// A pair whose `x` may be missing.
#[derive(Clone, Debug, PartialEq, Fields)]
struct Pair {
    x: Option<i32>,
    y: i32,
}

#[derive(Clone, Debug, Fields)]
struct Account {
    #[fields(rename = "displayName")]
    display_name: String,
    #[fields(skip)]
    #[allow(dead_code)]
    password: String,
    r#type: &'static str,
}

#[derive(Clone, Debug, Fields)]
struct Tagged<T> {
    tag: T,
}

fn stooge(name: &str, age: u32) -> Stooge {
    Stooge {
        name: name.to_string(),
        age,
    }
}

// =============================================================================
// Field Access
// =============================================================================

#[rstest]
fn derived_fields_convert_to_values() {
    let moe = stooge("moe", 30);
    assert_eq!(moe.field("name"), Some(Value::from("moe")));
    assert_eq!(moe.field("age"), Some(Value::from(30)));
    assert_eq!(moe.field("height"), None);
}

#[rstest]
fn missing_optional_fields_are_undefined() {
    let pair = Pair { x: None, y: 1 };
    assert_eq!(pair.field("x"), Some(Value::Undefined));
    assert_eq!(pair.field("y"), Some(Value::from(1)));
}

#[rstest]
fn attributes_rename_skip_and_unraw() {
    let account = Account {
        display_name: "Moe".to_string(),
        password: "hunter2".to_string(),
        r#type: "admin",
    };
    assert_eq!(account.field("displayName"), Some(Value::from("Moe")));
    assert_eq!(account.field("display_name"), None);
    assert_eq!(account.field("password"), None);
    assert_eq!(account.field("type"), Some(Value::from("admin")));
}

#[rstest]
fn generic_structs_derive_with_bounds() {
    let tagged = Tagged { tag: 2.5_f64 };
    assert_eq!(tagged.field("tag"), Some(Value::from(2.5)));
}

// =============================================================================
// Collection Operations
// =============================================================================

#[rstest]
fn pluck_reads_derived_fields() {
    let stooges = vec![stooge("moe", 40), stooge("larry", 50), stooge("curly", 60)];
    assert_eq!(
        pluck(&stooges, "age"),
        vec![
            Some(Value::from(40)),
            Some(Value::from(50)),
            Some(Value::from(60)),
        ]
    );
}

#[rstest]
fn sort_by_derived_field_name() {
    let mut stooges = vec![stooge("curly", 50), stooge("moe", 30)];
    sort_by(&mut stooges, Selector::ByName("age"));
    assert_eq!(
        pluck(&stooges, "name"),
        vec![Some(Value::from("moe")), Some(Value::from("curly"))]
    );
}

#[rstest]
fn sort_by_changes_the_order_as_little_as_possible() {
    let mut collection = Vec::new();
    for x in [Some(1), Some(2), None] {
        for y in 1..=6 {
            collection.push(Pair { x, y });
        }
    }
    let expected = collection.clone();

    sort_by(&mut collection, Selector::ByName("x"));

    assert_eq!(collection, expected);
}

#[rstest]
fn sort_by_moves_missing_keys_behind_present_ones() {
    let mut pairs = vec![
        Pair { x: None, y: 1 },
        Pair { x: Some(2), y: 2 },
        Pair { x: None, y: 3 },
        Pair { x: Some(1), y: 4 },
    ];

    sort_by(&mut pairs, Selector::ByName("x"));

    assert_eq!(
        pluck(&pairs, "y"),
        vec![
            Some(Value::from(4)),
            Some(Value::from(2)),
            Some(Value::from(1)),
            Some(Value::from(3)),
        ]
    );
}
