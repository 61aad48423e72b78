use super::*;
use crate::extension::{Extension, ext};
use crate::query::{Filter, Query, parse_query};
use crate::slot::Slot;
use serde_json::json;

fn with_x(slot: &Slot, x: Option<i64>) -> Extension {
    let builder = Extension::builder(slot.clone()).factory(|_| ());
    let builder = match x {
        Some(x) => builder.data("x", x),
        None => builder,
    };
    builder.build().expect("build extension")
}

fn increment(value: Value) -> Value {
    json!(value.as_i64().unwrap_or_default() + 1)
}

#[test]
fn modify_or_updates_present_field() {
    let slot = Slot::new("counter");
    let original = with_x(&slot, Some(5));
    let updated = modify_or(&DataField::new("x"), json!(0), increment, &original);

    assert_eq!(updated.data("x"), Some(&json!(6)));
    assert_eq!(original.data("x"), Some(&json!(5)));
    assert_eq!(updated.slot(), original.slot());
    assert!(updated.factory().ptr_eq(original.factory()));
}

#[test]
fn modify_or_applies_default_to_missing_field() {
    let slot = Slot::new("counter");
    let original = with_x(&slot, None);
    let updated = modify_or(&DataField::new("x"), json!(0), increment, &original);

    assert_eq!(updated.data("x"), Some(&json!(1)));
    assert!(original.data("x").is_none());
}

#[test]
fn modify_passes_none_without_default() {
    let slot = Slot::new("counter");
    let seen = modify(
        &DataField::new("x"),
        |current| json!(current.is_none()),
        &with_x(&slot, None),
    );
    assert_eq!(seen.data("x"), Some(&json!(true)));

    let seen = modify(
        &DataField::new("x"),
        |current| json!(current.is_none()),
        &with_x(&slot, Some(1)),
    );
    assert_eq!(seen.data("x"), Some(&json!(false)));
}

#[test]
fn null_data_counts_as_missing() {
    let extension = Extension::builder(Slot::new("counter"))
        .factory(|_| ())
        .data("x", Value::Null)
        .build()
        .expect("build extension");
    let updated = modify_or(&DataField::new("x"), json!(10), increment, &extension);
    assert_eq!(updated.data("x"), Some(&json!(11)));
}

#[test]
fn modify_sequence_preserves_length_and_order() {
    let slot = Slot::new("counter");
    let originals = vec![
        with_x(&slot, Some(1)),
        with_x(&slot, None),
        with_x(&slot, Some(10)),
    ];
    let updated = modify_or(&DataField::new("x"), json!(0), increment, &originals);

    let values: Vec<_> = updated.iter().map(|ext| ext.data("x").cloned()).collect();
    assert_eq!(
        values,
        vec![Some(json!(2)), Some(json!(1)), Some(json!(11))]
    );
    let untouched: Vec<_> = originals.iter().map(|ext| ext.data("x").cloned()).collect();
    assert_eq!(untouched, vec![Some(json!(1)), None, Some(json!(10))]);
}

#[test]
fn modify_accepts_slices_and_arrays() {
    let slot = Slot::new("counter");
    let pair = [with_x(&slot, Some(1)), with_x(&slot, Some(2))];

    let from_array = modify_or(&DataField::new("x"), json!(0), increment, &pair);
    let from_slice = modify_or(&DataField::new("x"), json!(0), increment, &pair[..1]);
    assert_eq!(from_array.len(), 2);
    assert_eq!(from_slice.len(), 1);
    assert_eq!(from_slice[0].data("x"), Some(&json!(2)));
}

#[test]
fn using_attaches_canonical_deps() {
    let tabs = Slot::new("tabs");
    let theme = Slot::new("theme");
    let extension = using(crate::deps_decl! { "theme" => theme.clone() }, &ext(tabs, |_| ()));

    let deps = extension.deps().expect("deps attached");
    assert_eq!(deps.len(), 1);
    assert_eq!(deps["theme"], Query::one(theme));
}

#[test]
fn using_merges_instead_of_replacing() {
    let tabs = Slot::new("tabs");
    let theme = Slot::new("theme");
    let icons = Slot::new("icons");
    let previews = Slot::new("previews");

    let first = using(
        crate::deps_decl! {
            "icons" => [icons.clone()],
            "theme" => theme.clone(),
        },
        &ext(tabs, |_| ()),
    );
    let images = Filter::data_eq("tag", "image");
    let second = using(
        crate::deps_decl! {
            "theme" => [theme.clone()],
            "previews" => (previews.clone(), images.clone()),
        },
        &first,
    );

    let deps = second.deps().expect("deps attached");
    assert_eq!(
        deps.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["icons", "theme", "previews"]
    );
    assert_eq!(deps["icons"], Query::all(icons));
    assert_eq!(deps["theme"], Query::all(theme.clone()));
    assert_eq!(deps["previews"], parse_query((previews, images)));

    let untouched = first.deps().expect("deps attached");
    assert_eq!(untouched["theme"], Query::one(theme));
    assert!(!untouched.contains_key("previews"));
}

#[test]
fn using_over_sequence_updates_each_extension() {
    let tabs = Slot::new("tabs");
    let theme = Slot::new("theme");
    let pool = vec![ext(tabs.clone(), |_| 1), ext(tabs, |_| 2)];

    let updated = using([("theme", theme.clone())], &pool);
    assert_eq!(updated.len(), 2);
    for extension in &updated {
        assert_eq!(extension.deps().map(|deps| deps.len()), Some(1));
    }
    assert!(pool.iter().all(|extension| extension.deps().is_none()));
}

#[test]
fn merge_deps_is_shallow_and_right_biased() {
    let a = Slot::new("a");
    let b = Slot::new("b");
    let left = parse_deps([("x", a.clone()), ("y", a.clone())]);
    let right = parse_deps([("y", b.clone()), ("z", b.clone())]);

    let merged = merge_deps(&left, right);
    assert_eq!(merged["x"], Query::one(a));
    assert_eq!(merged["y"], Query::one(b.clone()));
    assert_eq!(merged["z"], Query::one(b));
    assert_eq!(left.len(), 2);
}

#[test]
fn field_keys_are_namespaced() {
    assert_eq!(DepsField.key(), FieldKey::Internal(Field::Deps));
    assert_eq!(DataField::new("deps").key(), FieldKey::data("deps"));
    assert_ne!(DepsField.key(), DataField::new("@@extkit/deps").key());
}
