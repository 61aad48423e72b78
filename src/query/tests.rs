use super::*;
use crate::extension::ext;
use serde_json::json;

fn tagged(slot: &Slot, tag: &str) -> Extension {
    Extension::builder(slot.clone())
        .factory(|_| ())
        .data("tag", tag)
        .build()
        .expect("build extension")
}

#[test]
fn bare_slot_expects_one() {
    let slot = Slot::new("theme");
    let query = parse_query(slot.clone());
    assert_eq!(query.slot(), &slot);
    assert!(query.expects_one());
    assert!(query.filter().is_always());
    assert_eq!(query, Query::one(slot));
}

#[test]
fn single_element_tuple_collects_all() {
    let slot = Slot::new("icons");
    assert_eq!(parse_query([slot.clone()]), Query::all(slot.clone()));
    assert_eq!(parse_query((slot.clone(),)), Query::all(slot));
}

#[test]
fn pair_keeps_filter() {
    let slot = Slot::new("previews");
    let filter = Filter::data_eq("tag", "image");
    let query = parse_query((slot.clone(), filter.clone()));
    assert_eq!(query.slot(), &slot);
    assert!(!query.expects_one());
    assert_eq!(query.filter(), &filter);
    assert_ne!(query.filter(), &Filter::data_eq("tag", "image"));
}

#[test]
fn canonical_queries_pass_through() {
    let slot = Slot::new("previews");
    let canonical = Query::new(slot.clone(), true, Filter::new(|_| false));
    let reparsed = parse_query(canonical.clone());
    assert_eq!(reparsed, canonical);
    assert_eq!(parse_query(parse_query(slot.clone())), parse_query(slot));
}

#[test]
fn parse_deps_preserves_keys_and_order() {
    let theme = Slot::new("theme");
    let previews = Slot::new("previews");
    let images = Filter::data_eq("tag", "image");

    let decl = deps_decl! {
        "theme" => theme.clone(),
        "previews" => (previews.clone(), images.clone()),
    };
    let parsed = parse_deps(&decl);

    assert_eq!(
        parsed.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["theme", "previews"]
    );
    assert_eq!(parsed["theme"], parse_query(theme.clone()));
    assert_eq!(parsed["previews"], parse_query((previews, images)));
    assert_eq!(decl["theme"], TerseQuery::Bare(theme));
}

#[test]
fn query_matches_slot_and_filter() {
    let previews = Slot::new("previews");
    let query = parse_query((previews.clone(), Filter::data_eq("tag", "image")));

    assert!(query.matches(&tagged(&previews, "image")));
    assert!(!query.matches(&tagged(&previews, "text")));
    assert!(!query.matches(&tagged(&Slot::new("previews"), "image")));
    assert!(Query::all(previews.clone()).matches(&ext(previews, |_| ())));
}

#[test]
fn data_eq_compares_json_values() {
    let slot = Slot::new("rank");
    let extension = Extension::builder(slot)
        .factory(|_| ())
        .data("rank", json!(2))
        .build()
        .expect("build extension");
    assert!(Filter::data_eq("rank", 2).matches(&extension));
    assert!(!Filter::data_eq("rank", "2").matches(&extension));
}

#[test]
fn debug_uses_namespaced_field_names() {
    let rendered = format!("{:?}", Query::one(Slot::new("theme")));
    assert!(rendered.contains("@@extkit/extOf"));
    assert!(rendered.contains("@@extkit/one: true"));
    assert!(rendered.contains("@@extkit/qFilter: Always"));
}
