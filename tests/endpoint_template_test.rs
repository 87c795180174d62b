use equiplan::core::endpoints::{
    build_endpoint, build_endpoint_json, unresolved_placeholders, ApiResource, HORSE_RIDERS,
    RIDER_PACKAGES,
};

/// Each key replaces only the first occurrence of its placeholder
#[test]
fn test_single_pass_per_key() {
    assert_eq!(
        build_endpoint("/horses/:id/lessons/:id", [("id", 42)]),
        "/horses/42/lessons/:id"
    );
}

#[test]
fn test_unknown_keys_and_missing_params() {
    assert_eq!(build_endpoint(HORSE_RIDERS, [("riderId", 1)]), "/horses/:id/riders");
    assert_eq!(build_endpoint("/packages", [("id", 9)]), "/packages");
    assert_eq!(
        unresolved_placeholders(&build_endpoint("/riders/:id/horses/:horseId", [("id", 3)])),
        vec!["horseId"]
    );
}

#[test]
fn test_multiple_params_in_order() {
    let path = build_endpoint(
        "/riders/:riderId/packages/:packageId",
        vec![("riderId", "7"), ("packageId", "12")],
    );
    assert_eq!(path, "/riders/7/packages/12");
}

/// Prefix-colliding keys are order-sensitive; no attempt is made to disambiguate
#[test]
fn test_prefix_keys_depend_on_order() {
    let template = "/slots/:idType/:id";

    assert_eq!(
        build_endpoint(template, [("idType", "weekly"), ("id", "5")]),
        "/slots/weekly/5"
    );
    assert_eq!(
        build_endpoint(template, [("id", "5"), ("idType", "weekly")]),
        "/slots/5Type/:id"
    );
}

#[test]
fn test_json_params_follow_insertion_order() {
    let params = serde_json::json!({ "id": 42, "kind": "pony" });
    let params = params.as_object().unwrap();

    assert_eq!(
        build_endpoint_json("/horses/:id/:kind", params),
        "/horses/42/pony"
    );
}

#[test]
fn test_catalog_paths() {
    assert_eq!(ApiResource::Packages.list(), "/packages");
    assert_eq!(ApiResource::Packages.create(), "/packages");
    assert_eq!(ApiResource::Riders.update(), "/riders/:id");
    assert_eq!(build_endpoint(RIDER_PACKAGES, [("id", 3)]), "/riders/3/packages");
    assert_eq!(ApiResource::Lessons.item_path("abc"), "/lessons/abc");
}
