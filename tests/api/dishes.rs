//! Dish pipelines.

use grubdash::{HandlerError, Request};
use serde_json::json;

use crate::support::{body, dish_data, error_message, routed, Harness};

#[test]
fn list_starts_empty() {
    let h = Harness::new();
    let response = h.dispatch("dishes.list", Request::new()).unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.data(), Some(&json!([])));
}

#[test]
fn create_assigns_fresh_id_and_is_readable() {
    let h = Harness::new();
    let response = h.dispatch("dishes.create", body(dish_data())).unwrap();
    assert_eq!(response.status, 201);

    let data = response.data().unwrap().clone();
    let id = data["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert_eq!(data["name"], "Pizza");
    assert_eq!(data["price"], 10);

    let second = h.create_dish();
    assert_ne!(second, id);

    let read = h.dispatch("dishes.read", Request::new().with_route_id(&id)).unwrap();
    assert_eq!(read.status, 200);
    assert_eq!(read.data(), Some(&data));
}

#[test]
fn create_ignores_client_id() {
    let h = Harness::new();
    let mut data = dish_data();
    data["id"] = json!("chosen-by-client");
    let response = h.dispatch("dishes.create", body(data)).unwrap();
    assert_ne!(response.data().unwrap()["id"], "chosen-by-client");
}

#[test]
fn list_returns_store_order() {
    let h = Harness::new();
    let first = h.create_dish();
    let second = h.create_dish();

    let response = h.dispatch("dishes.list", Request::new()).unwrap();
    let ids: Vec<&str> = response.data().unwrap().as_array().unwrap()
        .iter()
        .map(|d| d["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![first.as_str(), second.as_str()]);
}

#[test]
fn create_missing_field_appends_nothing() {
    let h = Harness::new();
    for field in ["name", "description", "price", "image_url"] {
        let mut data = dish_data();
        data.as_object_mut().unwrap().remove(field);
        let err = h.dispatch("dishes.create", body(data)).unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(error_message(&err), format!("Dish must include a {}", field));

        let mut data = dish_data();
        data[field] = json!("");
        let err = h.dispatch("dishes.create", body(data)).unwrap_err();
        assert_eq!(error_message(&err), format!("Dish must include a {}", field));
    }
    assert_eq!(h.dish_count(), 0);
}

#[test]
fn create_without_body_reports_first_field() {
    let h = Harness::new();
    let err = h.dispatch("dishes.create", Request::new()).unwrap_err();
    assert_eq!(err, HandlerError::Invalid("Dish must include a name".into()));
}

#[test]
fn price_validation() {
    let h = Harness::new();

    let mut data = dish_data();
    data["price"] = json!(0);
    // zero is falsy, so the presence check fires first
    let err = h.dispatch("dishes.create", body(data)).unwrap_err();
    assert_eq!(error_message(&err), "Dish must include a price");

    let mut data = dish_data();
    data["price"] = json!(-1);
    let err = h.dispatch("dishes.create", body(data)).unwrap_err();
    assert_eq!(error_message(&err), "Given price is equal to or less than $0.00");

    let mut data = dish_data();
    data["price"] = json!(4.99);
    let err = h.dispatch("dishes.create", body(data)).unwrap_err();
    assert_eq!(error_message(&err), "Given price is not an integer");

    let mut data = dish_data();
    data["price"] = json!("17");
    let err = h.dispatch("dishes.create", body(data)).unwrap_err();
    assert_eq!(error_message(&err), "Given price is not an integer");

    assert_eq!(h.dish_count(), 0);

    let mut data = dish_data();
    data["price"] = json!(1);
    assert_eq!(h.dispatch("dishes.create", body(data)).unwrap().status, 201);
}

#[test]
fn unknown_id_is_404_everywhere() {
    let h = Harness::new();
    h.create_dish();

    let err = h.dispatch("dishes.read", Request::new().with_route_id("nope")).unwrap_err();
    assert_eq!(err, HandlerError::NotFound("Dish id not found nope".into()));

    let err = h.dispatch("dishes.update", routed("nope", dish_data())).unwrap_err();
    assert_eq!(err.status_code(), 404);
    assert_eq!(h.dish_count(), 1);
}

#[test]
fn update_overwrites_mutable_fields() {
    let h = Harness::new();
    let id = h.create_dish();

    let data = json!({
        "name": "Calzone",
        "description": "Folded",
        "price": 12,
        "image_url": "y",
    });
    let response = h.dispatch("dishes.update", routed(&id, data)).unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(
        response.data(),
        Some(&json!({
            "id": id,
            "name": "Calzone",
            "description": "Folded",
            "price": 12,
            "image_url": "y",
        }))
    );

    let read = h.dispatch("dishes.read", Request::new().with_route_id(&id)).unwrap();
    assert_eq!(read.data(), response.data());
    assert_eq!(h.dish_count(), 1);
}

#[test]
fn update_accepts_matching_or_absent_body_id() {
    let h = Harness::new();
    let id = h.create_dish();

    let mut data = dish_data();
    data["id"] = json!(id.clone());
    assert_eq!(h.dispatch("dishes.update", routed(&id, data)).unwrap().status, 200);

    let mut data = dish_data();
    data["id"] = json!("");
    assert_eq!(h.dispatch("dishes.update", routed(&id, data)).unwrap().status, 200);
}

#[test]
fn update_rejects_mismatched_body_id() {
    let h = Harness::new();
    let id = h.create_dish();

    let mut data = dish_data();
    data["id"] = json!("other");
    data["name"] = json!("Changed");
    let err = h.dispatch("dishes.update", routed(&id, data)).unwrap_err();
    assert_eq!(
        error_message(&err),
        format!("Dish id does not match route id. Dish: other, Route: {}", id)
    );

    let read = h.dispatch("dishes.read", Request::new().with_route_id(&id)).unwrap();
    assert_eq!(read.data().unwrap()["name"], "Pizza");
}

#[test]
fn update_validates_body() {
    let h = Harness::new();
    let id = h.create_dish();

    let mut data = dish_data();
    data["price"] = json!("17");
    let err = h.dispatch("dishes.update", routed(&id, data)).unwrap_err();
    assert_eq!(error_message(&err), "Given price is not an integer");

    let mut data = dish_data();
    data.as_object_mut().unwrap().remove("image_url");
    let err = h.dispatch("dishes.update", routed(&id, data)).unwrap_err();
    assert_eq!(error_message(&err), "Dish must include a image_url");
}

#[test]
fn create_rejects_non_string_text_fields() {
    let h = Harness::new();
    for field in ["name", "description", "image_url"] {
        let mut data = dish_data();
        data[field] = json!(5);
        let err = h.dispatch("dishes.create", body(data)).unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(error_message(&err), format!("Dish {} must be a string", field));
    }
    assert_eq!(h.dish_count(), 0);
}

#[test]
fn update_rejects_non_string_text_fields() {
    let h = Harness::new();
    let id = h.create_dish();
    for field in ["name", "description", "image_url"] {
        let mut data = dish_data();
        data[field] = json!({ "text": "Calzone" });
        let err = h.dispatch("dishes.update", routed(&id, data)).unwrap_err();
        assert_eq!(error_message(&err), format!("Dish {} must be a string", field));
    }

    let read = h.dispatch("dishes.read", Request::new().with_route_id(&id)).unwrap();
    assert_eq!(read.data().unwrap()["name"], "Pizza");
}

#[test]
fn dishes_have_no_delete() {
    let h = Harness::new();
    let id = h.create_dish();
    let err = h.dispatch("dishes.delete", Request::new().with_route_id(&id)).unwrap_err();
    assert!(matches!(err, HandlerError::UnknownOperation(_)));
    assert_eq!(h.dish_count(), 1);
}

#[test]
fn repeated_reads_are_identical() {
    let h = Harness::new();
    let id = h.create_dish();
    let a = h.dispatch("dishes.read", Request::new().with_route_id(&id)).unwrap();
    let b = h.dispatch("dishes.read", Request::new().with_route_id(&id)).unwrap();
    assert_eq!(a, b);
}
