mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;
use uuid::Uuid;

// All of these run without a database: the JWT middleware rejects before
// any data-store call is made.

#[tokio::test]
async fn root_banner_responds() {
    let app = common::app();
    let res = common::send(&app, common::json_request(Method::GET, "/", None, None)).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = common::body_json(res).await;
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn mutation_without_identity_is_401() {
    let app = common::app();
    let store_id = Uuid::new_v4();

    let uris = [
        format!("/api/{}/billboards", store_id),
        format!("/api/{}/categories", store_id),
        format!("/api/{}/sizes", store_id),
        format!("/api/{}/colors", store_id),
        format!("/api/{}/products", store_id),
        "/api/stores".to_string(),
    ];

    for uri in uris {
        let res = common::send(
            &app,
            common::json_request(Method::POST, &uri, None, Some(json!({"name": "x"}))),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "POST {}", uri);

        let body = common::body_json(res).await;
        assert_eq!(body["error"], true);
        assert_eq!(body["code"], "UNAUTHENTICATED");
    }
}

#[tokio::test]
async fn patch_and_delete_without_identity_are_401() {
    let app = common::app();
    let store_id = Uuid::new_v4();
    let billboard_id = Uuid::new_v4();
    let uri = format!("/api/{}/billboards/{}", store_id, billboard_id);

    let res = common::send(
        &app,
        common::json_request(
            Method::PATCH,
            &uri,
            None,
            Some(json!({"label": "x", "imageUrl": "y"})),
        ),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = common::send(&app, common::json_request(Method::DELETE, &uri, None, None)).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn garbage_token_is_401() {
    let app = common::app();
    let store_id = Uuid::new_v4();

    let res = common::send(
        &app,
        common::json_request(
            Method::POST,
            &format!("/api/{}/billboards", store_id),
            Some("Bearer not-a-real-token"),
            Some(json!({"label": "x", "imageUrl": "y"})),
        ),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn non_bearer_scheme_is_401() {
    let app = common::app();

    let res = common::send(
        &app,
        common::json_request(
            Method::POST,
            "/api/stores",
            Some("Basic dXNlcjpwYXNz"),
            Some(json!({"name": "x"})),
        ),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_route_is_404() {
    let app = common::app();
    let res = common::send(
        &app,
        common::json_request(Method::GET, "/api/nope", None, None),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
