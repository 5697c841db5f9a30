#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, send};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn patch_merges_supplied_fields() {
        let (app, _db) = make_test_app().await;
        let (_, created) = send(
            &app,
            "POST",
            "/api/students",
            Some(json!({"name": "Ana", "email": "ana@example.com"})),
        )
        .await;
        let id = created["data"]["id"].as_str().unwrap();

        let (status, json) = send(
            &app,
            "PATCH",
            &format!("/api/students/{id}"),
            Some(json!({"name": "Ana Maria"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["id"], id);
        assert_eq!(
            json["data"]["attributes"],
            json!({"name": "Ana Maria", "email": "ana@example.com"})
        );
    }

    #[tokio::test]
    async fn patch_cannot_change_the_id() {
        let (app, _db) = make_test_app().await;
        let (_, created) = send(&app, "POST", "/api/students", Some(json!({"name": "Ana"}))).await;
        let id = created["data"]["id"].as_str().unwrap();

        let (status, json) = send(
            &app,
            "PATCH",
            &format!("/api/students/{id}"),
            Some(json!({"id": "other", "_id": "other"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["id"], id);
        assert_eq!(json["data"]["attributes"], json!({"name": "Ana"}));
    }

    #[tokio::test]
    async fn patch_unknown_id_is_404() {
        let (app, _db) = make_test_app().await;

        let (status, json) = send(
            &app,
            "PATCH",
            "/api/students/missing",
            Some(json!({"name": "Nobody"})),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            json["errors"][0]["description"],
            "We could not find a student with id: missing"
        );
    }

    #[tokio::test]
    async fn patch_with_invalid_field_is_400() {
        let (app, _db) = make_test_app().await;
        let (_, created) = send(&app, "POST", "/api/students", Some(json!({"name": "Ana"}))).await;
        let id = created["data"]["id"].as_str().unwrap();

        let (status, _) = send(
            &app,
            "PATCH",
            &format!("/api/students/{id}"),
            Some(json!({"email": "nope"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn patch_unknown_id_without_body_is_404() {
        let (app, _db) = make_test_app().await;

        let (status, json) = send(&app, "PATCH", "/api/students/missing", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            json["errors"][0]["description"],
            "We could not find a student with id: missing"
        );
    }

    #[tokio::test]
    async fn patch_existing_id_without_body_is_400() {
        let (app, _db) = make_test_app().await;
        let (_, created) = send(&app, "POST", "/api/students", Some(json!({"name": "Ana"}))).await;
        let id = created["data"]["id"].as_str().unwrap();

        let (status, json) = send(&app, "PATCH", &format!("/api/students/{id}"), None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["errors"][0]["status"], "400");
    }
}
