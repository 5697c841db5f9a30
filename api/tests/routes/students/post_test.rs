#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, send};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn create_student_returns_201_and_resource() {
        let (app, _db) = make_test_app().await;

        let (status, json) = send(&app, "POST", "/api/students", Some(json!({"name": "Ana"}))).await;

        assert_eq!(status, StatusCode::CREATED);
        let data = &json["data"];
        assert_eq!(data["type"], "students");
        assert!(!data["id"].as_str().unwrap().is_empty());
        assert_eq!(data["attributes"], json!({"name": "Ana"}));
    }

    #[tokio::test]
    async fn create_strips_unsafe_keys_and_client_id() {
        let (app, _db) = make_test_app().await;

        let (status, json) = send(
            &app,
            "POST",
            "/api/students",
            Some(json!({
                "id": "chosen-by-client",
                "_id": "forged",
                "$where": "1",
                "name": "Ben",
                "address": {"$gt": "", "city": "Lisbon"}
            })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_ne!(json["data"]["id"], "chosen-by-client");
        assert_eq!(
            json["data"]["attributes"],
            json!({"name": "Ben", "address": {"city": "Lisbon"}})
        );
    }

    #[tokio::test]
    async fn create_accepts_json_api_document() {
        let (app, _db) = make_test_app().await;

        let (status, json) = send(
            &app,
            "POST",
            "/api/students",
            Some(json!({"data": {"type": "students", "attributes": {"name": "Caro"}}})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["data"]["attributes"], json!({"name": "Caro"}));
    }

    #[tokio::test]
    async fn create_with_invalid_email_is_rejected() {
        let (app, _db) = make_test_app().await;

        let (status, json) = send(
            &app,
            "POST",
            "/api/students",
            Some(json!({"name": "Dee", "email": "not-an-email"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error = &json["errors"][0];
        assert_eq!(error["status"], "400");
        assert_eq!(error["title"], "Problem with the data");
        assert!(
            error["description"]
                .as_str()
                .unwrap()
                .starts_with("We were not able to save your data")
        );
    }

    #[tokio::test]
    async fn create_with_non_object_body_is_rejected() {
        let (app, _db) = make_test_app().await;

        let (status, json) = send(&app, "POST", "/api/students", Some(json!(["Ana"]))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["errors"][0]["status"], "400");
    }

    #[tokio::test]
    async fn create_unwraps_json_api_document_with_meta() {
        let (app, _db) = make_test_app().await;

        let (status, json) = send(
            &app,
            "POST",
            "/api/students",
            Some(json!({
                "data": {"type": "students", "attributes": {"name": "Eli"}},
                "meta": {"source": "import"}
            })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["data"]["attributes"], json!({"name": "Eli"}));
    }
}
