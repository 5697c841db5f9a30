#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, send};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn create_course_fills_defaults() {
        let (app, _db) = make_test_app().await;

        let (status, json) = send(
            &app,
            "POST",
            "/api/courses",
            Some(json!({"name": "Databases", "code": "DB101"})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["data"]["type"], "courses");
        assert_eq!(
            json["data"]["attributes"],
            json!({"name": "Databases", "code": "DB101", "description": "", "students": []})
        );
    }

    #[tokio::test]
    async fn create_course_without_name_is_400() {
        let (app, _db) = make_test_app().await;

        let (status, json) = send(&app, "POST", "/api/courses", Some(json!({"code": "DB101"}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error = &json["errors"][0];
        assert_eq!(error["status"], "400");
        assert_eq!(error["title"], "Problem with the data");
        assert!(error["description"].as_str().unwrap().contains("name is required"));
    }

    #[tokio::test]
    async fn create_course_with_bad_url_is_400() {
        let (app, _db) = make_test_app().await;

        let (status, _) = send(
            &app,
            "POST",
            "/api/courses",
            Some(json!({"name": "Databases", "url": "not a url"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_response_keeps_roster_ids() {
        let (app, _db) = make_test_app().await;
        let (_, ana) = send(&app, "POST", "/api/students", Some(json!({"name": "Ana"}))).await;
        let ana_id = ana["data"]["id"].clone();

        let (status, json) = send(
            &app,
            "POST",
            "/api/courses",
            Some(json!({"name": "Databases", "students": [ana_id]})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["data"]["attributes"]["students"], json!([ana_id]));
    }
}
