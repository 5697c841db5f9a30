#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, send};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn patch_keeps_fields_put_resets_them() {
        let (app, _db) = make_test_app().await;
        let (_, created) = send(
            &app,
            "POST",
            "/api/courses",
            Some(json!({"name": "Databases", "description": "Relational theory", "code": "DB101"})),
        )
        .await;
        let id = created["data"]["id"].as_str().unwrap();
        let uri = format!("/api/courses/{id}");

        let (status, patched) = send(&app, "PATCH", &uri, Some(json!({"code": "DB102"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            patched["data"]["attributes"],
            json!({
                "name": "Databases",
                "description": "Relational theory",
                "code": "DB102",
                "students": []
            })
        );

        let (status, replaced) = send(&app, "PUT", &uri, Some(json!({"name": "Data Systems"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            replaced["data"]["attributes"],
            json!({"name": "Data Systems", "description": "", "students": []})
        );
    }

    #[tokio::test]
    async fn put_without_name_is_400_and_leaves_document_intact() {
        let (app, _db) = make_test_app().await;
        let (_, created) = send(&app, "POST", "/api/courses", Some(json!({"name": "Databases"}))).await;
        let id = created["data"]["id"].as_str().unwrap();
        let uri = format!("/api/courses/{id}");

        let (status, _) = send(&app, "PUT", &uri, Some(json!({"code": "DB101"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, read) = send(&app, "GET", &uri, None).await;
        assert_eq!(read["data"]["attributes"]["name"], "Databases");
    }

    #[tokio::test]
    async fn patch_roster_with_non_string_ids_is_400() {
        let (app, _db) = make_test_app().await;
        let (_, created) = send(&app, "POST", "/api/courses", Some(json!({"name": "Databases"}))).await;
        let id = created["data"]["id"].as_str().unwrap();

        let (status, _) = send(
            &app,
            "PATCH",
            &format!("/api/courses/{id}"),
            Some(json!({"students": [1, 2]})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn delete_course_returns_stored_roster_ids() {
        let (app, _db) = make_test_app().await;
        let (_, ana) = send(&app, "POST", "/api/students", Some(json!({"name": "Ana"}))).await;
        let ana_id = ana["data"]["id"].clone();
        let (_, created) = send(
            &app,
            "POST",
            "/api/courses",
            Some(json!({"name": "Databases", "students": [ana_id]})),
        )
        .await;
        let id = created["data"]["id"].as_str().unwrap();

        let (status, json) = send(&app, "DELETE", &format!("/api/courses/{id}"), None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["attributes"]["students"], json!([ana_id]));
    }
}
