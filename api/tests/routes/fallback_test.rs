#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, send};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn unknown_route_returns_error_envelope() {
        let (app, _db) = make_test_app().await;

        let (status, json) = send(&app, "GET", "/api/teachers", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["errors"][0]["status"], "404");
        assert_eq!(json["errors"][0]["title"], "Route not found");
    }

    #[tokio::test]
    async fn path_outside_api_is_not_found() {
        let (app, _db) = make_test_app().await;

        let (status, json) = send(&app, "GET", "/students", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(json["errors"][0]["description"].as_str().unwrap().contains("/students"));
    }
}
