mod v1;

use warp::Filter;

pub fn api() -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path("api")
        .and(v1::api_v1())
        .and(warp::path::end())
}

// -------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_route_does_not_match() {
        let filter = api();
        assert!(
            !warp::test::request()
                .method("GET")
                .path("/api/v1/nope")
                .matches(&filter)
                .await
        );
    }

    #[tokio::test]
    async fn catalog_rejects_non_get_methods() {
        let filter = api();
        assert!(
            !warp::test::request()
                .method("DELETE")
                .path("/api/v1/mobil/available")
                .matches(&filter)
                .await
        );
    }

    #[tokio::test]
    async fn mobil_detail_requires_a_uuid_segment() {
        let filter = api();
        assert!(
            !warp::test::request()
                .method("GET")
                .path("/api/v1/mobil/not-a-uuid")
                .matches(&filter)
                .await
        );
    }

    #[tokio::test]
    async fn deposit_requires_post() {
        let filter = api();
        assert!(
            !warp::test::request()
                .method("GET")
                .path("/api/v1/rental/deposit")
                .matches(&filter)
                .await
        );
    }

    #[tokio::test]
    async fn deposit_without_session_is_401_with_payment_return_path() {
        let filter = api();
        let body = serde_json::json!({
            "id_mobil": "6f9619ff-8b86-d011-b42d-00c04fc964ff",
            "metode_bayar": "credit-card"
        });
        let resp = warp::test::request()
            .method("POST")
            .path("/api/v1/rental/deposit")
            .json(&body)
            .reply(&filter)
            .await;
        assert_eq!(resp.status(), warp::http::StatusCode::UNAUTHORIZED);
        let parsed: serde_json::Value = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(
            parsed["redirect_to"],
            "/auth?returnTo=/payment/6f9619ff-8b86-d011-b42d-00c04fc964ff"
        );
    }

    #[tokio::test]
    async fn history_without_session_is_401_with_dashboard_return_path() {
        let filter = api();
        let resp = warp::test::request()
            .method("GET")
            .path("/api/v1/rental/history")
            .reply(&filter)
            .await;
        assert_eq!(resp.status(), warp::http::StatusCode::UNAUTHORIZED);
        let parsed: serde_json::Value = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(parsed["redirect_to"], "/auth?returnTo=/dashboard");
    }

    #[tokio::test]
    async fn login_rejects_malformed_body_before_any_handler() {
        let filter = api();
        assert!(
            !warp::test::request()
                .method("POST")
                .path("/api/v1/user/login")
                .body("definitely not json")
                .matches(&filter)
                .await
        );
    }
}
