//! Authentication, rate limiting and body handling across the middleware stack

#[cfg(test)]
mod tests {
    use crate::common::{TestApp, UserFactory};
    use crate::signup;
    use actix_web::http::StatusCode;
    use actix_web::http::header::CONTENT_TYPE;
    use actix_web::test::{self, TestRequest};
    use lingua_gateway::server::HttpServer;
    use serde_json::Value;

    #[actix_web::test]
    async fn test_health_is_public() {
        let ctx = TestApp::new().await;
        let app = test::init_service(HttpServer::create_app(ctx.data())).await;

        let resp = test::call_service(&app, TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get("Server").unwrap(), "lingua-gateway");

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["database"], true);
        assert_eq!(body["build"]["version"], lingua_gateway::VERSION);
    }

    #[actix_web::test]
    async fn test_missing_token_is_unauthorized() {
        let ctx = TestApp::new().await;
        let app = test::init_service(HttpServer::create_app(ctx.data())).await;

        for uri in ["/api/v1/translations", "/api/v1/auth/me", "/api/v1/admin/stats"] {
            let resp = test::call_service(&app, TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "uri: {}", uri);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], "Missing authorization header");
        }
    }

    #[actix_web::test]
    async fn test_bad_tokens_are_unauthorized() {
        let ctx = TestApp::new().await;
        let app = test::init_service(HttpServer::create_app(ctx.data())).await;

        for header in ["Basic dXNlcjpwYXNz", "Bearer not.a.jwt", "Bearer "] {
            let req = TestRequest::get()
                .uri("/api/v1/translations")
                .insert_header(("Authorization", header))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "header: {}", header);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], "Invalid token");
        }
    }

    #[actix_web::test]
    async fn test_token_from_other_secret_is_rejected() {
        let ctx = TestApp::new().await;
        let other = TestApp::new().await;
        let app = test::init_service(HttpServer::create_app(ctx.data())).await;
        let other_app = test::init_service(HttpServer::create_app(other.data())).await;

        let foreign = signup!(other_app, UserFactory::create());
        let resp = test::call_service(&app, foreign.get("/api/v1/translations").to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_invalid_json_body() {
        let ctx = TestApp::new().await;
        let app = test::init_service(HttpServer::create_app(ctx.data())).await;
        let session = signup!(app, UserFactory::create());

        let req = session
            .post("/api/v1/translate")
            .insert_header((CONTENT_TYPE, "application/json"))
            .set_payload("{ not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid request body");
    }

    #[actix_web::test]
    async fn test_rate_limit_rejects_excess_requests() {
        let ctx = TestApp::builder().rate_limit(3).build().await;
        let app = test::init_service(HttpServer::create_app(ctx.data())).await;

        for _ in 0..3 {
            let resp =
                test::call_service(&app, TestRequest::get().uri("/health").to_request()).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }

        let resp = test::call_service(&app, TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Too many requests");
        assert_eq!(ctx.state.rate_limiter.rejected_requests(), 1);
    }

    #[actix_web::test]
    async fn test_unknown_route_is_not_found() {
        let ctx = TestApp::new().await;
        let app = test::init_service(HttpServer::create_app(ctx.data())).await;
        let session = signup!(app, UserFactory::create());

        let resp = test::call_service(&app, session.get("/api/v1/nope").to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
