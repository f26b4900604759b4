//! Signup, login and current-user flows over HTTP

#[cfg(test)]
mod tests {
    use crate::common::app::{ADMIN_EMAIL, signup_request};
    use crate::common::{TestApp, UserFactory};
    use crate::signup;
    use actix_web::http::StatusCode;
    use actix_web::test::{self, TestRequest};
    use lingua_gateway::core::models::UserRole;
    use lingua_gateway::server::HttpServer;
    use lingua_gateway::server::routes::auth::AuthResponse;
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn test_signup_issues_user_token() {
        let ctx = TestApp::new().await;
        let app = test::init_service(HttpServer::create_app(ctx.data())).await;
        let user = UserFactory::create();

        let resp = test::call_service(&app, signup_request(&user).to_request()).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: AuthResponse = test::read_body_json(resp).await;
        assert_eq!(body.user.email, user.email);
        assert_eq!(body.user.name, user.name);

        let claims = ctx.state.jwt.verify_token(&body.token).unwrap();
        assert_eq!(claims.sub, body.user.id);
        assert_eq!(claims.role, UserRole::User);
    }

    #[actix_web::test]
    async fn test_signup_response_hides_password_hash() {
        let ctx = TestApp::new().await;
        let app = test::init_service(HttpServer::create_app(ctx.data())).await;

        let body: Value = test::call_and_read_body_json(
            &app,
            signup_request(&UserFactory::create()).to_request(),
        )
        .await;
        let user = body["user"].as_object().unwrap();
        assert_eq!(user.len(), 3);
        assert!(!body.to_string().contains("argon2"));
    }

    #[actix_web::test]
    async fn test_admin_email_gets_admin_role() {
        let ctx = TestApp::new().await;
        let app = test::init_service(HttpServer::create_app(ctx.data())).await;

        let session = signup!(app, UserFactory::with_email(ADMIN_EMAIL));
        let claims = ctx.state.jwt.verify_token(&session.token).unwrap();
        assert_eq!(claims.role, UserRole::Admin);
    }

    #[actix_web::test]
    async fn test_duplicate_signup_is_conflict() {
        let ctx = TestApp::new().await;
        let app = test::init_service(HttpServer::create_app(ctx.data())).await;
        let user = UserFactory::create();

        let first = test::call_service(&app, signup_request(&user).to_request()).await;
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = test::call_service(&app, signup_request(&user).to_request()).await;
        assert_eq!(second.status(), StatusCode::CONFLICT);
        let body: Value = test::read_body_json(second).await;
        assert_eq!(body["error"], "User already exists");

        assert_eq!(ctx.state.database.count_users().await.unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_signup_validation_errors() {
        let ctx = TestApp::new().await;
        let app = test::init_service(HttpServer::create_app(ctx.data())).await;

        let cases = [
            json!({ "name": "A", "email": "a@example.com", "password": "secret-pass" }),
            json!({ "name": "Ada", "email": "not-an-email", "password": "secret-pass" }),
            json!({ "name": "Ada", "email": "ada@example.com", "password": "123" }),
            json!({ "email": "ada@example.com", "password": "secret-pass" }),
        ];
        for payload in cases {
            let req = TestRequest::post()
                .uri("/api/v1/auth/signup")
                .set_json(&payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "payload: {}", payload);
        }

        assert_eq!(ctx.state.database.count_users().await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_login_round_trip() {
        let ctx = TestApp::new().await;
        let app = test::init_service(HttpServer::create_app(ctx.data())).await;
        let user = UserFactory::create();
        let session = signup!(app, user);

        let req = TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(user.login_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: AuthResponse = test::read_body_json(resp).await;
        assert_eq!(body.user.id, session.user_id);
        assert!(ctx.state.jwt.verify_token(&body.token).is_ok());
    }

    #[actix_web::test]
    async fn test_login_failures_are_indistinguishable() {
        let ctx = TestApp::new().await;
        let app = test::init_service(HttpServer::create_app(ctx.data())).await;
        let user = UserFactory::create();
        signup!(app, user);

        let wrong_password = json!({ "email": user.email, "password": "not-the-password" });
        let unknown_email = json!({ "email": "nobody@example.com", "password": "secret-pass" });

        for payload in [wrong_password, unknown_email] {
            let req = TestRequest::post()
                .uri("/api/v1/auth/login")
                .set_json(&payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], "Invalid credentials");
        }
    }

    #[actix_web::test]
    async fn test_me_returns_profile() {
        let ctx = TestApp::new().await;
        let app = test::init_service(HttpServer::create_app(ctx.data())).await;
        let user = UserFactory::create();
        let session = signup!(app, user);

        let body: Value =
            test::call_and_read_body_json(&app, session.get("/api/v1/auth/me").to_request()).await;
        assert_eq!(body["user"]["email"], user.email.as_str());
        assert_eq!(body["user"]["role"], "user");
        assert!(body["user"].get("passwordHash").is_none());
    }

    #[actix_web::test]
    async fn test_me_for_deleted_account_is_not_found() {
        let ctx = TestApp::new().await;
        let app = test::init_service(HttpServer::create_app(ctx.data())).await;

        let token = ctx
            .state
            .jwt
            .create_token(uuid::Uuid::new_v4(), UserRole::User)
            .unwrap();
        let req = TestRequest::get()
            .uri("/api/v1/auth/me")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
