//! Admin dashboard endpoints over HTTP

#[cfg(test)]
mod tests {
    use crate::common::app::ADMIN_EMAIL;
    use crate::common::{Session, TestApp, TranslationFactory, UserFactory};
    use crate::signup;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use chrono::{Duration, Utc};
    use lingua_gateway::core::models::Feedback;
    use lingua_gateway::server::HttpServer;
    use serde_json::Value;
    use uuid::Uuid;

    async fn seed_feedback(ctx: &TestApp, session: &Session, ratings: &[i32]) {
        for rating in ratings {
            ctx.state
                .database
                .create_feedback(&Feedback::new(Uuid::new_v4(), session.user_id, *rating, None))
                .await
                .unwrap();
        }
    }

    #[actix_web::test]
    async fn test_non_admin_is_forbidden() {
        let ctx = TestApp::new().await;
        let app = test::init_service(HttpServer::create_app(ctx.data())).await;
        let session = signup!(app, UserFactory::create());

        for uri in [
            "/api/v1/admin/stats",
            "/api/v1/admin/users",
            "/api/v1/admin/feedbacks",
            "/api/v1/admin/translation-languages",
        ] {
            let resp = test::call_service(&app, session.get(uri).to_request()).await;
            assert_eq!(resp.status(), StatusCode::FORBIDDEN, "uri: {}", uri);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], "Admin access required");
        }
    }

    #[actix_web::test]
    async fn test_stats_counts_everything() {
        let ctx = TestApp::new().await;
        let app = test::init_service(HttpServer::create_app(ctx.data())).await;
        let admin = signup!(app, UserFactory::with_email(ADMIN_EMAIL));
        let user = signup!(app, UserFactory::create());

        ctx.state
            .database
            .create_translation(&TranslationFactory::for_user(user.user_id))
            .await
            .unwrap();
        let mut stale = TranslationFactory::for_user(admin.user_id);
        stale.created_at = Utc::now() - Duration::days(30);
        ctx.state.database.create_translation(&stale).await.unwrap();
        seed_feedback(&ctx, &user, &[5, 2]).await;

        let body: Value =
            test::call_and_read_body_json(&app, admin.get("/api/v1/admin/stats").to_request()).await;
        let stats = &body["stats"];
        assert_eq!(stats["totalUsers"], 2);
        assert_eq!(stats["activeUsers"], 1);
        assert_eq!(stats["totalTranslations"], 2);
        assert_eq!(stats["totalConversations"], 0);
        assert_eq!(stats["totalFeedbacks"], 2);
        assert_eq!(stats["avgFeedbackRating"], 3.5);
    }

    #[actix_web::test]
    async fn test_users_page_and_search() {
        let ctx = TestApp::new().await;
        let app = test::init_service(HttpServer::create_app(ctx.data())).await;
        let admin = signup!(app, UserFactory::with_email(ADMIN_EMAIL));
        for _ in 0..4 {
            signup!(app, UserFactory::create());
        }

        let body: Value = test::call_and_read_body_json(
            &app,
            admin.get("/api/v1/admin/users?page=2&limit=2").to_request(),
        )
        .await;
        assert_eq!(body["page"], 2);
        assert_eq!(body["limit"], 2);
        assert_eq!(body["total"], 5);
        assert_eq!(body["totalPages"], 3);
        assert_eq!(body["users"].as_array().unwrap().len(), 2);

        let body: Value = test::call_and_read_body_json(
            &app,
            admin.get("/api/v1/admin/users?q=ADMIN@").to_request(),
        )
        .await;
        assert_eq!(body["total"], 1);
        assert_eq!(body["users"][0]["email"], ADMIN_EMAIL);
        assert!(body["users"][0].get("passwordHash").is_none());
    }

    #[actix_web::test]
    async fn test_pagination_falls_back_to_defaults() {
        let ctx = TestApp::new().await;
        let app = test::init_service(HttpServer::create_app(ctx.data())).await;
        let admin = signup!(app, UserFactory::with_email(ADMIN_EMAIL));

        let body: Value = test::call_and_read_body_json(
            &app,
            admin
                .get("/api/v1/admin/users?page=zero&limit=500")
                .to_request(),
        )
        .await;
        assert_eq!(body["page"], 1);
        assert_eq!(body["limit"], 20);
        assert_eq!(body["totalPages"], 1);
    }

    #[actix_web::test]
    async fn test_huge_page_returns_empty_listing() {
        let ctx = TestApp::new().await;
        let app = test::init_service(HttpServer::create_app(ctx.data())).await;
        let admin = signup!(app, UserFactory::with_email(ADMIN_EMAIL));
        seed_feedback(&ctx, &admin, &[4]).await;

        let resp = test::call_service(
            &app,
            admin
                .get("/api/v1/admin/users?page=500000000000000000")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["total"], 1);
        assert!(body["users"].as_array().unwrap().is_empty());

        let resp = test::call_service(
            &app,
            admin
                .get("/api/v1/admin/feedbacks?page=18446744073709551615&limit=100")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["total"], 1);
        assert!(body["feedbacks"].as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_user_search_matches_wildcards_literally() {
        let ctx = TestApp::new().await;
        let app = test::init_service(HttpServer::create_app(ctx.data())).await;
        let admin = signup!(app, UserFactory::with_email(ADMIN_EMAIL));
        signup!(app, UserFactory::with_email("under_score@example.com"));
        signup!(app, UserFactory::create());

        let body: Value = test::call_and_read_body_json(
            &app,
            admin.get("/api/v1/admin/users?q=_").to_request(),
        )
        .await;
        assert_eq!(body["total"], 1);
        assert_eq!(body["users"][0]["email"], "under_score@example.com");

        let body: Value = test::call_and_read_body_json(
            &app,
            admin.get("/api/v1/admin/users?q=%25").to_request(),
        )
        .await;
        assert_eq!(body["total"], 0);
    }

    #[actix_web::test]
    async fn test_feedbacks_ignore_invalid_bounds() {
        let ctx = TestApp::new().await;
        let app = test::init_service(HttpServer::create_app(ctx.data())).await;
        let admin = signup!(app, UserFactory::with_email(ADMIN_EMAIL));
        seed_feedback(&ctx, &admin, &[1, 3, 5]).await;

        let body: Value = test::call_and_read_body_json(
            &app,
            admin
                .get("/api/v1/admin/feedbacks?from=yesterday&to=never")
                .to_request(),
        )
        .await;
        assert_eq!(body["total"], 3);

        let future = (Utc::now() + Duration::days(1)).to_rfc3339().replace('+', "%2B");
        let body: Value = test::call_and_read_body_json(
            &app,
            admin
                .get(&format!("/api/v1/admin/feedbacks?from={}", future))
                .to_request(),
        )
        .await;
        assert_eq!(body["total"], 0);
        assert!(body["feedbacks"].as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_analytics_series() {
        let ctx = TestApp::new().await;
        let app = test::init_service(HttpServer::create_app(ctx.data())).await;
        let admin = signup!(app, UserFactory::with_email(ADMIN_EMAIL));

        for lang in ["yo", "yo", "ig"] {
            ctx.state
                .database
                .create_translation(&TranslationFactory::to_language(admin.user_id, lang))
                .await
                .unwrap();
        }
        let mut old = TranslationFactory::to_language(admin.user_id, "ha");
        old.created_at = Utc::now() - Duration::days(60);
        ctx.state.database.create_translation(&old).await.unwrap();
        seed_feedback(&ctx, &admin, &[4, 4, 1]).await;

        let growth: Value = test::call_and_read_body_json(
            &app,
            admin.get("/api/v1/admin/user-growth?range=7d").to_request(),
        )
        .await;
        assert_eq!(growth["series"][0]["count"], 1);

        let volume: Value = test::call_and_read_body_json(
            &app,
            admin.get("/api/v1/admin/translation-volume").to_request(),
        )
        .await;
        let total: u64 = volume["series"]
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["count"].as_u64().unwrap())
            .sum();
        assert_eq!(total, 3);

        let wide: Value = test::call_and_read_body_json(
            &app,
            admin
                .get("/api/v1/admin/translation-languages?range=90d")
                .to_request(),
        )
        .await;
        let languages = wide["languages"].as_array().unwrap();
        assert_eq!(languages.len(), 3);
        assert_eq!(languages[0]["language"], "yo");
        assert_eq!(languages[0]["count"], 2);

        let distribution: Value = test::call_and_read_body_json(
            &app,
            admin.get("/api/v1/admin/feedback-distribution").to_request(),
        )
        .await;
        let buckets = distribution["distribution"].as_array().unwrap();
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0]["rating"], 1);
        assert_eq!(buckets[1]["rating"], 4);
        assert_eq!(buckets[1]["count"], 2);
    }
}
