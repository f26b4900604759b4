//! Chat turns and conversation history over HTTP

#[cfg(test)]
mod tests {
    use crate::common::app::ASSISTANT_REPLY;
    use crate::common::providers::ScriptedCompletion;
    use crate::common::{TestApp, UserFactory};
    use crate::signup;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use lingua_gateway::core::assistant::{ChatRole, EMERGENCY_DISCLAIMER};
    use lingua_gateway::server::HttpServer;
    use serde_json::{Value, json};
    use uuid::Uuid;

    #[actix_web::test]
    async fn test_first_turn_creates_conversation() {
        let ctx = TestApp::new().await;
        let app = test::init_service(HttpServer::create_app(ctx.data())).await;
        let session = signup!(app, UserFactory::create());

        let resp = test::call_service(
            &app,
            session
                .post("/api/v1/chat")
                .set_json(json!({ "message": "I have a mild headache", "language": "en" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"]["role"], "assistant");
        assert_eq!(body["message"]["content"], ASSISTANT_REPLY);
        assert_eq!(body["conversationId"], body["conversation"]["id"]);

        let conversation = &body["conversation"];
        assert_eq!(conversation["title"], "I have a mild headache");
        let messages = conversation["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "user");
        assert_eq!(messages[0]["language"], "en");
        assert_eq!(messages[1]["content"], ASSISTANT_REPLY);

        let prompt = &ctx.completion.prompts()[0];
        assert_eq!(prompt.len(), 2);
        assert_eq!(prompt[0].role, ChatRole::System);
        assert_eq!(prompt[1].content, "I have a mild headache");
    }

    #[actix_web::test]
    async fn test_follow_up_appends_two_messages_in_order() {
        let ctx = TestApp::new().await;
        let app = test::init_service(HttpServer::create_app(ctx.data())).await;
        let session = signup!(app, UserFactory::create());

        let first: Value = test::call_and_read_body_json(
            &app,
            session
                .post("/api/v1/chat")
                .set_json(json!({ "message": "first question", "language": "en" }))
                .to_request(),
        )
        .await;
        let conversation_id = first["conversationId"].as_str().unwrap().to_string();

        let second: Value = test::call_and_read_body_json(
            &app,
            session
                .post("/api/v1/chat")
                .set_json(json!({
                    "conversationId": conversation_id,
                    "message": "second question",
                    "language": "en",
                }))
                .to_request(),
        )
        .await;
        assert_eq!(second["conversationId"], conversation_id.as_str());

        let contents: Vec<&str> = second["conversation"]["messages"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["content"].as_str().unwrap())
            .collect();
        assert_eq!(
            contents,
            ["first question", ASSISTANT_REPLY, "second question", ASSISTANT_REPLY]
        );

        // History is replayed to the model before the new text
        let prompt = &ctx.completion.prompts()[1];
        let replayed: Vec<&str> = prompt.iter().skip(1).map(|m| m.content.as_str()).collect();
        assert_eq!(
            replayed,
            ["first question", ASSISTANT_REPLY, "second question"]
        );
    }

    #[actix_web::test]
    async fn test_emergency_reply_carries_disclaimer() {
        let ctx = TestApp::new().await;
        let app = test::init_service(HttpServer::create_app(ctx.data())).await;
        let session = signup!(app, UserFactory::create());

        let body: Value = test::call_and_read_body_json(
            &app,
            session
                .post("/api/v1/chat")
                .set_json(json!({ "message": "I have CHEST PAIN since morning", "language": "en" }))
                .to_request(),
        )
        .await;

        let expected = format!("{}{}", EMERGENCY_DISCLAIMER, ASSISTANT_REPLY);
        assert_eq!(body["message"]["content"], expected.as_str());

        let id: Uuid = body["conversationId"].as_str().unwrap().parse().unwrap();
        let stored = ctx
            .state
            .database
            .find_conversation_for_user(id, session.user_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.messages[1].content, expected);
    }

    #[actix_web::test]
    async fn test_assistant_failure_persists_nothing() {
        let ctx = TestApp::builder()
            .completion(ScriptedCompletion::failing())
            .build()
            .await;
        let app = test::init_service(HttpServer::create_app(ctx.data())).await;
        let session = signup!(app, UserFactory::create());

        let resp = test::call_service(
            &app,
            session
                .post("/api/v1/chat")
                .set_json(json!({ "message": "hello", "language": "en" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().starts_with("AI service error"));

        assert_eq!(ctx.state.database.count_conversations().await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_unknown_or_malformed_conversation_is_not_found() {
        let ctx = TestApp::new().await;
        let app = test::init_service(HttpServer::create_app(ctx.data())).await;
        let session = signup!(app, UserFactory::create());

        for id in [Uuid::new_v4().to_string(), "not-an-id".to_string()] {
            let resp = test::call_service(
                &app,
                session
                    .post("/api/v1/chat")
                    .set_json(json!({ "conversationId": id, "message": "hi", "language": "en" }))
                    .to_request(),
            )
            .await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], "Conversation not found");
        }
        assert!(ctx.completion.prompts().is_empty());
    }

    #[actix_web::test]
    async fn test_conversations_are_private() {
        let ctx = TestApp::new().await;
        let app = test::init_service(HttpServer::create_app(ctx.data())).await;
        let owner = signup!(app, UserFactory::create());
        let stranger = signup!(app, UserFactory::create());

        let body: Value = test::call_and_read_body_json(
            &app,
            owner
                .post("/api/v1/chat")
                .set_json(json!({ "message": "private matter", "language": "en" }))
                .to_request(),
        )
        .await;
        let uri = format!(
            "/api/v1/conversations/{}",
            body["conversationId"].as_str().unwrap()
        );

        let resp = test::call_service(&app, stranger.get(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let listed: Value =
            test::call_and_read_body_json(&app, stranger.get("/api/v1/conversations").to_request())
                .await;
        assert!(listed["conversations"].as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_fetching_conversation_is_stable() {
        let ctx = TestApp::new().await;
        let app = test::init_service(HttpServer::create_app(ctx.data())).await;
        let session = signup!(app, UserFactory::create());

        let body: Value = test::call_and_read_body_json(
            &app,
            session
                .post("/api/v1/chat")
                .set_json(json!({ "message": "how do I say thank you in Igbo?", "language": "en" }))
                .to_request(),
        )
        .await;
        let uri = format!(
            "/api/v1/conversations/{}",
            body["conversationId"].as_str().unwrap()
        );

        let first: Value = test::call_and_read_body_json(&app, session.get(&uri).to_request()).await;
        let second: Value = test::call_and_read_body_json(&app, session.get(&uri).to_request()).await;
        assert_eq!(first, second);
        assert_eq!(first["conversation"]["messages"].as_array().unwrap().len(), 2);

        let listed: Value =
            test::call_and_read_body_json(&app, session.get("/api/v1/conversations").to_request())
                .await;
        assert_eq!(listed["conversations"].as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_malformed_conversation_path_is_bad_request() {
        let ctx = TestApp::new().await;
        let app = test::init_service(HttpServer::create_app(ctx.data())).await;
        let session = signup!(app, UserFactory::create());

        let resp = test::call_service(
            &app,
            session.get("/api/v1/conversations/not-an-id").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid conversation ID");
    }

    #[actix_web::test]
    async fn test_chat_requires_message_and_language() {
        let ctx = TestApp::new().await;
        let app = test::init_service(HttpServer::create_app(ctx.data())).await;
        let session = signup!(app, UserFactory::create());

        for payload in [json!({ "language": "en" }), json!({ "message": "hi" })] {
            let resp = test::call_service(
                &app,
                session.post("/api/v1/chat").set_json(&payload).to_request(),
            )
            .await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "payload: {}", payload);
        }
    }
}
