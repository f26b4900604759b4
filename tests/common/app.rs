//! In-process application
//!
//! Builds an [`AppState`] over an in-memory database and provider doubles.
//! Tests turn it into a service with `actix_web::test::init_service`.

use super::database::TestDatabase;
use super::fixtures::TestUser;
use super::providers::{FixedSynthesizer, ScriptedCompletion, ScriptedTranslator};
use actix_web::test::TestRequest;
use actix_web::web;
use lingua_gateway::Config;
use lingua_gateway::core::assistant::AssistantBridge;
use lingua_gateway::core::speech::{SpeechSelector, SpeechSynthesizer};
use lingua_gateway::core::translation::{TranslationChain, Translator};
use lingua_gateway::server::AppState;
use lingua_gateway::server::routes::auth::AuthResponse;
use std::sync::Arc;
use uuid::Uuid;

/// Email granted the admin role in every test app
pub const ADMIN_EMAIL: &str = "admin@example.com";

/// Canned assistant reply
pub const ASSISTANT_REPLY: &str = "Drink plenty of water and rest.";

/// Canned translation
pub const TRANSLATED_TEXT: &str = "Ẹ káàrọ̀";

/// Shared state plus handles to the doubles behind it
pub struct TestApp {
    pub state: AppState,
    pub completion: Arc<ScriptedCompletion>,
}

impl TestApp {
    /// Default doubles, rate limiting off
    pub async fn new() -> Self {
        TestAppBuilder::default().build().await
    }

    pub fn builder() -> TestAppBuilder {
        TestAppBuilder::default()
    }

    /// State handle for `HttpServer::create_app`
    pub fn data(&self) -> web::Data<AppState> {
        web::Data::new(self.state.clone())
    }
}

/// Knobs for the in-process application
pub struct TestAppBuilder {
    translators: Vec<Arc<dyn Translator>>,
    completion: Arc<ScriptedCompletion>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    rate_limit: Option<u32>,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            translators: vec![Arc::new(ScriptedTranslator::ok(TRANSLATED_TEXT))],
            completion: Arc::new(ScriptedCompletion::replying(ASSISTANT_REPLY)),
            synthesizer: Arc::new(FixedSynthesizer::default()),
            rate_limit: None,
        }
    }
}

impl TestAppBuilder {
    pub fn translators(mut self, translators: Vec<Arc<dyn Translator>>) -> Self {
        self.translators = translators;
        self
    }

    pub fn completion(mut self, completion: ScriptedCompletion) -> Self {
        self.completion = Arc::new(completion);
        self
    }

    pub fn synthesizer(mut self, synthesizer: impl SpeechSynthesizer + 'static) -> Self {
        self.synthesizer = Arc::new(synthesizer);
        self
    }

    /// Enable rate limiting at `requests` per minute
    pub fn rate_limit(mut self, requests: u32) -> Self {
        self.rate_limit = Some(requests);
        self
    }

    pub async fn build(self) -> TestApp {
        let mut config = Config::default();
        config.gateway.auth.admin_emails = vec![ADMIN_EMAIL.to_string()];
        config.gateway.rate_limit.enabled = self.rate_limit.is_some();
        if let Some(requests) = self.rate_limit {
            config.gateway.rate_limit.requests = requests;
        }

        let database = TestDatabase::new().await.into_inner();
        let speech = SpeechSelector::new(
            false,
            self.synthesizer.clone(),
            None,
            self.synthesizer,
        );
        let assistant = AssistantBridge::new(self.completion.clone());

        let state = AppState::new(
            config,
            database,
            TranslationChain::new(self.translators),
            speech,
            assistant,
        );

        TestApp {
            state,
            completion: self.completion,
        }
    }
}

/// A signed-in caller
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: Uuid,
    pub token: String,
}

impl From<AuthResponse> for Session {
    fn from(response: AuthResponse) -> Self {
        Self {
            user_id: response.user.id,
            token: response.token,
        }
    }
}

impl Session {
    pub fn bearer(&self) -> (&'static str, String) {
        ("Authorization", format!("Bearer {}", self.token))
    }

    pub fn get(&self, uri: &str) -> TestRequest {
        TestRequest::get().uri(uri).insert_header(self.bearer())
    }

    pub fn post(&self, uri: &str) -> TestRequest {
        TestRequest::post().uri(uri).insert_header(self.bearer())
    }
}

/// Signup request for `user`
pub fn signup_request(user: &TestUser) -> TestRequest {
    TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(user.signup_body())
}

/// Sign `user` up against `$service` and return a [`Session`]
#[macro_export]
macro_rules! signup {
    ($service:expr, $user:expr) => {{
        let response: lingua_gateway::server::routes::auth::AuthResponse =
            actix_web::test::call_and_read_body_json(
                &$service,
                $crate::common::app::signup_request(&$user).to_request(),
            )
            .await;
        $crate::common::Session::from(response)
    }};
}
