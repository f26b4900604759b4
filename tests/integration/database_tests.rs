//! Database integration tests
//!
//! Storage operations against a migrated in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::common::{TestDatabase, TranslationFactory, UserFactory};
    use crate::{assert_err, assert_ok};
    use chrono::{Duration, Utc};
    use lingua_gateway::GatewayError;
    use lingua_gateway::core::models::{
        Conversation, Feedback, Message, MessageRole, User, UserRole,
    };
    use lingua_gateway::storage::FeedbackFilter;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_database_health_check() {
        let db = TestDatabase::new().await;
        assert_ok!(db.db().health_check().await);
    }

    #[tokio::test]
    async fn test_user_round_trip() {
        let db = TestDatabase::new().await;
        let user = UserFactory::record(UserRole::Admin);

        assert_ok!(db.db().create_user(&user).await);

        let by_email = assert_ok!(db.db().find_user_by_email(&user.email).await).unwrap();
        assert_eq!(by_email.id, user.id);
        assert_eq!(by_email.role, UserRole::Admin);
        assert_eq!(by_email.password_hash, user.password_hash);

        let by_id = assert_ok!(db.db().find_user_by_id(user.id).await).unwrap();
        assert_eq!(by_id.email, user.email);

        assert!(assert_ok!(db.db().find_user_by_id(Uuid::new_v4()).await).is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let db = TestDatabase::new().await;
        let user = UserFactory::record(UserRole::User);
        assert_ok!(db.db().create_user(&user).await);

        let twin = User::new(
            "Twin".to_string(),
            user.email.clone(),
            "other-hash".to_string(),
            UserRole::User,
        );
        let err = assert_err!(db.db().create_user(&twin).await);
        assert!(matches!(err, GatewayError::Conflict(_)));
        assert_eq!(assert_ok!(db.db().count_users().await), 1);
    }

    #[tokio::test]
    async fn test_list_users_search_is_case_insensitive() {
        let db = TestDatabase::new().await;
        let mut ada = UserFactory::record(UserRole::User);
        ada.name = "Ada Obi".to_string();
        let mut chidi = UserFactory::record(UserRole::User);
        chidi.name = "Chidi Eze".to_string();
        assert_ok!(db.db().create_user(&ada).await);
        assert_ok!(db.db().create_user(&chidi).await);

        let (users, total) = assert_ok!(db.db().list_users(Some("ADA"), 0, 20).await);
        assert_eq!(total, 1);
        assert_eq!(users[0].id, ada.id);

        let (users, total) = assert_ok!(db.db().list_users(None, 0, 1).await);
        assert_eq!(total, 2);
        assert_eq!(users.len(), 1);
    }

    #[tokio::test]
    async fn test_translations_newest_first_and_limited() {
        let db = TestDatabase::new().await;
        let user_id = Uuid::new_v4();

        for minutes_ago in (0..60).rev() {
            assert_ok!(
                db.db()
                    .create_translation(&TranslationFactory::aged(user_id, minutes_ago))
                    .await
            );
        }
        // Someone else's history never leaks in
        assert_ok!(
            db.db()
                .create_translation(&TranslationFactory::for_user(Uuid::new_v4()))
                .await
        );

        let history = assert_ok!(db.db().list_translations_for_user(user_id, 50).await);
        assert_eq!(history.len(), 50);
        assert_eq!(history[0].source_text, "text #0");
        assert!(
            history
                .windows(2)
                .all(|pair| pair[0].created_at >= pair[1].created_at)
        );
        assert!(history.iter().all(|t| t.user_id == user_id));
    }

    #[tokio::test]
    async fn test_conversation_append_keeps_order() {
        let db = TestDatabase::new().await;
        let user_id = Uuid::new_v4();
        let conversation = Conversation::new(user_id, "I have a headache");

        let opening = [
            Message::new(MessageRole::User, "I have a headache", "en"),
            Message::new(MessageRole::Assistant, "Rest and hydrate.", "en"),
        ];
        let created = assert_ok!(
            db.db()
                .create_conversation_with_messages(&conversation, &opening)
                .await
        );
        assert_eq!(created.messages.len(), 2);

        let follow_up = [
            Message::new(MessageRole::User, "It is worse now", "en"),
            Message::new(MessageRole::Assistant, "Please see a doctor.", "en"),
        ];
        let updated = assert_ok!(
            db.db()
                .append_messages(conversation.id, user_id, &follow_up)
                .await
        );
        let contents: Vec<&str> = updated.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(
            contents,
            [
                "I have a headache",
                "Rest and hydrate.",
                "It is worse now",
                "Please see a doctor."
            ]
        );
        assert!(updated.updated_at >= created.updated_at);

        let loaded = assert_ok!(
            db.db()
                .find_conversation_for_user(conversation.id, user_id)
                .await
        )
        .unwrap();
        assert_eq!(loaded.messages, updated.messages);
    }

    #[tokio::test]
    async fn test_append_to_foreign_conversation_is_not_found() {
        let db = TestDatabase::new().await;
        let owner = Uuid::new_v4();
        let conversation = Conversation::new(owner, "hello");
        assert_ok!(
            db.db()
                .create_conversation_with_messages(
                    &conversation,
                    &[Message::new(MessageRole::User, "hello", "en")]
                )
                .await
        );

        let err = assert_err!(
            db.db()
                .append_messages(
                    conversation.id,
                    Uuid::new_v4(),
                    &[Message::new(MessageRole::User, "intruder", "en")]
                )
                .await
        );
        assert!(matches!(err, GatewayError::NotFound(_)));

        let loaded = assert_ok!(db.db().find_conversation_for_user(conversation.id, owner).await)
            .unwrap();
        assert_eq!(loaded.messages.len(), 1);
        assert!(
            assert_ok!(
                db.db()
                    .find_conversation_for_user(conversation.id, Uuid::new_v4())
                    .await
            )
            .is_none()
        );
    }

    #[tokio::test]
    async fn test_feedback_listing_and_bounds() {
        let db = TestDatabase::new().await;
        let translation_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();

        let mut old = Feedback::new(translation_id, user_id, 2, None);
        old.created_at = Utc::now() - Duration::days(10);
        let recent = Feedback::new(translation_id, user_id, 5, Some("Ẹ kú àárọ̀".to_string()));
        assert_ok!(db.db().create_feedback(&old).await);
        assert_ok!(db.db().create_feedback(&recent).await);

        let for_translation =
            assert_ok!(db.db().list_feedback_for_translation(translation_id).await);
        assert_eq!(for_translation.len(), 2);

        let filter = FeedbackFilter {
            from: Some(Utc::now() - Duration::days(1)),
            to: None,
        };
        let (page, total) = assert_ok!(db.db().list_feedbacks(&filter, 0, 20).await);
        assert_eq!(total, 1);
        assert_eq!(page[0].rating, 5);

        assert_eq!(assert_ok!(db.db().count_feedbacks().await), 2);
        let average = assert_ok!(db.db().average_feedback_rating().await);
        assert!((average - 3.5).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_language_breakdown_sorted_by_volume() {
        let db = TestDatabase::new().await;
        let user_id = Uuid::new_v4();
        for lang in ["yo", "ha", "yo", "ig", "yo", "ha"] {
            assert_ok!(
                db.db()
                    .create_translation(&TranslationFactory::to_language(user_id, lang))
                    .await
            );
        }

        let since = Utc::now() - Duration::days(1);
        let languages = assert_ok!(db.db().translations_by_target_language(since).await);
        let summary: Vec<(&str, u64)> = languages
            .iter()
            .map(|l| (l.language.as_str(), l.count))
            .collect();
        assert_eq!(summary, [("yo", 3), ("ha", 2), ("ig", 1)]);

        assert_eq!(assert_ok!(db.db().active_user_count(since).await), 1);
        let volume = assert_ok!(db.db().translations_since(since).await);
        assert_eq!(volume.iter().map(|d| d.count).sum::<u64>(), 6);
    }

    #[tokio::test]
    async fn test_aggregates_on_empty_and_mixed_tables() {
        let db = TestDatabase::new().await;
        let since = Utc::now() - Duration::days(7);
        assert_eq!(assert_ok!(db.db().active_user_count(since).await), 0);
        assert_eq!(assert_ok!(db.db().average_feedback_rating().await), 0.0);

        let (busy, quiet) = (Uuid::new_v4(), Uuid::new_v4());
        for user_id in [busy, busy, busy, quiet] {
            assert_ok!(
                db.db()
                    .create_translation(&TranslationFactory::for_user(user_id))
                    .await
            );
        }
        let stale = TranslationFactory::aged(Uuid::new_v4(), 60 * 24 * 8);
        assert_ok!(db.db().create_translation(&stale).await);
        assert_eq!(assert_ok!(db.db().active_user_count(since).await), 2);

        for rating in [1, 2, 2] {
            assert_ok!(
                db.db()
                    .create_feedback(&Feedback::new(Uuid::new_v4(), busy, rating, None))
                    .await
            );
        }
        let average = assert_ok!(db.db().average_feedback_rating().await);
        assert!((average - 5.0 / 3.0).abs() < 1e-9);
    }
}
