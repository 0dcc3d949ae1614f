use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::social::{ChatMessageDto, MarkedReadDto, MessageSentDto, NewMessageDto},
    server::{
        data::{message::MessageRepository, user::UserRepository},
        error::{user::UserError, validation::ValidationError, Error},
        service::non_blank,
        util::time,
    },
};

/// Number of most recent messages returned for a conversation
pub const CONVERSATION_LIMIT: u64 = 100;

const UNKNOWN_SENDER: &str = "Unknown";

pub struct MessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageService<'a> {
    /// Creates a new instance of [`MessageService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens the conversation between `user_id` and `friend_id` as `user_id`.
    ///
    /// Marks everything `friend_id` sent to `user_id` as read before returning the latest
    /// messages in chronological order. Missing ids yield an empty conversation.
    pub async fn conversation(
        &self,
        user_id: Option<i32>,
        friend_id: Option<i32>,
    ) -> Result<Vec<ChatMessageDto>, Error> {
        let (Some(user_id), Some(friend_id)) = (
            user_id.filter(|id| *id != 0),
            friend_id.filter(|id| *id != 0),
        ) else {
            return Ok(Vec::new());
        };

        let message_repo = MessageRepository::new(self.db);
        let marked = message_repo
            .mark_read(friend_id, user_id, time::now())
            .await?;
        if marked > 0 {
            tracing::debug!(user_id = %user_id, friend_id = %friend_id, marked, "Messages read");
        }

        let messages = message_repo
            .conversation(user_id, friend_id, CONVERSATION_LIMIT)
            .await?;

        let names: HashMap<i32, Option<String>> = UserRepository::new(self.db)
            .get_many(&[user_id, friend_id])
            .await?
            .into_iter()
            .map(|u| (u.id, u.name))
            .collect();

        Ok(messages
            .into_iter()
            .map(|m| ChatMessageDto {
                id: m.id,
                sender: names
                    .get(&m.sender_id)
                    .cloned()
                    .flatten()
                    .unwrap_or_else(|| UNKNOWN_SENDER.to_string()),
                sender_id: m.sender_id,
                time: time::hour_minute(m.timestamp.time()),
                date: time::iso_date(m.timestamp.date()),
                is_read: m.is_read,
                read_at: m.read_at.map(|at| time::hour_minute(at.time())),
                text: m.content,
            })
            .collect())
    }

    /// Sends a message from `user_id` to `friend_id`.
    ///
    /// Friendship is not required, but both users must exist.
    pub async fn send(&self, message: NewMessageDto) -> Result<MessageSentDto, Error> {
        let sender_id = message.user_id.ok_or(ValidationError::MissingField("user_id"))?;
        let receiver_id = message
            .friend_id
            .ok_or(ValidationError::MissingField("friend_id"))?;
        let text = non_blank(message.text.as_deref()).ok_or(ValidationError::MissingField("text"))?;

        let user_repo = UserRepository::new(self.db);
        for id in [sender_id, receiver_id] {
            if user_repo.get(id).await?.is_none() {
                return Err(UserError::NotFound(id).into());
            }
        }

        let sent = MessageRepository::new(self.db)
            .create(sender_id, receiver_id, text, time::now())
            .await?;

        tracing::debug!(message_id = %sent.id, sender_id = %sender_id, "Message sent");

        Ok(MessageSentDto {
            message: "Sent".to_string(),
            id: sent.id,
        })
    }

    /// Marks what `friend_id` sent to `user_id` as read without loading the conversation
    pub async fn mark_read(
        &self,
        user_id: Option<i32>,
        friend_id: Option<i32>,
    ) -> Result<MarkedReadDto, Error> {
        let user_id = user_id.ok_or(ValidationError::MissingField("user_id"))?;
        let friend_id = friend_id.ok_or(ValidationError::MissingField("friend_id"))?;

        let marked_read = MessageRepository::new(self.db)
            .mark_read(friend_id, user_id, time::now())
            .await?;

        Ok(MarkedReadDto { marked_read })
    }
}

#[cfg(test)]
mod tests {
    mod conversation {
        use chrono::{Duration, Utc};
        use turfbook_test_utils::prelude::*;

        use crate::server::service::message::MessageService;

        /// Expect incoming messages to be read after the first fetch and stay read
        #[tokio::test]
        async fn read_is_monotonic() -> Result<(), TestError> {
            let test = TestBuilder::new().with_social_tables().build().await?;
            let sam = test.user().insert_user("sam@example.com").await?;
            let ana = test.user().insert_user("ana@example.com").await?;
            let start = Utc::now().naive_utc() - Duration::minutes(30);
            test.social()
                .insert_message(ana.id, sam.id, "hi", start)
                .await?;
            test.social()
                .insert_message(sam.id, ana.id, "hey", start + Duration::minutes(1))
                .await?;
            let service = MessageService::new(&test.db);

            let first = service.conversation(Some(sam.id), Some(ana.id)).await.unwrap();

            assert_eq!(first.len(), 2);
            assert_eq!(first[0].text, "hi");
            assert_eq!(first[0].sender, "ana");
            assert!(first[0].is_read);
            assert!(first[0].read_at.is_some());
            // Sam's own message stays unread until Ana opens the conversation
            assert!(!first[1].is_read);

            let second = service.conversation(Some(sam.id), Some(ana.id)).await.unwrap();
            assert_eq!(second[0].read_at, first[0].read_at);
            assert!(second[0].is_read);

            Ok(())
        }

        /// Expect an empty conversation when an id is missing
        #[tokio::test]
        async fn empty_without_ids() -> Result<(), TestError> {
            let test = TestBuilder::new().with_social_tables().build().await?;

            let messages = MessageService::new(&test.db)
                .conversation(Some(1), None)
                .await
                .unwrap();

            assert!(messages.is_empty());

            Ok(())
        }
    }

    mod send {
        use turfbook_test_utils::prelude::*;

        use crate::{
            model::social::NewMessageDto,
            server::{
                error::{user::UserError, validation::ValidationError, Error},
                service::message::MessageService,
            },
        };

        /// Expect a message to an unknown receiver to be rejected with the missing id
        #[tokio::test]
        async fn rejects_unknown_receiver() -> Result<(), TestError> {
            let test = TestBuilder::new().with_social_tables().build().await?;
            let sam = test.user().insert_user("sam@example.com").await?;

            let result = MessageService::new(&test.db)
                .send(NewMessageDto {
                    user_id: Some(sam.id),
                    friend_id: Some(sam.id + 100),
                    text: Some("hello".to_string()),
                })
                .await;

            assert!(matches!(
                result,
                Err(Error::UserError(UserError::NotFound(id))) if id == sam.id + 100
            ));

            Ok(())
        }

        /// Expect a blank message to be rejected
        #[tokio::test]
        async fn rejects_blank_text() -> Result<(), TestError> {
            let test = TestBuilder::new().with_social_tables().build().await?;
            let sam = test.user().insert_user("sam@example.com").await?;
            let ana = test.user().insert_user("ana@example.com").await?;

            let result = MessageService::new(&test.db)
                .send(NewMessageDto {
                    user_id: Some(sam.id),
                    friend_id: Some(ana.id),
                    text: Some("   ".to_string()),
                })
                .await;

            assert!(matches!(
                result,
                Err(Error::ValidationError(ValidationError::MissingField("text")))
            ));

            Ok(())
        }

        /// Expect the message to show up unread for the receiver
        #[tokio::test]
        async fn delivers_unread() -> Result<(), TestError> {
            let test = TestBuilder::new().with_social_tables().build().await?;
            let sam = test.user().insert_user("sam@example.com").await?;
            let ana = test.user().insert_user("ana@example.com").await?;
            let service = MessageService::new(&test.db);

            service
                .send(NewMessageDto {
                    user_id: Some(sam.id),
                    friend_id: Some(ana.id),
                    text: Some("Game at 6?".to_string()),
                })
                .await
                .unwrap();

            let marked = service.mark_read(Some(ana.id), Some(sam.id)).await.unwrap();
            assert_eq!(marked.marked_read, 1);
            let marked = service.mark_read(Some(ana.id), Some(sam.id)).await.unwrap();
            assert_eq!(marked.marked_read, 0);

            Ok(())
        }
    }
}
