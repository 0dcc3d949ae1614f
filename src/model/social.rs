use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A friend with the state of the conversation with them
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct FriendDto {
    pub id: i32,
    pub name: Option<String>,
    pub uid: String,
    /// `online` or `offline`
    pub status: String,
    pub is_online: bool,
    pub last_message: Option<String>,
    /// `HH:MM` of the last message
    pub last_message_time: Option<String>,
    pub last_message_from_me: Option<bool>,
    pub unread_count: u64,
}

/// Body shared by the friend request endpoints, `user_id` is always the caller
#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct FriendPairDto {
    pub user_id: Option<i32>,
    pub friend_id: Option<i32>,
}

#[derive(Clone, Default, Deserialize, IntoParams)]
pub struct ConversationQuery {
    pub user_id: Option<i32>,
    pub friend_id: Option<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatMessageDto {
    pub id: i32,
    pub text: String,
    /// Display name of the sender
    pub sender: String,
    pub sender_id: i32,
    pub time: String,
    pub date: String,
    pub is_read: bool,
    pub read_at: Option<String>,
}

#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct NewMessageDto {
    pub user_id: Option<i32>,
    pub friend_id: Option<i32>,
    pub text: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageSentDto {
    pub message: String,
    pub id: i32,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct MarkedReadDto {
    pub marked_read: u64,
}
