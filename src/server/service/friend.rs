//! Friend requests and the friend list.
//!
//! A friendship is a directed edge from the requester to the target. Once accepted it counts
//! for both sides, so listings look at edges in either direction.

use std::{cmp::Reverse, collections::BTreeSet};

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::MessageDto,
        social::{FriendDto, FriendPairDto},
        user::FriendRequestSenderDto,
    },
    server::{
        data::{friend::FriendRepository, message::MessageRepository, user::UserRepository},
        error::{is_unique_violation, social::SocialError, validation::ValidationError, Error},
        model::status::FriendStatus,
        service::presence,
        util::time,
    },
};

fn pair(pair: &FriendPairDto) -> Result<(i32, i32), ValidationError> {
    Ok((
        pair.user_id.ok_or(ValidationError::MissingField("user_id"))?,
        pair.friend_id.ok_or(ValidationError::MissingField("friend_id"))?,
    ))
}

pub struct FriendService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FriendService<'a> {
    /// Creates a new instance of [`FriendService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sends a friend request from `user_id` to `friend_id`
    ///
    /// # Returns
    /// - `Ok(MessageDto)` - The pending request was created
    /// - `Err(Error::SocialError(SocialError::SelfRequest))` - Both ids are the same user
    /// - `Err(Error::SocialError(SocialError::UserNotFound))` - Either user does not exist
    /// - `Err(Error::SocialError(SocialError::DuplicateRequest))` - The request was already sent
    pub async fn send_request(&self, request: FriendPairDto) -> Result<MessageDto, Error> {
        let (user_id, friend_id) = pair(&request)?;

        if user_id == friend_id {
            return Err(SocialError::SelfRequest(user_id).into());
        }

        let user_repo = UserRepository::new(self.db);
        for id in [user_id, friend_id] {
            if user_repo.get(id).await?.is_none() {
                return Err(SocialError::UserNotFound(id).into());
            }
        }

        match FriendRepository::new(self.db)
            .create_request(user_id, friend_id)
            .await
        {
            Ok(_) => {}
            Err(err) if is_unique_violation(&err) => {
                return Err(SocialError::DuplicateRequest { user_id, friend_id }.into())
            }
            Err(err) => return Err(err.into()),
        }

        tracing::info!(user_id = %user_id, friend_id = %friend_id, "Friend request sent");

        Ok(MessageDto::new("Request sent"))
    }

    /// Accepts the request `friend_id` sent to `user_id`
    ///
    /// Accepting an already accepted request succeeds without changes.
    pub async fn respond(&self, response: FriendPairDto) -> Result<MessageDto, Error> {
        let (user_id, friend_id) = pair(&response)?;

        let friend_repo = FriendRepository::new(self.db);
        let edge = friend_repo
            .get(friend_id, user_id)
            .await?
            .ok_or(SocialError::RequestNotFound {
                requester_id: friend_id,
                target_id: user_id,
            })?;

        if edge.status != FriendStatus::Accepted.as_str() {
            friend_repo.set_status(edge, FriendStatus::Accepted).await?;

            tracing::info!(user_id = %user_id, friend_id = %friend_id, "Friend request accepted");
        }

        Ok(MessageDto::new("Accepted"))
    }

    /// Users who sent `user_id` a request still awaiting an answer
    pub async fn pending_requests(&self, user_id: i32) -> Result<Vec<FriendRequestSenderDto>, Error> {
        let requester_ids: Vec<i32> = FriendRepository::new(self.db)
            .pending_incoming(user_id)
            .await?
            .into_iter()
            .map(|edge| edge.user_id)
            .collect();

        let requesters = UserRepository::new(self.db).get_many(&requester_ids).await?;

        Ok(requesters
            .into_iter()
            .map(|u| FriendRequestSenderDto { id: u.id, name: u.name })
            .collect())
    }

    /// Accepted friends of `user_id` with presence and the state of each conversation.
    ///
    /// Unread counts cover the friend's messages since the user last wrote to them. Friends
    /// with messages come first, most recent conversation first, followed by the others.
    pub async fn list_friends(&self, user_id: i32) -> Result<Vec<FriendDto>, Error> {
        let friend_ids: BTreeSet<i32> = FriendRepository::new(self.db)
            .accepted_for(user_id)
            .await?
            .into_iter()
            .map(|edge| {
                if edge.user_id == user_id {
                    edge.friend_id
                } else {
                    edge.user_id
                }
            })
            .collect();
        let friend_ids: Vec<i32> = friend_ids.into_iter().collect();

        let friends = UserRepository::new(self.db).get_many(&friend_ids).await?;
        let message_repo = MessageRepository::new(self.db);
        let now = time::now();

        let mut listed = Vec::with_capacity(friends.len());
        for friend in friends {
            let last = message_repo.last_between(user_id, friend.id).await?;
            let last_reply = message_repo.last_sent(user_id, friend.id).await?;
            let unread_count = message_repo
                .count_sent(friend.id, user_id, last_reply.map(|m| m.timestamp))
                .await?;

            let is_online = presence::is_online(now, friend.last_seen);
            let sort_key = last.as_ref().map(|m| (m.timestamp, m.id));

            let dto = FriendDto {
                id: friend.id,
                name: friend.name,
                uid: friend.uid,
                status: if is_online { "online" } else { "offline" }.to_string(),
                is_online,
                last_message_time: last.as_ref().map(|m| time::hour_minute(m.timestamp.time())),
                last_message_from_me: last.as_ref().map(|m| m.sender_id == user_id),
                last_message: last.map(|m| m.content),
                unread_count,
            };

            listed.push((sort_key, dto));
        }

        // `None` sorts below `Some`, so reversing puts silent friends last
        listed.sort_by_key(|(key, _)| Reverse(*key));

        Ok(listed.into_iter().map(|(_, dto)| dto).collect())
    }
}
