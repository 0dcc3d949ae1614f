//! Public profiles, payment details and player search.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::{PublicUserDto, UpiUpdatedDto, UserSummaryDto},
    server::{
        data::user::UserRepository,
        error::{user::UserError, Error},
        model::status::UserRole,
        service::{non_blank, presence::is_online},
        util::time,
    },
};

/// Maximum number of results of a name search
const SEARCH_LIMIT: u64 = 50;
/// Maximum number of players listed when no search term is given
const DIRECTORY_LIMIT: u64 = 100;

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Public profile of a user including derived presence
    pub async fn get_profile(&self, user_id: i32) -> Result<PublicUserDto, Error> {
        let user = UserRepository::new(self.db)
            .get(user_id)
            .await?
            .ok_or(UserError::NotFound(user_id))?;

        Ok(PublicUserDto {
            id: user.id,
            name: user.name,
            uid: user.uid,
            is_online: is_online(time::now(), user.last_seen),
            upi_id: user.upi_id.unwrap_or_default(),
        })
    }

    /// Sets the UPI id a user collects payments on, a blank value clears it
    pub async fn update_upi(
        &self,
        user_id: i32,
        upi_id: Option<&str>,
    ) -> Result<UpiUpdatedDto, Error> {
        let upi_id = non_blank(upi_id).map(str::to_string);

        let user = UserRepository::new(self.db)
            .update_upi(user_id, upi_id)
            .await?
            .ok_or(UserError::NotFound(user_id))?;

        Ok(UpiUpdatedDto {
            message: "UPI ID updated".to_string(),
            upi_id: user.upi_id,
        })
    }

    /// Searches players by display name.
    ///
    /// Only accounts with the `user` role are returned. Without a search term the first
    /// players are listed instead, for browsing.
    pub async fn search(&self, query: Option<&str>) -> Result<Vec<UserSummaryDto>, Error> {
        let user_repo = UserRepository::new(self.db);

        let users = match non_blank(query) {
            Some(fragment) => {
                user_repo
                    .search_by_name(UserRole::User, fragment, SEARCH_LIMIT)
                    .await?
            }
            None => {
                user_repo
                    .list_by_role(UserRole::User, Some(DIRECTORY_LIMIT))
                    .await?
            }
        };

        Ok(users
            .into_iter()
            .map(|u| UserSummaryDto {
                id: u.id,
                name: u.name,
                uid: u.uid,
            })
            .collect())
    }
}
