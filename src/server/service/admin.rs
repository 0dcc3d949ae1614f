//! Moderation and platform statistics for administrators.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        admin::{
            AdminTurfDto, AdminUserDto, AnnounceDto, AnnouncementDto, BanToggledDto, NewOwnerDto,
            OwnerDto, StatsDto,
        },
        api::MessageDto,
    },
    server::{
        data::{
            announcement::AnnouncementRepository, booking::BookingRepository,
            turf::TurfRepository, user::UserRepository,
        },
        error::{
            admin::AdminError, auth::AuthError, turf::TurfError, user::UserError,
            validation::ValidationError, Error,
        },
        model::status::{TurfStatus, UserRole},
        service::{auth::AuthService, non_blank},
        util::{money, time},
    },
};

/// Number of announcements shown in the feed
pub const ANNOUNCEMENT_FEED_SIZE: u64 = 5;

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    /// Creates a new instance of [`AdminService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn stats(&self) -> Result<StatsDto, Error> {
        let user_repo = UserRepository::new(self.db);
        let turf_repo = TurfRepository::new(self.db);
        let booking_repo = BookingRepository::new(self.db);

        Ok(StatsDto {
            users: user_repo.count_by_role(UserRole::User).await?,
            owners: user_repo.count_by_role(UserRole::Owner).await?,
            turfs: turf_repo.count().await?,
            bookings: booking_repo.count().await?,
            pending_turfs: turf_repo.count_by_status(TurfStatus::Pending).await?,
            revenue: money::round2(booking_repo.total_revenue().await?),
        })
    }

    /// Every account except administrators
    pub async fn users(&self) -> Result<Vec<AdminUserDto>, Error> {
        let users = UserRepository::new(self.db).list_non_admin().await?;

        Ok(users
            .into_iter()
            .map(|u| AdminUserDto {
                id: u.id,
                username: u.username,
                name: u.name,
                role: u.role,
                is_banned: u.is_banned,
                created_at: u.created_at.format("%Y-%m-%d").to_string(),
            })
            .collect())
    }

    /// Bans an active user or lifts the ban of a banned one
    pub async fn toggle_ban(&self, user_id: i32) -> Result<BanToggledDto, Error> {
        let user = UserRepository::new(self.db)
            .toggle_ban(user_id)
            .await?
            .ok_or(UserError::NotFound(user_id))?;

        tracing::info!(user_id = %user_id, is_banned = user.is_banned, "Toggled user ban");

        Ok(BanToggledDto {
            message: if user.is_banned {
                "User banned"
            } else {
                "User unbanned"
            }
            .to_string(),
            is_banned: user.is_banned,
        })
    }

    pub async fn turfs(&self) -> Result<Vec<AdminTurfDto>, Error> {
        let turfs = TurfRepository::new(self.db).list(None).await?;

        Ok(turfs
            .into_iter()
            .map(|t| AdminTurfDto {
                id: t.id,
                name: t.name,
                city: t.city,
                owner_id: t.owner_id,
                status: t.status,
                price: t.price,
            })
            .collect())
    }

    pub async fn approve_turf(&self, turf_id: i32) -> Result<MessageDto, Error> {
        TurfRepository::new(self.db)
            .set_status(turf_id, TurfStatus::Approved)
            .await?
            .ok_or(TurfError::NotFound(turf_id))?;

        tracing::info!(turf_id = %turf_id, "Turf approved");

        Ok(MessageDto::new("Turf approved"))
    }

    pub async fn owners(&self) -> Result<Vec<OwnerDto>, Error> {
        let owners = UserRepository::new(self.db)
            .list_by_role(UserRole::Owner, None)
            .await?;

        Ok(owners
            .into_iter()
            .map(|o| OwnerDto {
                id: o.id,
                username: o.username,
                name: o.name,
                created_at: o.created_at.format("%Y-%m-%d").to_string(),
            })
            .collect())
    }

    /// Creates an owner account with a hashed password
    ///
    /// # Returns
    /// - `Ok(MessageDto)` - The owner was created
    /// - `Err(Error::ValidationError)` - Username or password missing
    /// - `Err(Error::AdminError(AdminError::UsernameTaken))` - The username is in use
    pub async fn add_owner(&self, owner: NewOwnerDto) -> Result<MessageDto, Error> {
        let username = non_blank(owner.username.as_deref())
            .ok_or(ValidationError::MissingField("username"))?;
        let password = owner
            .password
            .as_deref()
            .filter(|p| !p.is_empty())
            .ok_or(ValidationError::MissingField("password"))?;

        let created = AuthService::new(self.db)
            .create_account(
                username,
                password,
                UserRole::Owner,
                non_blank(owner.name.as_deref()),
            )
            .await;

        match created {
            Ok(_) => Ok(MessageDto::new("Owner added")),
            Err(Error::AuthError(AuthError::UsernameTaken(username))) => {
                Err(AdminError::UsernameTaken(username).into())
            }
            Err(err) => Err(err),
        }
    }

    /// Deletes an owner account that no longer has any turfs
    pub async fn delete_owner(&self, owner_id: i32) -> Result<MessageDto, Error> {
        let user_repo = UserRepository::new(self.db);

        let owner = user_repo
            .get(owner_id)
            .await?
            .ok_or(UserError::NotFound(owner_id))?;
        if owner.role != UserRole::Owner.as_str() {
            return Err(AdminError::NotAnOwner(owner_id).into());
        }

        let turfs = TurfRepository::new(self.db).count_by_owner(owner_id).await?;
        if turfs > 0 {
            return Err(AdminError::OwnerHasTurfs { owner_id, turfs }.into());
        }

        user_repo.delete(owner_id).await?;

        tracing::info!(owner_id = %owner_id, "Owner deleted");

        Ok(MessageDto::new("Owner deleted"))
    }

    pub async fn announce(&self, announcement: AnnounceDto) -> Result<MessageDto, Error> {
        let content = non_blank(announcement.message.as_deref())
            .ok_or(ValidationError::MissingField("message"))?;

        let created = AnnouncementRepository::new(self.db)
            .create(content, time::now())
            .await?;

        tracing::info!(announcement_id = %created.id, "Announcement broadcast");

        Ok(MessageDto::new("Announcement broadcasted"))
    }

    /// The latest announcements, newest first
    pub async fn announcements(&self) -> Result<Vec<AnnouncementDto>, Error> {
        let announcements = AnnouncementRepository::new(self.db)
            .latest(ANNOUNCEMENT_FEED_SIZE)
            .await?;

        Ok(announcements
            .into_iter()
            .map(|a| AnnouncementDto {
                id: a.id,
                content: a.content,
                created_at: a.created_at.format("%Y-%m-%d %H:%M").to_string(),
            })
            .collect())
    }
}
