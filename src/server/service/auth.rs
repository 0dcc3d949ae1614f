//! Account creation and login.

use rand::Rng;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};

use crate::{
    model::user::{NewAccountDto, SessionUserDto, SignupDto},
    server::{
        data::user::{NewUser, UserRepository},
        error::{auth::AuthError, is_unique_violation, validation::ValidationError, Error},
        model::status::UserRole,
        service::non_blank,
        util::{
            credential::{hash_password, Credential},
            time,
        },
    },
};

/// Generates a random 6-digit public identifier not yet held by any user.
pub(crate) async fn unique_uid<C: ConnectionTrait>(db: &C) -> Result<String, DbErr> {
    let user_repo = UserRepository::new(db);

    loop {
        let uid = format!("{:06}", rand::rng().random_range(0..1_000_000));

        if !user_repo.uid_exists(&uid).await? {
            return Ok(uid);
        }
    }
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an account with a hashed password and a fresh public identifier.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created account
    /// - `Err(Error::AuthError(AuthError::UsernameTaken))` - The username is already registered
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_account(
        &self,
        username: &str,
        password: &str,
        role: UserRole,
        name: Option<&str>,
    ) -> Result<entity::user::Model, Error> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_username(username).await?.is_some() {
            return Err(AuthError::UsernameTaken(username.to_string()).into());
        }

        let password_hash = hash_password(password)?;
        let uid = unique_uid(self.db).await?;

        let user = user_repo
            .create(
                NewUser {
                    username,
                    password_hash: &password_hash,
                    role,
                    name,
                    uid: &uid,
                },
                time::now(),
            )
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    Error::from(AuthError::UsernameTaken(username.to_string()))
                } else {
                    Error::from(e)
                }
            })?;

        tracing::info!(user_id = %user.id, role = %role, "Created account");

        Ok(user)
    }

    /// Registers a new player account using their email address as username
    pub async fn signup(&self, signup: SignupDto) -> Result<NewAccountDto, Error> {
        let email = non_blank(signup.email.as_deref()).ok_or(ValidationError::MissingField("email"))?;
        let password = signup
            .password
            .as_deref()
            .filter(|p| !p.is_empty())
            .ok_or(ValidationError::MissingField("password"))?;
        let name = non_blank(signup.name.as_deref());

        let user = self
            .create_account(email, password, UserRole::User, name)
            .await?;

        Ok(NewAccountDto {
            username: user.username,
            role: user.role,
        })
    }

    /// Verifies a username and password, refreshing the user's presence on success.
    ///
    /// # Returns
    /// - `Ok(SessionUserDto)` - Credentials are valid
    /// - `Err(Error::ValidationError)` - Username or password missing
    /// - `Err(Error::AuthError(AuthError::InvalidCredentials))` - Unknown user or wrong password
    /// - `Err(Error::AuthError(AuthError::Banned))` - The account is suspended
    pub async fn login(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<SessionUserDto, Error> {
        let username = username
            .filter(|u| !u.is_empty())
            .ok_or(ValidationError::MissingField("username"))?;
        let password = password
            .filter(|p| !p.is_empty())
            .ok_or(ValidationError::MissingField("password"))?;

        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_username(username).await? else {
            return Err(AuthError::InvalidCredentials(username.to_string()).into());
        };

        if user.is_banned {
            return Err(AuthError::Banned(user.id).into());
        }

        if !Credential::parse(&user.password_hash).verify(password) {
            return Err(AuthError::InvalidCredentials(username.to_string()).into());
        }

        user_repo.touch_last_seen(user.id, time::now()).await?;

        Ok(SessionUserDto {
            id: user.id,
            username: user.username,
            name: user.name,
            role: user.role,
            uid: user.uid,
        })
    }

    /// Records the logout time as the user's last activity.
    ///
    /// Presence then lapses on its own once the online window has passed.
    pub async fn logout(&self, user_id: Option<i32>) -> Result<(), Error> {
        if let Some(user_id) = user_id {
            UserRepository::new(self.db)
                .touch_last_seen(user_id, time::now())
                .await?;
        }

        Ok(())
    }
}
