use chrono::NaiveDateTime;
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, ExprTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::server::model::status::UserRole;

/// Fields of a new account
pub struct NewUser<'s> {
    pub username: &'s str,
    pub password_hash: &'s str,
    pub role: UserRole,
    pub name: Option<&'s str>,
    pub uid: &'s str,
}

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new account
    ///
    /// Fails with a unique constraint violation if the username or public uid is taken.
    pub async fn create(
        &self,
        user: NewUser<'_>,
        created_at: NaiveDateTime,
    ) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(user.username.to_string()),
            password_hash: ActiveValue::Set(user.password_hash.to_string()),
            role: ActiveValue::Set(user.role.as_str().to_string()),
            name: ActiveValue::Set(user.name.map(str::to_string)),
            uid: ActiveValue::Set(user.uid.to_string()),
            is_banned: ActiveValue::Set(false),
            upi_id: ActiveValue::Set(None),
            last_seen: ActiveValue::Set(None),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    pub async fn uid_exists(&self, uid: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Uid.eq(uid))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Fetches every user with one of the provided IDs, unknown IDs are skipped
    pub async fn get_many(&self, user_ids: &[i32]) -> Result<Vec<entity::user::Model>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids.iter().copied()))
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }

    /// Sets the presence timestamp of a user
    ///
    /// Returns the number of rows updated, 0 when the user does not exist.
    pub async fn touch_last_seen(&self, user_id: i32, now: NaiveDateTime) -> Result<u64, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(entity::user::Column::LastSeen, Expr::value(now))
            .filter(entity::user::Column::Id.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn update_upi(
        &self,
        user_id: i32,
        upi_id: Option<String>,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = self.get(user_id).await? else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        user_am.upi_id = ActiveValue::Set(upi_id);

        Ok(Some(user_am.update(self.db).await?))
    }

    /// Flips the banned flag of a user, returning the updated user
    pub async fn toggle_ban(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = self.get(user_id).await? else {
            return Ok(None);
        };

        let is_banned = user.is_banned;
        let mut user_am = user.into_active_model();
        user_am.is_banned = ActiveValue::Set(!is_banned);

        Ok(Some(user_am.update(self.db).await?))
    }

    /// Finds accounts with `role` whose display name contains `fragment`, ignoring case
    pub async fn search_by_name(
        &self,
        role: UserRole,
        fragment: &str,
        limit: u64,
    ) -> Result<Vec<entity::user::Model>, DbErr> {
        let pattern = format!("%{}%", fragment.to_lowercase());

        entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(role.as_str()))
            .filter(Expr::expr(Func::lower(Expr::col(entity::user::Column::Name))).like(pattern))
            .order_by_asc(entity::user::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    pub async fn list_by_role(
        &self,
        role: UserRole,
        limit: Option<u64>,
    ) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(role.as_str()))
            .order_by_asc(entity::user::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Lists every account that is not an administrator
    pub async fn list_non_admin(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Role.ne(UserRole::Admin.as_str()))
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn count_by_role(&self, role: UserRole) -> Result<u64, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(role.as_str()))
            .count(self.db)
            .await
    }

    /// Deletes a user
    ///
    /// Returns OK regardless of user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}
