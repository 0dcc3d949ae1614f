use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SignupDto {
    /// Email address, used as the login name
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct NewAccountDto {
    pub username: String,
    pub role: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SignupResponseDto {
    pub message: String,
    pub user: NewAccountDto,
}

#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// The logged in user as returned to the client after a successful login
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionUserDto {
    pub id: i32,
    pub username: String,
    pub name: Option<String>,
    pub role: String,
    pub uid: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginResponseDto {
    pub message: String,
    pub user: SessionUserDto,
}

#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct LogoutDto {
    pub user_id: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HeartbeatDto {
    pub ok: bool,
}

/// Public profile of a user as seen by other players
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicUserDto {
    pub id: i32,
    pub name: Option<String>,
    pub uid: String,
    pub is_online: bool,
    /// Empty when the user has not configured a UPI id
    pub upi_id: String,
}

#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateUpiDto {
    pub upi_id: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpiUpdatedDto {
    pub message: String,
    pub upi_id: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct UserSummaryDto {
    pub id: i32,
    pub name: Option<String>,
    pub uid: String,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct FriendRequestSenderDto {
    pub id: i32,
    pub name: Option<String>,
}

#[derive(Clone, Default, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Case-insensitive fragment of the display name
    pub q: Option<String>,
}
