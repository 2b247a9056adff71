use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::database::user::User;

/// Request body for creating an account
#[derive(Debug, Deserialize, Validate)]
pub struct SignUpUserDto {
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: String,

    #[validate(email(message = "email is invalid"))]
    pub email: String,

    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
}

/// Request body for signing in
#[derive(Debug, Deserialize, Validate)]
pub struct SignInUserDto {
    #[validate(email(message = "email is invalid"))]
    pub email: String,

    #[validate(length(min = 1, message = "password cannot be empty"))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub email: String,
    /// empty until the user signs in
    pub access_token: String,
}

impl UserDto {
    pub fn from_user(user: User, access_token: String) -> Self {
        UserDto {
            id: user.id,
            name: user.name,
            email: user.email,
            access_token,
        }
    }
}

/// Response wrapper shared by signup and signin
#[derive(Debug, Serialize, Deserialize)]
pub struct UserAuthenicationResponse {
    pub user: UserDto,
}
