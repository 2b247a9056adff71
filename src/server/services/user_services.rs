use std::sync::Arc;

use nanoid::nanoid;
use tracing::{error, info};

use crate::database::user::DynUsersRepository;
use crate::server::dtos::user_dto::{SignInUserDto, SignUpUserDto, UserDto};
use crate::server::error::{AppResult, Error};
use crate::server::utils::argon_utils::DynArgonUtil;
use crate::server::utils::jwt_utils::DynJwtUtil;

pub type DynUsersService = Arc<dyn UsersServiceTrait + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait UsersServiceTrait {
    /// create an account, the returned dto carries no token on purpose
    async fn signup_user(&self, request: SignUpUserDto) -> AppResult<UserDto>;

    /// verify credentials and mint an access token
    async fn signin_user(&self, request: SignInUserDto) -> AppResult<UserDto>;

    /// who the token belongs to
    async fn get_current_user(&self, user_id: String) -> AppResult<UserDto>;
}

pub struct UsersService {
    repository: DynUsersRepository,
    security_service: DynArgonUtil,
    token_service: DynJwtUtil,
}

impl UsersService {
    pub fn new(
        repository: DynUsersRepository,
        security_service: DynArgonUtil,
        token_service: DynJwtUtil,
    ) -> Self {
        Self {
            repository,
            security_service,
            token_service,
        }
    }
}

#[async_trait::async_trait]
impl UsersServiceTrait for UsersService {
    async fn signup_user(&self, request: SignUpUserDto) -> AppResult<UserDto> {
        let existing_user = self.repository.get_user_by_email(&request.email).await?;

        if existing_user.is_some() {
            error!("user {:?} already exists", request.email);
            return Err(Error::ObjectConflict(String::from(
                "user with that email already exists",
            )));
        }

        info!("creating password hash for user {:?}", request.email);
        // the encoded hash carries the salt, so a fresh one per user is all
        // that is needed here
        let salt = nanoid!();
        let hashed_password = self
            .security_service
            .hash_password(&request.password, salt.as_bytes())?;

        info!("password hashed, creating user {:?}", request.email);
        let created_user = self
            .repository
            .create_user(&request.email, &request.name, &hashed_password)
            .await?;

        Ok(UserDto::from_user(created_user, String::default()))
    }

    async fn signin_user(&self, request: SignInUserDto) -> AppResult<UserDto> {
        let user = self
            .repository
            .get_user_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                error!("signin attempt for unknown user {:?}", request.email);
                Error::Unauthorized
            })?;

        let correct_password = self
            .security_service
            .verify_password(&user.password, request.password)?;

        if !correct_password {
            error!("invalid password for user {:?}", request.email);
            return Err(Error::Unauthorized);
        }

        info!("user {:?} signed in, minting access token", request.email);
        let access_token = self
            .token_service
            .new_access_token(user.id.clone(), &user.email)?;

        Ok(UserDto::from_user(user, access_token))
    }

    async fn get_current_user(&self, user_id: String) -> AppResult<UserDto> {
        let user = self.repository.get_user_by_id(&user_id).await?;

        Ok(UserDto::from_user(user, String::default()))
    }
}
