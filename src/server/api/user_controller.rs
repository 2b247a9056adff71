use axum::extract::Json;
use axum::routing::{get, post};
use axum::{Extension, Router};
use tracing::info;

use crate::server::dtos::user_dto::{SignInUserDto, SignUpUserDto, UserAuthenicationResponse};
use crate::server::error::AppResult;
use crate::server::extractors::{RequiredAuthentication, ValidatedJson};
use crate::server::services::Services;

pub struct UserController;
/*
*    /signup - POST - takes in json with email: string, password: string, name: string,
*    creates a new user and returns json with a user object containing the email, name, and a
*    blank access token field, use the signin endpoint for the token.
*
*    /signin - POST - takes in json with email: string, password: string, returns a user
*    object with name, email, and an access token bound to the user
*
*    /whoami - GET - takes in an Authorization header with a Bearer access token and returns
*    the same json shape as signin with a blank token field
* */
impl UserController {
    pub fn app() -> Router {
        Router::new()
            .route("/signup", post(Self::signup_user_endpoint))
            .route("/signin", post(Self::signin_user_endpoint))
            .route("/whoami", get(Self::get_current_user_endpoint))
    }

    pub async fn signup_user_endpoint(
        Extension(services): Extension<Services>,
        ValidatedJson(request): ValidatedJson<SignUpUserDto>,
    ) -> AppResult<Json<UserAuthenicationResponse>> {
        info!("recieved request to create user {:?}", request.email);

        let created_user = services.users.signup_user(request).await?;

        Ok(Json(UserAuthenicationResponse { user: created_user }))
    }

    pub async fn signin_user_endpoint(
        Extension(services): Extension<Services>,
        ValidatedJson(request): ValidatedJson<SignInUserDto>,
    ) -> AppResult<Json<UserAuthenicationResponse>> {
        info!("recieved request to login user {:?}", request.email);

        let user = services.users.signin_user(request).await?;

        Ok(Json(UserAuthenicationResponse { user }))
    }

    pub async fn get_current_user_endpoint(
        RequiredAuthentication(user_id, services): RequiredAuthentication,
    ) -> AppResult<Json<UserAuthenicationResponse>> {
        info!("recieved request to retrieve current user");

        let current_user = services.users.get_current_user(user_id).await?;

        Ok(Json(UserAuthenicationResponse { user: current_user }))
    }
}
