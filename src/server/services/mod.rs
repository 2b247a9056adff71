use std::sync::Arc;

use tracing::info;

use crate::{
    config::AppConfig,
    database::Database,
    server::{
        services::{movie_services::MoviesService, user_services::UsersService},
        utils::{
            argon_utils::{ArgonSecurityUtil, DynArgonUtil},
            jwt_utils::JwtTokenUtil,
        },
    },
};

use self::{movie_services::DynMoviesService, user_services::DynUsersService};

use super::utils::jwt_utils::DynJwtUtil;

pub mod movie_services;
pub mod seed_services;
pub mod user_services;

// list of services that we are using
#[derive(Clone)]
pub struct Services {
    pub jwt_util: DynJwtUtil,
    pub users: DynUsersService,
    pub movies: DynMoviesService,
    pub database: Arc<Database>,
    pub config: Arc<AppConfig>,
}

impl Services {
    pub fn new(db: Database, config: Arc<AppConfig>) -> Self {
        info!("starting util services...");

        let security_service = Arc::new(ArgonSecurityUtil::new()) as DynArgonUtil;
        let jwt_util = Arc::new(JwtTokenUtil::new(config.clone())) as DynJwtUtil;

        info!("jwt and hashing ok, starting remaining services...");
        let repository = Arc::new(db);

        let users = Arc::new(UsersService::new(
            repository.clone(),
            security_service,
            jwt_util.clone(),
        )) as DynUsersService;

        let movies = Arc::new(MoviesService::new(repository.clone())) as DynMoviesService;

        Self {
            jwt_util,
            users,
            movies,
            database: repository,
            config,
        }
    }
}
