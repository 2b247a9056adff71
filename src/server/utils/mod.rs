pub mod argon_utils;
pub mod jwt_utils;
