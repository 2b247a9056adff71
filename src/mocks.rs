use crate::database::user::MockUsersRepository;
use crate::server::utils::argon_utils::MockArgonUtil;
use crate::server::utils::jwt_utils::MockJwtUtil;

// mocks for the user service tests
//
// the movie service only needs its repository mocked so it builds its mocks
// inline, the seed service runs against a real database in the integration
// tests instead
pub struct UsersServiceTestFixture {
    pub mock_repository: MockUsersRepository,
    pub mock_jwt_util: MockJwtUtil,
    pub mock_argon_util: MockArgonUtil,
}

impl Default for UsersServiceTestFixture {
    fn default() -> Self {
        UsersServiceTestFixture::new()
    }
}

impl UsersServiceTestFixture {
    pub fn new() -> Self {
        Self {
            mock_repository: MockUsersRepository::new(),
            mock_jwt_util: MockJwtUtil::new(),
            mock_argon_util: MockArgonUtil::new(),
        }
    }
}
