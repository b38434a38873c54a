//! Constant values shared by backend mocks and the assertions made against them.

/// Username accepted by the mocked login endpoint.
pub static TEST_USERNAME: &str = "user1";

/// Password accepted by the mocked login endpoint.
pub static TEST_PASSWORD: &str = "password";

/// Session ID handed out by the mocked login endpoint.
pub static TEST_SESSION_ID: &str = "0b6a7cc2-7a04-4b0f-9e2d-test-session";

/// Token handed out alongside [`TEST_SESSION_ID`].
pub static TEST_SESSION_TOKEN: &str = "test-session-token";

/// User ID handed out alongside [`TEST_SESSION_ID`].
pub const TEST_USER_ID: i64 = 1;

/// Base URL that refuses connections, used to simulate an unreachable backend instance.
pub static UNREACHABLE_URL: &str = "http://127.0.0.1:1";
