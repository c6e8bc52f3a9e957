pub mod session;

pub use session::{provide_session, use_session, use_session_token, use_user, SessionState};
