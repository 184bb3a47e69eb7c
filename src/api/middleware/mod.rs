//! API middleware.

mod secure_headers;
mod session;

pub use secure_headers::{apply_security_headers, secure_headers_middleware};
pub use session::{session_from_headers, session_middleware, SessionId};
