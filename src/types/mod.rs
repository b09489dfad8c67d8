//! Request and response payloads shared by handlers.

mod request;
mod response;

pub use request::{LoginRequest, SignupRequest};
pub use response::{InvalidLoginResponse, JwtTokenSuccessResponse, MessageResponse};
