//! The `chat.*` endpoints.

mod requests;
mod responses;
mod service;

pub use requests::PostMessageRequest;
pub use responses::PostMessageResponse;
pub use service::ChatService;
