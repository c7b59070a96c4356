//! The `channels.*` endpoints.

mod requests;
mod responses;
mod service;

pub use requests::{GetChannelRequest, ListChannelsRequest};
pub use responses::{GetChannelResponse, ListChannelsResponse};
pub use service::ChannelsService;
