//! vSphere tag resolution.
//!
//! [`TagResolver`](resolver::TagResolver) opens a REST session against vCenter, walks the
//! tagging endpoints and returns a [`vtag_model::ResourceTagMap`]. HTTP goes through the
//! [`Transport`](transport::Transport) seam so the resolver can run against any backend.
pub mod error;
pub mod resolver;
pub mod retry;
pub mod session;
pub mod transport;

pub mod prelude {
    pub use crate::error::{ApiError, ApiResult};
    pub use crate::resolver::{TagResolver, UNKNOWN_CATEGORY};
    pub use crate::retry::RetryPolicy;
    pub use crate::session::RestSession;
    pub use crate::transport::{ApiRequest, HttpTransport, Method, Transport, TransportError};
}
