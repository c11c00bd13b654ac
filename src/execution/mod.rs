//! Request execution: the transport seam, the `reqwest` implementation,
//! interceptors, and HTTP error classification.

pub mod errors;
pub mod interceptor;
pub mod reqwest_transport;
pub mod transport;

pub use interceptor::{HttpInterceptor, HttpRequestContext, LoggingInterceptor};
pub use reqwest_transport::ReqwestTransport;
pub use transport::Transport;
