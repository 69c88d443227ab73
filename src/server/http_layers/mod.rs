mod requests_logging;
mod route_case;
mod security_headers;

pub use requests_logging::{log_requests, RequestsLoggingLevel};
pub use route_case::fold_route_case;
pub use security_headers::security_headers;
