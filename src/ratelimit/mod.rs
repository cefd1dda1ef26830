//! Rate limit tracking and admission logic.
//!
//! The client mirrors the quota state advertised by Riot API response
//! headers and refuses, locally and without network cost, to send requests
//! it already knows would be rejected. [`LimitRegistry`] is the shared
//! store, [`admit`] the admission decision, and [`RouteTable`] the mapping
//! from request paths to the operation keys quotas are tracked under.

mod gate;
mod headers;
mod registry;
mod routes;
mod window;

pub use gate::{admit, Admission};
pub use headers::{
    parse_rate_headers, Advisory, LimitType, RateHeaders, HEADER_API_KEY, HEADER_APP_RATE_LIMIT,
    HEADER_APP_RATE_LIMIT_COUNT, HEADER_METHOD_RATE_LIMIT, HEADER_METHOD_RATE_LIMIT_COUNT,
    HEADER_RATE_LIMIT_TYPE, HEADER_RETRY_AFTER,
};
pub use registry::{LimitRegistry, APP_RATE_KEY};
pub use routes::RouteTable;
pub use window::{
    encode_rate_string, parse_counts, parse_limits, parse_rate_string, Count, Limit, Rate,
};
