//! Retrying HTTP fetch layer
//!
//! Performs one logical "fetch a URL" operation and normalizes whatever the
//! server (or the network) does into a [`FetchResult`]. The fetcher knows
//! nothing about schemas.
//!
//! ## Example
//!
//! ```rust,no_run
//! use api_schema_probe::fetch::{FetchConfig, FetchRequest, ReqwestTransport, fetch_with_retry};
//!
//! # async fn example() {
//! let transport = ReqwestTransport::new();
//! let request = FetchRequest::new("https://api.example.com/users")
//!     .with_header("Authorization", "Bearer token")
//!     .with_query_param("limit", "10");
//! let config = FetchConfig::builder().max_retries(2).initial_delay_ms(500).build();
//!
//! let result = fetch_with_retry(&transport, &request, &config).await;
//! if result.status == 0 {
//!     eprintln!("unreachable: {:?}", result.error_type);
//! }
//! # }
//! ```

mod config;
mod error;
mod retry;
mod transport;

pub use config::{FetchConfig, FetchConfigBuilder};
pub use error::{ErrorType, TransportError};
pub use retry::{FetchResult, ResponseBody, fetch_with_retry};
#[cfg(feature = "api-backend")]
pub use transport::ReqwestTransport;
pub use transport::{FetchRequest, HttpTransport, RawResponse};
