//! A multi-API-version management client for Event Hubs.
//!
//! The management API ships several revisions side by side (`2015-08-01`,
//! `2017-04-01`, `2018-01-01-preview`), each with its own operations and its
//! own request and response shapes. This crate keeps every revision and picks
//! one per operation group at the moment the group is accessed:
//!
//! 1. an explicit API version, if one was given to the [`ClientBuilder`];
//! 2. otherwise, the [`ApiProfile`]'s entry for the group;
//! 3. otherwise, [`DEFAULT_API_VERSION`].
//!
//! The resolved version must be one the group actually exists at. A group
//! that only exists in the preview (like `clusters`) fails to resolve under
//! the default, rather than falling back to some nearby version.
//!
//! # Example
//!
//! ```no_run
//! use eventhub_mgmt::{ClientBuilder, StaticToken, models::v2017_04_01::EhNamespace};
//!
//! # fn main() -> anyhow::Result<()> {
//! let client = ClientBuilder::new(StaticToken::new("token"), "my-subscription").build()?;
//! assert_eq!(client.get_api_version("event_hubs")?, "2017-04-01");
//!
//! let ns: EhNamespace = client
//!     .namespaces()?
//!     .call("get", &[("resourceGroupName", "rg"), ("namespaceName", "ns1")])?;
//!
//! println!("{:?} is {:?}", ns.name, ns.properties.provisioning_state);
//! # Ok(())
//! # }
//! ```
//!
//! # HTTP Requests and Responses
//!
//! The request types are designed to work with any HTTP client that uses the
//! [`http`] crate. Use [`ApiRequest::into_request`] to create a request, and
//! [`ApiResponse::from_response`] to parse the response. [`Transport`] and
//! [`AsyncTransport`] are the seams for plugging in your own client.

#![warn(
    anonymous_parameters,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    rust_2018_idioms,
    single_use_lifetimes,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_extern_crates,
    unused_qualifications,
    variant_size_differences
)]

pub mod aio;
mod api;
mod client;
mod codec;
mod config;
mod dispatch;
pub mod models;
pub mod operations;
mod transport;

pub use api::*;
pub use client::{ClientBuilder, ManagementClient, Operations};
pub use codec::{CodecError, Deserializer, Serializer};
pub use config::{
    ClientConfiguration, CredentialError, Error as ConfigError, Settings, StaticToken,
    TokenCredential, VersionSettings,
};
pub use dispatch::*;
pub use transport::{AsyncTransport, Transport, TransportError};
