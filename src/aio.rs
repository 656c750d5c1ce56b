//! The async management client.
//!
//! Mirrors [`crate::ManagementClient`], with the same version resolution and
//! binding; only the transport calls suspend. Build one with
//! [`crate::ClientBuilder::build_async`].
//!
//! ```no_run
//! use eventhub_mgmt::{ClientBuilder, StaticToken, models::v2017_04_01::Eventhub};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let client = ClientBuilder::new(StaticToken::new("token"), "my-subscription").build_async()?;
//!
//! let hub: Eventhub = client
//!     .scoped(async |client| {
//!         client
//!             .event_hubs()?
//!             .call(
//!                 "get",
//!                 &[
//!                     ("resourceGroupName", "rg"),
//!                     ("namespaceName", "ns1"),
//!                     ("eventHubName", "hub"),
//!                 ],
//!             )
//!             .await
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use futures::Stream;
use serde_json::Value;
use tracing::{trace, warn};

use crate::{
    ClientConfiguration,
    api::{
        ApiRequest, ApiResponse, Cursor, Error, NextPage, OperationRequest, Page, check_status,
        paginate_stream,
    },
    codec::CodecError,
    dispatch::{Binding, DispatchError, Dispatcher},
    models::{Model, ModelSet},
    operations::{
        CLUSTERS, CONFIGURATION, CONSUMER_GROUPS, DISASTER_RECOVERY_CONFIGS, EVENT_HUBS,
        NAMESPACES, OPERATIONS, REGIONS,
    },
    transport::{AsyncTransport, TransportError},
};

/// An async client for the management API.
#[derive(Debug)]
pub struct ManagementClient<T: AsyncTransport = reqwest::Client> {
    dispatcher: Dispatcher,
    transport: Arc<T>,
}

impl<T: AsyncTransport> Clone for ManagementClient<T> {
    fn clone(&self) -> Self {
        Self {
            dispatcher: self.dispatcher.clone(),
            transport: self.transport.clone(),
        }
    }
}

impl<T: AsyncTransport> ManagementClient<T> {
    pub(crate) fn new(dispatcher: Dispatcher, transport: Arc<T>) -> Self {
        Self {
            dispatcher,
            transport,
        }
    }

    /// The dispatcher.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// The shared transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The shared client configuration.
    pub fn config(&self) -> &ClientConfiguration {
        self.dispatcher.config()
    }

    /// Resolve the API version for an operation group.
    pub fn get_api_version(&self, group: &str) -> Result<&str, DispatchError> {
        self.dispatcher.get_api_version(group)
    }

    /// Bind an operation group at its resolved version.
    pub fn get_operations(&self, group: &str) -> Result<Operations<T>, DispatchError> {
        Ok(Operations {
            binding: self.dispatcher.bind(group)?,
            transport: self.transport.clone(),
        })
    }

    /// The models of an API version.
    pub fn list_models(&self, api_version: &str) -> Result<&'static ModelSet, DispatchError> {
        self.dispatcher.list_models(api_version)
    }

    /// Operations on dedicated clusters.
    pub fn clusters(&self) -> Result<Operations<T>, DispatchError> {
        self.get_operations(CLUSTERS)
    }

    /// Operations on cluster quota configuration.
    pub fn configuration(&self) -> Result<Operations<T>, DispatchError> {
        self.get_operations(CONFIGURATION)
    }

    /// Operations on consumer groups.
    pub fn consumer_groups(&self) -> Result<Operations<T>, DispatchError> {
        self.get_operations(CONSUMER_GROUPS)
    }

    /// Operations on geo-disaster-recovery pairings.
    pub fn disaster_recovery_configs(&self) -> Result<Operations<T>, DispatchError> {
        self.get_operations(DISASTER_RECOVERY_CONFIGS)
    }

    /// Operations on event hubs.
    pub fn event_hubs(&self) -> Result<Operations<T>, DispatchError> {
        self.get_operations(EVENT_HUBS)
    }

    /// Operations on namespaces.
    pub fn namespaces(&self) -> Result<Operations<T>, DispatchError> {
        self.get_operations(NAMESPACES)
    }

    /// The provider's operation listing.
    pub fn operations(&self) -> Result<Operations<T>, DispatchError> {
        self.get_operations(OPERATIONS)
    }

    /// Regions available per SKU.
    pub fn regions(&self) -> Result<Operations<T>, DispatchError> {
        self.get_operations(REGIONS)
    }

    /// Acquire the transport's resources.
    pub async fn open(&self) -> Result<(), TransportError> {
        self.transport.open().await
    }

    /// Release the transport's resources.
    pub async fn close(&self) -> Result<(), TransportError> {
        self.transport.close().await
    }

    /// Open the client, run `f` with it, and close it again.
    ///
    /// The transport is closed whether or not `f` succeeds, and an error from
    /// `f` takes precedence over an error from closing. If the returned
    /// future is dropped before it completes, closing is spawned onto the
    /// current tokio runtime.
    pub async fn scoped<R, E>(self, f: impl AsyncFnOnce(&Self) -> Result<R, E>) -> Result<R, E>
    where
        T: 'static,
        E: From<TransportError>,
    {
        self.open().await?;

        let mut guard = CloseGuard(Some(self.transport.clone()));
        let result = f(&self).await;
        guard.disarm();

        let closed = self.close().await;
        let value = result?;
        closed?;
        Ok(value)
    }
}

/// Closes the transport in the background if a scope is abandoned.
struct CloseGuard<T: AsyncTransport + 'static>(Option<Arc<T>>);

impl<T: AsyncTransport + 'static> CloseGuard<T> {
    fn disarm(&mut self) {
        self.0 = None;
    }
}

impl<T: AsyncTransport + 'static> Drop for CloseGuard<T> {
    fn drop(&mut self) {
        let Some(transport) = self.0.take() else {
            return;
        };

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    if let Err(e) = transport.close().await {
                        warn!("Failed to close transport: {e:#}");
                    }
                });
            }
            Err(_) => warn!("Scope dropped outside of a runtime; transport not closed"),
        }
    }
}

/// An operation group bound to one API version, with a handle on the shared
/// transport.
#[derive(Debug)]
pub struct Operations<T: AsyncTransport = reqwest::Client> {
    binding: Binding,
    transport: Arc<T>,
}

impl<T: AsyncTransport> Operations<T> {
    /// The binding behind this handle.
    pub fn binding(&self) -> &Binding {
        &self.binding
    }

    /// The operation group.
    pub fn group(&self) -> &'static str {
        self.binding.group()
    }

    /// The bound API version.
    pub fn api_version(&self) -> &'static str {
        self.binding.api_version()
    }

    /// Call an operation without a request body.
    pub async fn call<R: ApiResponse>(
        &self,
        operation: &str,
        params: &[(&str, &str)],
    ) -> Result<R, Error> {
        let op = self
            .binding
            .checked_operation(operation, None, R::MODEL, false)?;
        R::check(self.binding.deserializer())?;

        let req = OperationRequest {
            op,
            api_version: self.api_version(),
            params,
            body: None,
        };

        let resp = self.send(req.into_request(self.binding.config())?).await?;
        R::from_response(resp, self.binding.deserializer())
    }

    /// Call an operation with a request body.
    pub async fn call_with<B: Model, R: ApiResponse>(
        &self,
        operation: &str,
        params: &[(&str, &str)],
        body: &B,
    ) -> Result<R, Error> {
        let op = self
            .binding
            .checked_operation(operation, Some(B::NAME), R::MODEL, false)?;
        R::check(self.binding.deserializer())?;

        let req = OperationRequest {
            op,
            api_version: self.api_version(),
            params,
            body: Some(self.binding.serializer().serialize(body)?),
        };

        let resp = self.send(req.into_request(self.binding.config())?).await?;
        R::from_response(resp, self.binding.deserializer())
    }

    /// Call a pageable operation, streaming its items. Type and parameter
    /// checks happen immediately; nothing is sent until the stream is
    /// polled.
    pub fn list<M: Model>(
        &self,
        operation: &str,
        params: &[(&str, &str)],
        limit: Option<usize>,
    ) -> Result<impl Stream<Item = Result<M, Error>> + use<'_, M, T>, Error> {
        let op = self
            .binding
            .checked_operation(operation, None, Some(M::NAME), true)?;
        let de = *self.binding.deserializer();
        de.check::<M>()?;

        let first = OperationRequest {
            op,
            api_version: self.api_version(),
            params,
            body: None,
        }
        .into_request(self.binding.config())?;

        Ok(paginate_stream(first, limit, move |cursor| {
            self.fetch(cursor, move |body| de.deserialize_page::<M>(body))
        }))
    }

    /// Call an operation with untyped JSON. Returns `None` if the response
    /// had no body.
    pub async fn call_value(
        &self,
        operation: &str,
        params: &[(&str, &str)],
        body: Option<&Value>,
    ) -> Result<Option<Value>, Error> {
        let declared = self.binding.operation(operation)?;
        let op = self.binding.checked_operation(
            operation,
            body.map(|_| declared.request_model.unwrap_or("a JSON body")),
            declared.response_model,
            false,
        )?;

        let body = match (op.request_model, body) {
            (Some(model), Some(value)) => {
                Some(self.binding.serializer().serialize_value(model, value)?)
            }
            _ => None,
        };

        let req = OperationRequest {
            op,
            api_version: self.api_version(),
            params,
            body,
        };

        let resp = self.send(req.into_request(self.binding.config())?).await?;
        let body = check_status(resp)?;
        match op.response_model {
            Some(model) if !body.is_empty() => Ok(Some(
                self.binding.deserializer().deserialize_value(model, &body)?,
            )),
            _ => Ok(None),
        }
    }

    /// Call a pageable operation with untyped JSON, streaming its items.
    pub fn list_values(
        &self,
        operation: &str,
        params: &[(&str, &str)],
        limit: Option<usize>,
    ) -> Result<impl Stream<Item = Result<Value, Error>> + use<'_, T>, Error> {
        let declared = self.binding.operation(operation)?;
        let op =
            self.binding
                .checked_operation(operation, None, declared.response_model, true)?;
        let model = op.response_model.unwrap_or_default();
        let de = *self.binding.deserializer();

        let first = OperationRequest {
            op,
            api_version: self.api_version(),
            params,
            body: None,
        }
        .into_request(self.binding.config())?;

        Ok(paginate_stream(first, limit, move |cursor| {
            self.fetch(cursor, move |body| de.deserialize_value_page(model, body))
        }))
    }

    async fn send(&self, req: http::Request<String>) -> Result<http::Response<Vec<u8>>, Error> {
        trace!(method = %req.method(), uri = %req.uri(), "sending request");

        let resp = self.transport.send(req).await?;
        trace!(status = %resp.status(), "received response");
        Ok(resp)
    }

    async fn fetch<P>(
        &self,
        cursor: Cursor<http::Request<String>>,
        decode: impl FnOnce(&[u8]) -> Result<Page<P>, CodecError>,
    ) -> Result<Page<P>, Error> {
        let req = match cursor {
            Cursor::Start(req) => req,
            Cursor::Link(link) => NextPage { link: &link }.into_request(self.binding.config())?,
        };

        let body = check_status(self.send(req).await?)?;
        Ok(decode(&body)?)
    }
}

#[cfg(test)]
mod test {
    use assert_matches::assert_matches;
    use futures::TryStreamExt as _;

    use super::*;
    use crate::{
        ApiErrorKind, ClientBuilder, StaticToken,
        api::testutil::{MockTransport, TEST_SUBSCRIPTION},
        dispatch::ApiProfile,
        models::{v2015_08_01, v2017_04_01},
    };

    fn client(mock: MockTransport) -> ManagementClient<MockTransport> {
        ClientBuilder::new(StaticToken::new("test-token"), TEST_SUBSCRIPTION)
            .build_async_with(mock)
            .unwrap()
    }

    const HUB: &str = r#"{"name": "hub", "properties": {"partitionCount": 4, "status": "Active"}}"#;

    const HUB_PARAMS: &[(&str, &str)] = &[
        ("resourceGroupName", "rg"),
        ("namespaceName", "ns1"),
        ("eventHubName", "hub"),
    ];

    #[tokio::test]
    async fn same_resolution_as_sync() -> anyhow::Result<()> {
        let client = client(MockTransport::new());
        assert_eq!(client.get_api_version(EVENT_HUBS)?, "2017-04-01");
        assert_matches!(
            client.clusters(),
            Err(DispatchError::UnsupportedVersion { .. })
        );

        let pinned = ClientBuilder::new(StaticToken::new("test-token"), TEST_SUBSCRIPTION)
            .profile(ApiProfile::pinned("2015-08-01"))
            .build_async_with(MockTransport::new())?;
        assert_eq!(pinned.event_hubs()?.api_version(), "2015-08-01");
        assert_eq!(
            pinned.list_models("2015-08-01")?,
            &v2015_08_01::MODELS
        );

        Ok(())
    }

    #[tokio::test]
    async fn get_event_hub() -> anyhow::Result<()> {
        let client = client(MockTransport::new().respond(200, HUB));

        let hub: v2017_04_01::Eventhub = client.event_hubs()?.call("get", HUB_PARAMS).await?;
        assert_eq!(hub.properties.partition_count, Some(4));

        let requests = client.transport().requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].uri.ends_with("/eventhubs/hub?api-version=2017-04-01"));

        Ok(())
    }

    #[tokio::test]
    async fn stream_follows_next_link() -> anyhow::Result<()> {
        let mock = MockTransport::new()
            .respond(
                200,
                &format!(
                    r#"{{"value": [{HUB}], "nextLink": "https://management.azure.com/page2"}}"#
                ),
            )
            .respond(200, &format!(r#"{{"value": [{HUB}]}}"#));
        let client = client(mock);

        let hubs = client.event_hubs()?;
        let stream = hubs.list::<v2017_04_01::Eventhub>(
            "list_by_namespace",
            &[("resourceGroupName", "rg"), ("namespaceName", "ns1")],
            None,
        )?;

        // Nothing is sent until the stream is polled.
        assert!(client.transport().requests().is_empty());

        let all: Vec<_> = stream.try_collect().await?;
        assert_eq!(all.len(), 2);
        assert_eq!(
            client.transport().requests()[1].uri,
            "https://management.azure.com/page2"
        );

        Ok(())
    }

    #[tokio::test]
    async fn foreign_next_link() -> anyhow::Result<()> {
        let mock = MockTransport::new().respond(
            200,
            &format!(r#"{{"value": [{HUB}], "nextLink": "https://elsewhere.example.com/page2"}}"#),
        );
        let client = client(mock);

        let hubs = client.event_hubs()?;
        let result: Result<Vec<v2017_04_01::Eventhub>, _> = hubs
            .list(
                "list_by_namespace",
                &[("resourceGroupName", "rg"), ("namespaceName", "ns1")],
                None,
            )?
            .try_collect()
            .await;

        assert_matches!(
            result,
            Err(Error::Request(crate::RequestError::ForeignNextLink(_)))
        );
        assert_eq!(client.transport().requests().len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn scoped_opens_and_closes() -> anyhow::Result<()> {
        let client = client(MockTransport::new().respond(200, HUB));
        let transport = client.transport.clone();

        let hub: v2017_04_01::Eventhub = client
            .scoped(async |c| c.event_hubs()?.call("get", HUB_PARAMS).await)
            .await?;
        assert_eq!(hub.name.as_deref(), Some("hub"));

        assert_eq!(transport.opens(), 1);
        assert_eq!(transport.closes(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn scoped_closes_on_error() {
        let client = client(
            MockTransport::new().respond(404, r#"{"error": {"code": "ResourceNotFound"}}"#),
        );
        let transport = client.transport.clone();

        let result: Result<v2017_04_01::Eventhub, Error> = client
            .scoped(async |c| c.event_hubs()?.call("get", HUB_PARAMS).await)
            .await;

        assert_matches!(result, Err(ref e) if e.api_kind() == Some(&ApiErrorKind::ResourceNotFound));
        assert_eq!(transport.closes(), 1);
    }

    #[tokio::test]
    async fn dropped_scope_still_closes() {
        let client = client(MockTransport::new());
        let transport = client.transport.clone();

        let scope = client.scoped(async |_| {
            futures::future::pending::<()>().await;
            Ok::<_, Error>(())
        });

        // Poll the scope once so it opens, then abandon it.
        let _ = tokio::time::timeout(std::time::Duration::from_millis(10), scope).await;
        assert_eq!(transport.opens(), 1);

        for _ in 0..100 {
            if transport.closes() == 1 {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert_eq!(transport.closes(), 1);
    }

    #[tokio::test]
    async fn untyped_stream() -> anyhow::Result<()> {
        let client = client(MockTransport::new().respond(
            200,
            r#"{"value": [{"name": "Microsoft.EventHub/namespaces/read"}]}"#,
        ));

        let ops = client.operations()?;
        let values: Vec<Value> = ops.list_values("list", &[], None)?.try_collect().await?;
        assert_eq!(values[0]["name"], "Microsoft.EventHub/namespaces/read");

        assert_matches!(
            ops.list_values("nope", &[], None).map(|_| ()),
            Err(Error::Dispatch(DispatchError::UnknownOperation { .. }))
        );

        Ok(())
    }
}
