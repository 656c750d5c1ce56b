//! The blocking management client.

use std::{fmt, sync::Arc, time};

use serde_json::Value;
use tracing::trace;
use url::Url;

use crate::{
    ClientConfiguration, TokenCredential,
    aio,
    api::{
        ApiRequest, ApiResponse, Error, NextPage, OperationRequest, Page, check_status, paginate,
    },
    config::{default_base_url, make_ua},
    dispatch::{
        ApiProfile, ApiVersionCatalog, Binding, DispatchError, Dispatcher, OperationRegistry,
        VersionResolver,
    },
    models::{Model, ModelSet},
    operations::{
        CLUSTERS, CONFIGURATION, CONSUMER_GROUPS, DISASTER_RECOVERY_CONFIGS, EVENT_HUBS,
        NAMESPACES, OPERATIONS, REGIONS,
    },
    transport::{self, AsyncTransport, Transport, TransportError},
};

/// Configures and builds a [`ManagementClient`] or an
/// [`aio::ManagementClient`].
///
/// ```no_run
/// use eventhub_mgmt::{ClientBuilder, StaticToken, models::v2017_04_01::EhNamespace};
///
/// # fn main() -> anyhow::Result<()> {
/// let client = ClientBuilder::new(StaticToken::new("token"), "my-subscription").build()?;
///
/// let namespaces = client.namespaces()?;
/// for ns in namespaces.list::<EhNamespace>("list", &[], None)? {
///     println!("{:?}", ns?.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ClientBuilder {
    credential: Arc<dyn TokenCredential>,
    subscription_id: String,
    api_version: Option<String>,
    base_url: Option<Url>,
    profile: ApiProfile,
    catalog: Option<ApiVersionCatalog>,
    registry: Option<Arc<OperationRegistry>>,
    user_agent: Option<String>,
    timeout: Option<time::Duration>,
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("subscription_id", &self.subscription_id)
            .field("api_version", &self.api_version)
            .field("base_url", &self.base_url)
            .field("profile", &self.profile.name)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl ClientBuilder {
    /// Start building a client for a subscription.
    pub fn new(
        credential: impl TokenCredential + 'static,
        subscription_id: impl Into<String>,
    ) -> Self {
        Self {
            credential: Arc::new(credential),
            subscription_id: subscription_id.into(),
            api_version: None,
            base_url: None,
            profile: ApiProfile::default_profile(),
            catalog: None,
            registry: None,
            user_agent: None,
            timeout: None,
        }
    }

    /// Use this API version for every operation group, overriding the
    /// profile.
    pub fn api_version(self, api_version: impl Into<String>) -> Self {
        Self {
            api_version: Some(api_version.into()),
            ..self
        }
    }

    /// Use a different management endpoint.
    pub fn base_url(self, base_url: Url) -> Self {
        Self {
            base_url: Some(base_url),
            ..self
        }
    }

    /// Resolve versions through this profile.
    pub fn profile(self, profile: ApiProfile) -> Self {
        Self { profile, ..self }
    }

    /// Restrict the catalog of available versions. By default, every
    /// registered (group, version) pair is available.
    pub fn catalog(self, catalog: ApiVersionCatalog) -> Self {
        Self {
            catalog: Some(catalog),
            ..self
        }
    }

    /// Use a custom registry instead of the built-in one.
    pub fn registry(self, registry: Arc<OperationRegistry>) -> Self {
        Self {
            registry: Some(registry),
            ..self
        }
    }

    /// Set the user agent sent with every request.
    pub fn user_agent(self, user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: Some(user_agent.into()),
            ..self
        }
    }

    /// Set a timeout for each request, when building with the default
    /// transports.
    pub fn timeout(self, timeout: time::Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..self
        }
    }

    fn dispatcher(self) -> Result<Dispatcher, DispatchError> {
        let registry = self.registry.unwrap_or_else(OperationRegistry::builtin);
        let catalog = self.catalog.unwrap_or_else(|| registry.catalog());

        let config = ClientConfiguration {
            credential: self.credential,
            subscription_id: self.subscription_id,
            base_url: self.base_url.unwrap_or_else(default_base_url),
            user_agent: self.user_agent.unwrap_or_else(|| make_ua(None)),
        };

        let resolver = VersionResolver::new(catalog)
            .with_profile(self.profile)
            .with_api_version(self.api_version);

        Dispatcher::new(resolver, registry, Arc::new(config))
    }

    /// Build a blocking client backed by [`ureq`].
    pub fn build(self) -> Result<ManagementClient, Error> {
        let agent = transport::ureq_agent(self.timeout);
        self.build_with(agent)
    }

    /// Build a blocking client over the given transport.
    pub fn build_with<T: Transport>(self, transport: T) -> Result<ManagementClient<T>, Error> {
        Ok(ManagementClient {
            dispatcher: self.dispatcher()?,
            transport: Arc::new(transport),
        })
    }

    /// Build an async client backed by [`reqwest`].
    pub fn build_async(self) -> Result<aio::ManagementClient, Error> {
        let client = transport::reqwest_client(self.timeout)?;
        self.build_async_with(client)
    }

    /// Build an async client over the given transport.
    pub fn build_async_with<T: AsyncTransport>(
        self,
        transport: T,
    ) -> Result<aio::ManagementClient<T>, Error> {
        Ok(aio::ManagementClient::new(
            self.dispatcher()?,
            Arc::new(transport),
        ))
    }
}

/// A blocking client for the management API.
///
/// Each operation-group accessor resolves the API version for that group
/// and returns a fresh [`Operations`] handle bound to it. The transport and
/// configuration are shared by every handle.
#[derive(Debug)]
pub struct ManagementClient<T: Transport = ureq::Agent> {
    dispatcher: Dispatcher,
    transport: Arc<T>,
}

impl<T: Transport> Clone for ManagementClient<T> {
    fn clone(&self) -> Self {
        Self {
            dispatcher: self.dispatcher.clone(),
            transport: self.transport.clone(),
        }
    }
}

impl<T: Transport> ManagementClient<T> {
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

    /// Close the transport.
    pub fn close(&self) -> Result<(), TransportError> {
        self.transport.close()
    }

    /// Run `f` with the client, then close it. An error from `f` takes
    /// precedence over an error from closing.
    pub fn scoped<R, E>(self, f: impl FnOnce(&Self) -> Result<R, E>) -> Result<R, E>
    where
        E: From<TransportError>,
    {
        let result = f(&self);
        let closed = self.close();
        let value = result?;
        closed?;
        Ok(value)
    }
}

/// An operation group bound to one API version, with a handle on the shared
/// transport.
///
/// Calls check the requested model types against the operation's declared
/// models before sending anything.
#[derive(Debug)]
pub struct Operations<T: Transport = ureq::Agent> {
    binding: Binding,
    transport: Arc<T>,
}

impl<T: Transport> Operations<T> {
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
    pub fn call<R: ApiResponse>(
        &self,
        operation: &str,
        params: &[(&str, &str)],
    ) -> Result<R, Error> {
        let op = self
            .binding
            .checked_operation(operation, None, R::MODEL, false)?;
        R::check(self.binding.deserializer())?;

        let resp = self.send(OperationRequest {
            op,
            api_version: self.api_version(),
            params,
            body: None,
        })?;

        R::from_response(resp, self.binding.deserializer())
    }

    /// Call an operation with a request body.
    pub fn call_with<B: Model, R: ApiResponse>(
        &self,
        operation: &str,
        params: &[(&str, &str)],
        body: &B,
    ) -> Result<R, Error> {
        let op = self
            .binding
            .checked_operation(operation, Some(B::NAME), R::MODEL, false)?;
        R::check(self.binding.deserializer())?;
        let body = self.binding.serializer().serialize(body)?;

        let resp = self.send(OperationRequest {
            op,
            api_version: self.api_version(),
            params,
            body: Some(body),
        })?;

        R::from_response(resp, self.binding.deserializer())
    }

    /// Call a pageable operation. The first page is fetched eagerly; later
    /// pages are fetched as the iterator reaches them.
    pub fn list<M: Model>(
        &self,
        operation: &str,
        params: &[(&str, &str)],
        limit: Option<usize>,
    ) -> Result<impl Iterator<Item = Result<M, Error>> + use<'_, M, T>, Error> {
        let op = self
            .binding
            .checked_operation(operation, None, Some(M::NAME), true)?;
        let de = self.binding.deserializer();
        de.check::<M>()?;

        let resp = self.send(OperationRequest {
            op,
            api_version: self.api_version(),
            params,
            body: None,
        })?;

        let first: Page<M> = de.deserialize_page(&check_status(resp)?)?;
        Ok(paginate(first, limit, move |link| -> Result<Page<M>, Error> {
            let body = self.fetch(link)?;
            Ok(de.deserialize_page(&body)?)
        }))
    }

    /// Call an operation with untyped JSON, checked against the model names
    /// the operation declares. Returns `None` if the response had no body.
    pub fn call_value(
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

        let resp = self.send(OperationRequest {
            op,
            api_version: self.api_version(),
            params,
            body,
        })?;

        let body = check_status(resp)?;
        match op.response_model {
            Some(model) if !body.is_empty() => Ok(Some(
                self.binding.deserializer().deserialize_value(model, &body)?,
            )),
            _ => Ok(None),
        }
    }

    /// Call a pageable operation with untyped JSON.
    pub fn list_values(
        &self,
        operation: &str,
        params: &[(&str, &str)],
        limit: Option<usize>,
    ) -> Result<impl Iterator<Item = Result<Value, Error>> + use<'_, T>, Error> {
        let declared = self.binding.operation(operation)?;
        let op =
            self.binding
                .checked_operation(operation, None, declared.response_model, true)?;
        let model = op.response_model.unwrap_or_default();
        let de = self.binding.deserializer();

        let resp = self.send(OperationRequest {
            op,
            api_version: self.api_version(),
            params,
            body: None,
        })?;

        let first = de.deserialize_value_page(model, &check_status(resp)?)?;
        Ok(paginate(first, limit, move |link| -> Result<Page<Value>, Error> {
            let body = self.fetch(link)?;
            Ok(de.deserialize_value_page(model, &body)?)
        }))
    }

    fn send(&self, req: impl ApiRequest) -> Result<http::Response<Vec<u8>>, Error> {
        let req = req.into_request(self.binding.config())?;
        trace!(method = %req.method(), uri = %req.uri(), "sending request");

        let resp = self.transport.send(req)?;
        trace!(status = %resp.status(), "received response");
        Ok(resp)
    }

    fn fetch(&self, link: &str) -> Result<Vec<u8>, Error> {
        let resp = self.send(NextPage { link })?;
        Ok(check_status(resp)?)
    }
}

#[cfg(test)]
mod test {
    use assert_matches::assert_matches;

    use super::*;
    use crate::{
        ApiErrorKind, CodecError, StaticToken,
        api::testutil::{MockTransport, TEST_SUBSCRIPTION},
        models::{v2015_08_01, v2017_04_01, v2018_01_01_preview},
    };

    fn builder() -> ClientBuilder {
        ClientBuilder::new(StaticToken::new("test-token"), TEST_SUBSCRIPTION)
    }

    fn client(mock: MockTransport) -> ManagementClient<MockTransport> {
        builder().build_with(mock).unwrap()
    }

    const NAMESPACE: &str = r#"{
        "id": "/subscriptions/s/resourceGroups/rg/providers/Microsoft.EventHub/namespaces/ns1",
        "name": "ns1",
        "location": "westus",
        "properties": {"provisioningState": "Succeeded"}
    }"#;

    #[test]
    fn event_hubs_versions() -> anyhow::Result<()> {
        let default = client(MockTransport::new());
        assert_eq!(default.get_api_version(EVENT_HUBS)?, "2017-04-01");
        assert_eq!(default.event_hubs()?.api_version(), "2017-04-01");

        let old = builder()
            .api_version("2015-08-01")
            .build_with(MockTransport::new())?;
        let hubs = old.event_hubs()?;
        assert_eq!(hubs.api_version(), "2015-08-01");
        assert_eq!(hubs.binding().deserializer().models(), &v2015_08_01::MODELS);

        let bogus = builder()
            .api_version("1999-01-01")
            .build_with(MockTransport::new())?;
        assert_matches!(
            bogus.event_hubs(),
            Err(DispatchError::UnsupportedVersion { .. })
        );

        Ok(())
    }

    #[test]
    fn clusters_need_preview() -> anyhow::Result<()> {
        let client = client(MockTransport::new());
        assert_matches!(
            client.clusters(),
            Err(DispatchError::UnsupportedVersion { .. })
        );

        let preview = builder()
            .profile(ApiProfile::latest().with_group(CLUSTERS, "2018-01-01-preview"))
            .build_with(MockTransport::new())?;
        assert_eq!(preview.clusters()?.api_version(), "2018-01-01-preview");
        assert_eq!(preview.namespaces()?.api_version(), "2017-04-01");

        Ok(())
    }

    #[test]
    fn handles_share_transport() -> anyhow::Result<()> {
        let client = client(MockTransport::new());
        let a = client.namespaces()?;
        let b = client.namespaces()?;

        assert!(Arc::ptr_eq(&a.transport, &b.transport));
        assert!(Arc::ptr_eq(&a.transport, &client.transport));
        Ok(())
    }

    #[test]
    fn get_namespace() -> anyhow::Result<()> {
        let client = client(MockTransport::new().respond(200, NAMESPACE));

        let ns: v2017_04_01::EhNamespace = client
            .namespaces()?
            .call("get", &[("resourceGroupName", "rg"), ("namespaceName", "ns1")])?;
        assert_eq!(ns.name.as_deref(), Some("ns1"));

        let requests = client.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, http::Method::GET);
        assert_eq!(
            requests[0].uri,
            format!(
                "https://management.azure.com/subscriptions/{TEST_SUBSCRIPTION}/resourceGroups/rg\
                 /providers/Microsoft.EventHub/namespaces/ns1?api-version=2017-04-01"
            )
        );

        Ok(())
    }

    #[test]
    fn create_with_body() -> anyhow::Result<()> {
        let client = builder()
            .api_version("2015-08-01")
            .build_with(MockTransport::new().respond(200, NAMESPACE))?;

        let params = v2015_08_01::NamespaceCreateOrUpdateParameters {
            location: "westus".into(),
            sku: None,
            tags: Default::default(),
            properties: None,
        };

        let ns: v2015_08_01::NamespaceResource = client.namespaces()?.call_with(
            "create_or_update",
            &[("resourceGroupName", "rg"), ("namespaceName", "ns1")],
            &params,
        )?;
        assert_eq!(ns.location, "westus");

        let requests = client.transport().requests();
        assert_eq!(requests[0].method, http::Method::PUT);
        assert_eq!(requests[0].body, r#"{"location":"westus"}"#);

        Ok(())
    }

    #[test]
    fn create_accepted_without_body() -> anyhow::Result<()> {
        let client = builder().api_version("2015-08-01").build_with(
            MockTransport::new()
                .respond(202, "")
                .respond(202, "")
                .respond(201, NAMESPACE),
        )?;

        let params = v2015_08_01::NamespaceCreateOrUpdateParameters {
            location: "westus".into(),
            sku: None,
            tags: Default::default(),
            properties: None,
        };
        let path = [("resourceGroupName", "rg"), ("namespaceName", "ns1")];
        let namespaces = client.namespaces()?;

        let pending: Option<v2015_08_01::NamespaceResource> =
            namespaces.call_with("create_or_update", &path, &params)?;
        assert!(pending.is_none());

        let res = namespaces
            .call_with::<_, v2015_08_01::NamespaceResource>("create_or_update", &path, &params);
        assert_matches!(res, Err(Error::NoRepresentation(status)) if status == http::StatusCode::ACCEPTED);

        let created: Option<v2015_08_01::NamespaceResource> =
            namespaces.call_with("create_or_update", &path, &params)?;
        assert_eq!(created.map(|ns| ns.location), Some("westus".to_owned()));

        Ok(())
    }

    #[test]
    fn list_follows_next_link() -> anyhow::Result<()> {
        let next = "https://management.azure.com/subscriptions/s/providers/Microsoft.EventHub/namespaces?api-version=2017-04-01&$skiptoken=abc";
        let mock = MockTransport::new()
            .respond(
                200,
                &format!(r#"{{"value": [{NAMESPACE}], "nextLink": "{next}"}}"#),
            )
            .respond(200, &format!(r#"{{"value": [{NAMESPACE}, {NAMESPACE}]}}"#));
        let client = client(mock);

        let namespaces = client.namespaces()?;
        let all: Vec<v2017_04_01::EhNamespace> = namespaces
            .list("list", &[], None)?
            .collect::<Result<_, _>>()?;
        assert_eq!(all.len(), 3);

        let requests = client.transport().requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].uri, next);

        Ok(())
    }

    #[test]
    fn list_limit_stops_fetching() -> anyhow::Result<()> {
        let mock = MockTransport::new().respond(
            200,
            &format!(
                r#"{{"value": [{NAMESPACE}, {NAMESPACE}], "nextLink": "https://management.azure.com/next"}}"#
            ),
        );
        let client = client(mock);

        let namespaces = client.namespaces()?;
        let some: Vec<v2017_04_01::EhNamespace> = namespaces
            .list("list", &[], Some(1))?
            .collect::<Result<_, _>>()?;
        assert_eq!(some.len(), 1);
        assert_eq!(client.transport().requests().len(), 1);

        Ok(())
    }

    #[test]
    fn error_response() -> anyhow::Result<()> {
        let mock = MockTransport::new().respond(
            404,
            r#"{"error": {"code": "ResourceNotFound", "message": "nope"}}"#,
        );
        let client = client(mock);

        let err = client
            .namespaces()?
            .call::<v2017_04_01::EhNamespace>(
                "get",
                &[("resourceGroupName", "rg"), ("namespaceName", "missing")],
            )
            .unwrap_err();
        assert_eq!(err.api_kind(), Some(&ApiErrorKind::ResourceNotFound));

        Ok(())
    }

    #[test]
    fn wrong_model_fails_before_io() -> anyhow::Result<()> {
        let client = client(MockTransport::new());
        let namespaces = client.namespaces()?;

        // A different model name than the operation declares.
        assert_matches!(
            namespaces.call::<v2015_08_01::NamespaceResource>(
                "get",
                &[("resourceGroupName", "rg"), ("namespaceName", "ns1")],
            ),
            Err(Error::Dispatch(DispatchError::UnexpectedModel { .. }))
        );

        // The right name, from the wrong version.
        let ops = client.operations()?;
        assert_matches!(
            ops.list::<v2015_08_01::Operation>("list", &[], None).map(|_| ()),
            Err(Error::Codec(CodecError::ModelNotInVersion { .. }))
        );

        // Pageable operation called as a single response.
        assert_matches!(
            ops.call::<v2017_04_01::Operation>("list", &[]),
            Err(Error::Dispatch(DispatchError::UnexpectedModel { .. }))
        );

        assert!(client.transport().requests().is_empty());
        Ok(())
    }

    #[test]
    fn missing_parameter_fails_before_io() -> anyhow::Result<()> {
        let client = client(MockTransport::new());
        let err = client
            .namespaces()?
            .call::<v2017_04_01::EhNamespace>("get", &[("resourceGroupName", "rg")])
            .unwrap_err();

        assert_matches!(err, Error::Request(crate::RequestError::MissingParameter(p)) if p == "namespaceName");
        assert!(client.transport().requests().is_empty());
        Ok(())
    }

    #[test]
    fn delete_without_body() -> anyhow::Result<()> {
        let client = client(MockTransport::new().respond(204, ""));
        client.event_hubs()?.call::<()>(
            "delete",
            &[
                ("resourceGroupName", "rg"),
                ("namespaceName", "ns1"),
                ("eventHubName", "hub"),
            ],
        )?;

        assert_eq!(client.transport().requests()[0].method, http::Method::DELETE);
        Ok(())
    }

    #[test]
    fn untyped_calls() -> anyhow::Result<()> {
        let mock = MockTransport::new()
            .respond(200, r#"{"nameAvailable": true}"#)
            .respond(200, r#"{"value": [{"name": "Microsoft.EventHub/namespaces/read"}]}"#);
        let client = client(mock);

        let body = serde_json::json!({"name": "ns1"});
        let result = client
            .namespaces()?
            .call_value("check_name_availability", &[], Some(&body))?;
        assert_eq!(result, Some(serde_json::json!({"nameAvailable": true})));

        let ops: Vec<_> = client
            .operations()?
            .list_values("list", &[], None)?
            .collect::<Result<_, _>>()?;
        assert_eq!(ops[0]["name"], "Microsoft.EventHub/namespaces/read");

        // Missing body.
        assert_matches!(
            client
                .namespaces()?
                .call_value("check_name_availability", &[], None),
            Err(Error::Dispatch(DispatchError::UnexpectedModel { .. }))
        );

        Ok(())
    }

    #[test]
    fn preview_models() -> anyhow::Result<()> {
        let mock = MockTransport::new().respond(
            200,
            r#"{"value": [{"name": "cluster1", "location": "westus", "sku": {"name": "Dedicated", "capacity": 1}}]}"#,
        );
        let client = builder()
            .api_version("2018-01-01-preview")
            .build_with(mock)?;

        let clusters: Vec<v2018_01_01_preview::Cluster> = client
            .clusters()?
            .list("list_by_resource_group", &[("resourceGroupName", "rg")], None)?
            .collect::<Result<_, _>>()?;
        assert_eq!(clusters[0].name.as_deref(), Some("cluster1"));

        Ok(())
    }

    #[test]
    fn scoped_closes() -> anyhow::Result<()> {
        let client = client(MockTransport::new());
        let transport = client.transport.clone();

        let version = client.scoped(|c| {
            c.get_api_version(NAMESPACES)
                .map(str::to_owned)
                .map_err(Error::from)
        })?;
        assert_eq!(version, "2017-04-01");
        assert_eq!(transport.closes(), 1);

        Ok(())
    }

    #[test]
    fn scoped_closes_on_error() {
        let client = client(MockTransport::new());
        let transport = client.transport.clone();

        let result: Result<(), Error> = client.scoped(|c| {
            c.clusters()?;
            Ok(())
        });

        assert_matches!(
            result,
            Err(Error::Dispatch(DispatchError::UnsupportedVersion { .. }))
        );
        assert_eq!(transport.closes(), 1);
    }

    #[test]
    fn external_catalog_must_be_implemented() {
        let catalog: ApiVersionCatalog = [(REGIONS, "2015-08-01")].into_iter().collect();
        let err = builder()
            .catalog(catalog)
            .build_with(MockTransport::new())
            .unwrap_err();

        assert_matches!(
            err,
            Error::Dispatch(DispatchError::MissingImplementation { .. })
        );
    }
}

#[cfg(all(test, feature = "_integration-tests"))]
mod integration {
    use super::*;
    use crate::{Settings, models::v2017_04_01::Operation};

    fn live() -> anyhow::Result<ManagementClient> {
        Ok(Settings::from_default_env()?.client_builder()?.build()?)
    }

    #[test]
    fn list_provider_operations() -> anyhow::Result<()> {
        let client = live()?;
        let ops: Vec<Operation> = client
            .operations()?
            .list("list", &[], Some(5))?
            .collect::<Result<_, _>>()?;

        assert!(!ops.is_empty());
        Ok(())
    }

    #[test]
    fn list_namespaces() -> anyhow::Result<()> {
        live()?.scoped(|client| -> anyhow::Result<()> {
            for ns in client.namespaces()?.list_values("list", &[], Some(10))? {
                assert!(ns?.get("location").is_some());
            }

            Ok(())
        })
    }
}
