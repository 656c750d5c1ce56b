//! Request building and response reading for management operations.
//!
//! Requests are built as [`http::Request`] values and responses read from
//! [`http::Response`] values, so any HTTP client can carry them. See
//! [`crate::Transport`] for the clients this crate wires up.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

use crate::{
    ClientConfiguration,
    codec::{CodecError, Deserializer},
    models::Model,
    operations::OperationDef,
};

mod error;
mod paginate;

#[cfg(test)]
pub(crate) mod testutil;

pub use error::*;
pub use paginate::*;

pub(crate) use paginate::{Cursor, paginate_stream};

// RFC 3986 unreserved characters pass through; everything else in a path
// segment is escaped.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

const CLIENT_REQUEST_ID: &str = "x-ms-client-request-id";

/// Implemented by types that can be sent as requests to the management API.
pub trait ApiRequest {
    /// The method to use.
    fn method(&self) -> http::Method {
        http::Method::GET
    }

    /// The full URL of the request, including the query string.
    fn url(&self, config: &ClientConfiguration) -> Result<Url, RequestError>;

    /// The encoded JSON body, if any.
    fn body(&self) -> Option<&str> {
        None
    }

    /// Consume the request and return an [http::Request] suitable for passing
    /// to your favorite HTTP client.
    fn into_request(
        self,
        config: &ClientConfiguration,
    ) -> Result<http::Request<String>, RequestError>
    where
        Self: Sized,
    {
        let url = self.url(config)?;
        let token = config.credential.token()?;

        let req = http::Request::builder()
            .method(self.method())
            .uri(url.as_str())
            .header(http::header::AUTHORIZATION, format!("Bearer {token}"))
            .header(http::header::USER_AGENT, &config.user_agent)
            .header(http::header::ACCEPT, "application/json")
            .header(CLIENT_REQUEST_ID, uuid::Uuid::new_v4().to_string());

        let req = if let Some(body) = self.body() {
            req.header(http::header::CONTENT_TYPE, "application/json")
                .header(http::header::CONTENT_LENGTH, body.len())
                .body(body.to_owned())?
        } else {
            req.body(String::new())?
        };

        Ok(req)
    }
}

/// A call to one operation at one API version.
///
/// Path placeholders are filled from `params`; `subscriptionId` defaults to
/// the configured subscription. Parameters that don't appear in the path are
/// sent as query parameters, followed by `api-version`.
#[derive(Debug, Clone)]
pub struct OperationRequest<'a> {
    /// The operation to call.
    pub op: &'static OperationDef,
    /// The API version to send.
    pub api_version: &'static str,
    /// Path and query parameters.
    pub params: &'a [(&'a str, &'a str)],
    /// The encoded request body.
    pub body: Option<String>,
}

impl OperationRequest<'_> {
    fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| *v)
    }

    fn fill_path(&self, config: &ClientConfiguration) -> Result<String, RequestError> {
        let mut path = String::with_capacity(self.op.path.len());
        let mut rest = self.op.path;

        while let Some((head, tail)) = rest.split_once('{') {
            let Some((name, tail)) = tail.split_once('}') else {
                break;
            };

            let value = match (name, self.param(name)) {
                (_, Some(v)) => v,
                ("subscriptionId", None) => config.subscription_id.as_str(),
                (_, None) => "",
            };

            if value.is_empty() {
                return Err(RequestError::MissingParameter(name.to_owned()));
            }

            path.push_str(head);
            path.extend(utf8_percent_encode(value, PATH_SEGMENT));
            rest = tail;
        }

        path.push_str(rest);
        Ok(path)
    }
}

impl ApiRequest for OperationRequest<'_> {
    fn method(&self) -> http::Method {
        self.op.verb.method()
    }

    fn url(&self, config: &ClientConfiguration) -> Result<Url, RequestError> {
        let path = self.fill_path(config)?;
        let base = config.base_url.as_str().trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}{path}"))?;

        {
            let path_params: Vec<_> = self.op.path_params().collect();
            let mut query = url.query_pairs_mut();
            for (k, v) in self.params {
                if !path_params.iter().any(|p| p == k) {
                    query.append_pair(k, v);
                }
            }

            query.append_pair("api-version", self.api_version);
        }

        Ok(url)
    }

    fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

/// A request for the next page of a pageable operation.
///
/// The link is used as given, since it already carries the API version and
/// any continuation token. Links to a different origin than the configured
/// endpoint are refused, so the bearer token isn't sent elsewhere.
#[derive(Debug, Clone, Copy)]
pub struct NextPage<'a> {
    /// The `nextLink` from the previous page.
    pub link: &'a str,
}

impl ApiRequest for NextPage<'_> {
    fn url(&self, config: &ClientConfiguration) -> Result<Url, RequestError> {
        let url = Url::parse(self.link)?;
        if url.origin() != config.base_url.origin() {
            return Err(RequestError::ForeignNextLink(self.link.to_owned()));
        }

        Ok(url)
    }
}

/// Implemented by types that can be read as responses from the management
/// API.
pub trait ApiResponse: Sized {
    /// The model name this response decodes as, or `None` for operations
    /// without a response body.
    const MODEL: Option<&'static str>;

    /// Check, before any I/O, that the response type can be decoded by `de`.
    fn check(_de: &Deserializer) -> Result<(), CodecError> {
        Ok(())
    }

    /// Decode a successful response body.
    fn from_body(body: &[u8], de: &Deserializer) -> Result<Self, CodecError>;

    /// Read the response from an [http::Response] object.
    fn from_response(resp: http::Response<Vec<u8>>, de: &Deserializer) -> Result<Self, Error> {
        let body = check_status(resp)?;
        Ok(Self::from_body(&body, de)?)
    }
}

impl<M: Model> ApiResponse for M {
    const MODEL: Option<&'static str> = Some(M::NAME);

    fn check(de: &Deserializer) -> Result<(), CodecError> {
        de.check::<M>()
    }

    fn from_body(body: &[u8], de: &Deserializer) -> Result<Self, CodecError> {
        de.deserialize(body)
    }

    fn from_response(resp: http::Response<Vec<u8>>, de: &Deserializer) -> Result<Self, Error> {
        let status = resp.status();
        let body = check_status(resp)?;
        if body.is_empty() {
            return Err(Error::NoRepresentation(status));
        }

        Ok(de.deserialize(&body)?)
    }
}

/// Long-running operations like `create_or_update` may answer
/// `202 Accepted` with an empty body while the resource is provisioned.
/// Decoding into `Option<M>` yields `None` for those responses.
impl<M: Model> ApiResponse for Option<M> {
    const MODEL: Option<&'static str> = Some(M::NAME);

    fn check(de: &Deserializer) -> Result<(), CodecError> {
        de.check::<M>()
    }

    fn from_body(body: &[u8], de: &Deserializer) -> Result<Self, CodecError> {
        if body.is_empty() {
            return Ok(None);
        }

        de.deserialize(body).map(Some)
    }
}

// For operations that return no body, like deletes.
impl ApiResponse for () {
    const MODEL: Option<&'static str> = None;

    fn from_body(_body: &[u8], _de: &Deserializer) -> Result<Self, CodecError> {
        Ok(())
    }
}

/// Return the body of a successful response, or the error it carries.
pub(crate) fn check_status(resp: http::Response<Vec<u8>>) -> Result<Vec<u8>, ApiError> {
    let status = resp.status();
    let body = resp.into_body();

    if status.is_success() {
        Ok(body)
    } else {
        Err(ApiError::from_body(status, &body))
    }
}

#[cfg(test)]
mod test {
    use assert_matches::assert_matches;

    use super::{testutil::test_config, *};
    use crate::{
        models::{v2015_08_01, v2017_04_01},
        operations::{consumer_groups, namespaces},
    };

    #[test]
    fn fills_path() -> anyhow::Result<()> {
        let config = test_config();
        let req = OperationRequest {
            op: namespaces::V2017_04_01.get("get").unwrap(),
            api_version: "2017-04-01",
            params: &[("resourceGroupName", "rg 1"), ("namespaceName", "ns1")],
            body: None,
        };

        let url = req.url(&config)?;
        assert_eq!(
            url.as_str(),
            "https://management.azure.com/subscriptions/00000000-0000-0000-0000-000000000000\
             /resourceGroups/rg%201/providers/Microsoft.EventHub/namespaces/ns1?api-version=2017-04-01"
        );

        Ok(())
    }

    #[test]
    fn escapes_segments() -> anyhow::Result<()> {
        let config = test_config();
        let req = OperationRequest {
            op: consumer_groups::V2017_04_01.get("get").unwrap(),
            api_version: "2017-04-01",
            params: &[
                ("resourceGroupName", "rg"),
                ("namespaceName", "ns1"),
                ("eventHubName", "hub/../x"),
                ("consumerGroupName", "$Default"),
            ],
            body: None,
        };

        let url = req.url(&config)?;
        assert!(url.path().ends_with("/eventhubs/hub%2F..%2Fx/consumergroups/%24Default"));

        Ok(())
    }

    #[test]
    fn missing_parameter() {
        let config = test_config();
        let req = OperationRequest {
            op: namespaces::V2017_04_01.get("get").unwrap(),
            api_version: "2017-04-01",
            params: &[("resourceGroupName", "rg"), ("namespaceName", "")],
            body: None,
        };

        assert_matches!(
            req.url(&config),
            Err(RequestError::MissingParameter(name)) if name == "namespaceName"
        );
    }

    #[test]
    fn extra_params_in_query() -> anyhow::Result<()> {
        let config = test_config();
        let req = OperationRequest {
            op: consumer_groups::V2015_08_01.get("list_all").unwrap(),
            api_version: "2015-08-01",
            params: &[
                ("resourceGroupName", "rg"),
                ("namespaceName", "ns1"),
                ("eventHubName", "hub"),
                ("$top", "10"),
            ],
            body: None,
        };

        let url = req.url(&config)?;
        assert_eq!(url.query(), Some("%24top=10&api-version=2015-08-01"));

        Ok(())
    }

    #[test]
    fn request_headers() -> anyhow::Result<()> {
        let config = test_config();
        let req = OperationRequest {
            op: namespaces::V2017_04_01.get("check_name_availability").unwrap(),
            api_version: "2017-04-01",
            params: &[],
            body: Some(r#"{"name":"ns1"}"#.to_owned()),
        };

        let req = req.into_request(&config)?;
        assert_eq!(req.method(), http::Method::POST);
        assert_eq!(req.headers()[http::header::AUTHORIZATION], "Bearer test-token");
        assert_eq!(req.headers()[http::header::CONTENT_TYPE], "application/json");
        assert_eq!(req.headers()[http::header::CONTENT_LENGTH], "14");
        assert!(req.headers().contains_key(CLIENT_REQUEST_ID));
        assert_eq!(req.body(), r#"{"name":"ns1"}"#);

        Ok(())
    }

    #[test]
    fn next_page_origin() -> anyhow::Result<()> {
        let config = test_config();

        let link = "https://management.azure.com/subscriptions/s/providers/Microsoft.EventHub/namespaces?api-version=2017-04-01&$skiptoken=abc";
        let url = NextPage { link }.url(&config)?;
        assert_eq!(url.as_str(), link);

        assert_matches!(
            NextPage { link: "https://attacker.example.com/steal" }.url(&config),
            Err(RequestError::ForeignNextLink(_))
        );

        Ok(())
    }

    #[test]
    fn response_status() -> anyhow::Result<()> {
        let de = Deserializer::new(&v2015_08_01::MODELS);

        let ok = http::Response::new(br#"{"location": "westus"}"#.to_vec());
        let ns = v2015_08_01::NamespaceResource::from_response(ok, &de)?;
        assert_eq!(ns.location, "westus");

        let mut not_found =
            http::Response::new(br#"{"error": {"code": "ResourceNotFound"}}"#.to_vec());
        *not_found.status_mut() = http::StatusCode::NOT_FOUND;
        let err = v2015_08_01::NamespaceResource::from_response(not_found, &de).unwrap_err();
        assert_eq!(err.api_kind(), Some(&ApiErrorKind::ResourceNotFound));

        let no_content = http::Response::new(Vec::new());
        <()>::from_response(no_content, &de)?;

        Ok(())
    }

    #[test]
    fn response_check() {
        let de = Deserializer::new(&v2015_08_01::MODELS);
        assert!(<v2015_08_01::NamespaceResource as ApiResponse>::check(&de).is_ok());
        assert!(<v2017_04_01::EhNamespace as ApiResponse>::check(&de).is_err());
        assert!(<() as ApiResponse>::check(&de).is_ok());
    }
}
