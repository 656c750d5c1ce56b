use std::str::FromStr as _;

use serde::Deserialize;

use crate::{codec::CodecError, config::CredentialError, dispatch::DispatchError, transport::TransportError};

/// An error response from the management API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The API responded with an error code.
    ErrorResponse {
        /// The HTTP status on the overall response.
        status: http::StatusCode,
        /// The error code from the API.
        kind: ApiErrorKind,
        /// A longer description of the error encountered.
        message: Option<String>,
    },
    /// The API response did not contain a code, but the HTTP status was
    /// not a success.
    Other(http::StatusCode),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::ErrorResponse { kind, message, .. } => {
                write!(f, "{kind}")?;
                if let Some(message) = &message {
                    write!(f, ": {message}")?;
                }
            }
            ApiError::Other(status) => {
                write!(f, "{status}")?;
            }
        }

        Ok(())
    }
}

/// Indicates that the error code was unrecognized.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Invalid error kind: {0}")]
pub struct InvalidErrorKind(String);

macro_rules! api_error_kinds {
    ($($code:literal => $variant:ident),* $(,)?) => {
        /// An error code from the management API.
        #[derive(Debug, Clone, PartialEq, Eq)]
        #[non_exhaustive]
        pub enum ApiErrorKind {
            $(
                #[doc = $code]
                $variant,
            )*
            /// An unknown error code.
            Unknown(String),
        }

        impl std::fmt::Display for ApiErrorKind {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(match self {
                    $(ApiErrorKind::$variant => $code,)*
                    ApiErrorKind::Unknown(kind) => kind,
                })
            }
        }

        impl std::str::FromStr for ApiErrorKind {
            type Err = InvalidErrorKind;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(match s {
                    $($code => ApiErrorKind::$variant,)*
                    _ => return Err(InvalidErrorKind(s.to_string())),
                })
            }
        }
    };
}

api_error_kinds! {
    "AuthenticationFailed" => AuthenticationFailed,
    "AuthorizationFailed" => AuthorizationFailed,
    "BadRequest" => BadRequest,
    "Conflict" => Conflict,
    "ExpiredAuthenticationToken" => ExpiredAuthenticationToken,
    "InvalidApiVersionParameter" => InvalidApiVersionParameter,
    "InvalidAuthenticationToken" => InvalidAuthenticationToken,
    "InvalidRequestContent" => InvalidRequestContent,
    "InvalidResourceLocation" => InvalidResourceLocation,
    "LinkedAuthorizationFailed" => LinkedAuthorizationFailed,
    "MissingApiVersionParameter" => MissingApiVersionParameter,
    "MissingSubscription" => MissingSubscription,
    "NoRegisteredProviderFound" => NoRegisteredProviderFound,
    "NotFound" => NotFound,
    "ParentResourceNotFound" => ParentResourceNotFound,
    "ResourceGroupNotFound" => ResourceGroupNotFound,
    "ResourceNotFound" => ResourceNotFound,
    "SubscriptionNotFound" => SubscriptionNotFound,
    "SubscriptionNotRegistered" => SubscriptionNotRegistered,
    "TooManyRequests" => TooManyRequests,
}

#[derive(Debug, Deserialize)]
struct RawErrorEnvelope {
    error: RawApiError,
}

#[derive(Debug, Deserialize)]
struct RawApiError {
    code: String,
    message: Option<String>,
}

impl ApiError {
    fn from_raw(status: http::StatusCode, raw: RawApiError) -> Self {
        let kind = ApiErrorKind::from_str(&raw.code).unwrap_or(ApiErrorKind::Unknown(raw.code));

        ApiError::ErrorResponse {
            status,
            kind,
            message: raw.message,
        }
    }

    /// Read an error from a non-success response body.
    pub fn from_body(status: http::StatusCode, body: &[u8]) -> Self {
        if body.is_empty() {
            return ApiError::Other(status);
        }

        match serde_json::from_slice::<RawErrorEnvelope>(body) {
            Ok(RawErrorEnvelope { error }) => Self::from_raw(status, error),
            Err(e) => {
                tracing::error!(%status, "Failed to parse error response: {e:#}");
                ApiError::Other(status)
            }
        }
    }

    /// The HTTP status of the response.
    pub fn status(&self) -> http::StatusCode {
        match self {
            ApiError::ErrorResponse { status, .. } | ApiError::Other(status) => *status,
        }
    }

    /// The error code, if the API returned one.
    pub fn kind(&self) -> Option<&ApiErrorKind> {
        match self {
            ApiError::ErrorResponse { kind, .. } => Some(kind),
            ApiError::Other(_) => None,
        }
    }
}

/// An error encountered while building a request.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// A path parameter was not supplied, or was empty.
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),
    /// The resulting URL was invalid.
    #[error("Invalid URL")]
    InvalidUrl(#[from] url::ParseError),
    /// A `nextLink` pointed somewhere other than the configured endpoint.
    #[error("Refusing to follow nextLink to a different origin: {0}")]
    ForeignNextLink(String),
    /// The credential could not supply a token.
    #[error("Failed to acquire a token")]
    Credential(#[from] CredentialError),
    /// The request could not be assembled.
    #[error("Invalid request")]
    Http(#[from] http::Error),
}

/// Any error returned by an operation call.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Version resolution or operation lookup failed.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
    /// The API returned an error response.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// A body could not be encoded or decoded.
    #[error(transparent)]
    Codec(#[from] CodecError),
    /// The request could not be built.
    #[error(transparent)]
    Request(#[from] RequestError),
    /// The transport failed.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The request succeeded but the response had no body to decode, as
    /// with a `202 Accepted` from a long-running operation. Call with
    /// `Option<M>` to accept these responses.
    #[error("The service returned {0} without a response body")]
    NoRepresentation(http::StatusCode),
}

impl Error {
    /// The API error code, if this is an error response from the API.
    pub fn api_kind(&self) -> Option<&ApiErrorKind> {
        match self {
            Error::Api(e) => e.kind(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn arm_envelope() {
        let body = br#"{"error": {"code": "ResourceNotFound", "message": "The Resource 'Microsoft.EventHub/namespaces/ns1' was not found."}}"#;
        let err = ApiError::from_body(http::StatusCode::NOT_FOUND, body);

        assert_eq!(err.kind(), Some(&ApiErrorKind::ResourceNotFound));
        assert_eq!(err.status(), http::StatusCode::NOT_FOUND);
        assert!(err.to_string().starts_with("ResourceNotFound: The Resource"));
    }

    #[test]
    fn unknown_code() {
        let body = br#"{"error": {"code": "NamespaceDisabled"}}"#;
        let err = ApiError::from_body(http::StatusCode::CONFLICT, body);

        assert_matches!(err.kind(), Some(ApiErrorKind::Unknown(code)) if code == "NamespaceDisabled");
        assert_eq!(err.to_string(), "NamespaceDisabled");
    }

    #[test]
    fn no_envelope() {
        let err = ApiError::from_body(http::StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>");
        assert_matches!(err, ApiError::Other(http::StatusCode::BAD_GATEWAY));

        let err = ApiError::from_body(http::StatusCode::UNAUTHORIZED, b"");
        assert_matches!(err, ApiError::Other(http::StatusCode::UNAUTHORIZED));
    }
}
