use axum::{
    extract::{ConnectInfo, FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::TypedHeader;
use headers::UserAgent;
use noticeboard_common::fingerprint::{ClientMetadata, Fingerprint, FingerprintProvider};
use std::{convert::Infallible, net::SocketAddr, sync::Arc};

/// Fingerprint of the caller, derived from its `User-Agent` and peer address.
///
/// Missing metadata falls back to a placeholder instead of rejecting the
/// request.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct ClientFingerprint(pub Fingerprint);

impl<S> FromRequestParts<S> for ClientFingerprint
where
    Arc<dyn FingerprintProvider>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let client = Option::<TypedHeader<UserAgent>>::from_request_parts(parts, state)
            .await
            .ok()
            .flatten()
            .map(|TypedHeader(user_agent)| user_agent.as_str().to_owned());

        let origin = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(address)| address.ip().to_string());

        let metadata = ClientMetadata { client, origin };
        let fingerprint = Arc::<dyn FingerprintProvider>::from_ref(state).fingerprint(&metadata);

        Ok(Self(fingerprint))
    }
}
