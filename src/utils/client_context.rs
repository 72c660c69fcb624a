//! Request metadata extraction from HTTP headers.

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{HeaderMap, HeaderName, header, request::Parts},
};
use std::convert::Infallible;
use std::net::{IpAddr, SocketAddr};

use crate::domain::submission::RequestContext;

/// Extractor yielding the [`RequestContext`] for the current request.
///
/// Never rejects: missing headers become empty strings.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(ClientContext(ctx): ClientContext) {
///     tracing::info!(ip = %ctx.client_ip, "request");
/// }
/// ```
pub struct ClientContext(pub RequestContext);

impl<S> FromRequestParts<S> for ClientContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip());

        Ok(Self(request_context(&parts.headers, peer)))
    }
}

/// Builds the request context from headers and the peer address.
pub fn request_context(headers: &HeaderMap, peer: Option<IpAddr>) -> RequestContext {
    RequestContext {
        client_ip: client_ip(headers, peer),
        user_agent: header_str(headers, &header::USER_AGENT),
        referer: header_str(headers, &header::REFERER),
    }
}

/// Resolves the client address.
///
/// Priority:
/// 1. First entry of `X-Forwarded-For`
/// 2. `X-Real-IP`
/// 3. Peer socket address
///
/// Returns an empty string when none is available.
pub fn client_ip(headers: &HeaderMap, peer: Option<IpAddr>) -> String {
    let forwarded = header_str(headers, &HeaderName::from_static("x-forwarded-for"));
    if !forwarded.is_empty() {
        return forwarded.split(',').next().unwrap_or("").trim().to_string();
    }

    let real_ip = header_str(headers, &HeaderName::from_static("x-real-ip"));
    if !real_ip.is_empty() {
        return real_ip.trim().to_string();
    }

    peer.map(|ip| ip.to_string()).unwrap_or_default()
}

fn header_str(headers: &HeaderMap, name: &HeaderName) -> String {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}
