//! Auth Gate
//!
//! Decides allow/deny for a request given the configured [`AuthMethod`].
//! Pure function of headers + query string, so it is tested without a server.

use axum::http::{header, HeaderMap};
use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine,
};

use crate::config::AuthMethod;
use crate::models::StacError;

pub const API_KEY_HEADER: &str = "x-api-key";
pub const API_KEY_QUERY_PARAM: &str = "api_key";

/// Standard alphabet, padding optional (clients differ on this)
const BASIC_TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decoded HTTP Basic credentials, kept as raw bytes for byte-exact comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: Vec<u8>,
    pub password: Vec<u8>,
}

/// Allow (`Ok`) or deny with the error to send back
pub fn authorize(
    method: &AuthMethod,
    headers: &HeaderMap,
    query: Option<&str>,
) -> Result<(), StacError> {
    match method {
        AuthMethod::None => Ok(()),
        AuthMethod::Basic { username, password } => match basic_credentials(headers) {
            Some(creds)
                if creds.username == username.as_bytes()
                    && creds.password == password.as_bytes() =>
            {
                Ok(())
            }
            _ => Err(StacError::invalid_credentials()),
        },
        AuthMethod::ApiKey { key } => match presented_api_key(headers, query) {
            Some(presented) if presented == key.as_bytes() => Ok(()),
            _ => Err(StacError::invalid_api_key()),
        },
    }
}

/// Parse `Authorization: Basic <base64(user:pass)>`.
///
/// Scheme is case-insensitive and surrounding spaces are tolerated. The
/// decoded payload splits at the first `:`, so passwords may contain colons.
pub fn basic_credentials(headers: &HeaderMap) -> Option<BasicCredentials> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim_matches(' ').split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = BASIC_TOKEN_ENGINE.decode(token.trim_start_matches(' ')).ok()?;
    let colon = decoded.iter().position(|b| *b == b':')?;
    Some(BasicCredentials {
        username: decoded[..colon].to_vec(),
        password: decoded[colon + 1..].to_vec(),
    })
}

/// API key from the `x-api-key` header, else from the `api_key` query param.
///
/// An empty header falls through to the query. A repeated header or a
/// repeated query param yields no key at all.
pub fn presented_api_key(headers: &HeaderMap, query: Option<&str>) -> Option<Vec<u8>> {
    let mut values = headers.get_all(API_KEY_HEADER).iter();
    match (values.next(), values.next()) {
        (Some(_), Some(_)) => return None,
        (Some(value), None) if !value.is_empty() => return Some(value.as_bytes().to_vec()),
        _ => {}
    }

    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query?).ok()?;
    let mut keys = pairs
        .into_iter()
        .filter(|(name, _)| name == API_KEY_QUERY_PARAM)
        .map(|(_, value)| value);
    match (keys.next(), keys.next()) {
        (Some(key), None) => Some(key.into_bytes()),
        _ => None,
    }
}
