use crate::core::outcome::{Flash, FlashKind};
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use axum::http::HeaderValue;
use std::convert::Infallible;
use url::form_urlencoded;

pub const FLASH_COOKIE: &str = "petclinic_flash";

/// Flash message left by the previous redirect, read from the request cookie.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingFlash(pub Option<Flash>);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for PendingFlash {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let flash = parts
            .headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == FLASH_COOKIE)
            .and_then(|(_, value)| decode(value));
        Ok(PendingFlash(flash))
    }
}

pub fn encode(flash: &Flash) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair(flash.kind.as_str(), &flash.text)
        .finish()
}

pub fn decode(value: &str) -> Option<Flash> {
    form_urlencoded::parse(value.as_bytes()).find_map(|(key, text)| {
        FlashKind::from_key(&key).map(|kind| Flash {
            kind,
            text: text.into_owned(),
        })
    })
}

pub fn set_cookie(flash: &Flash) -> Option<HeaderValue> {
    let cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax",
        FLASH_COOKIE,
        encode(flash)
    );
    match HeaderValue::from_str(&cookie) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Dropping flash message that cannot be sent as a cookie: {}", e);
            None
        }
    }
}

pub fn clear_cookie() -> HeaderValue {
    HeaderValue::from_static("petclinic_flash=; Path=/; Max-Age=0")
}
