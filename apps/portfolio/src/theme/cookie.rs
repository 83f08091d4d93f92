use anyhow::{Context, Result};
use axum::http::{header, HeaderMap, HeaderValue};

use crate::theme::{PreferenceStore, Theme, THEME_KEY};

/// Theme preference carried in a `theme` cookie.
///
/// Reads come from the request's `Cookie` headers; a write is held until the
/// handler turns it into a `Set-Cookie` header with [`Self::set_cookie`].
#[derive(Debug, Clone)]
pub struct CookiePreferenceStore {
    stored: Option<Theme>,
    pending: Option<Theme>,
    max_age_secs: u64,
}

impl CookiePreferenceStore {
    pub fn from_headers(headers: &HeaderMap, max_age_secs: u64) -> Self {
        Self {
            stored: read_cookie(headers, THEME_KEY).and_then(|v| Theme::parse(&v)),
            pending: None,
            max_age_secs,
        }
    }

    /// `Set-Cookie` value for the last write, if there was one.
    pub fn set_cookie(&self) -> Result<Option<HeaderValue>> {
        let Some(theme) = self.pending else {
            return Ok(None);
        };
        let cookie = format!(
            "{THEME_KEY}={}; Path=/; Max-Age={}; SameSite=Lax",
            theme.as_str(),
            self.max_age_secs
        );
        HeaderValue::from_str(&cookie)
            .map(Some)
            .context("Failed to build theme cookie header")
    }
}

impl PreferenceStore for CookiePreferenceStore {
    fn read(&self) -> Option<Theme> {
        self.pending.or(self.stored)
    }

    fn write(&mut self, theme: Theme) {
        self.pending = Some(theme);
    }
}

/// First value of cookie `name` across all `Cookie` headers.
fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim().trim_matches('"').to_string())
}
