//! Bearer token lifecycle: decoding, expiry and single-flight refresh

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Utc};
use futures::future::{BoxFuture, FutureExt, Shared};
use reqwest::header::USER_AGENT;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::core::errors::{AuthFetchError, Result, TranslationError};

/// Tokens this close to expiry are treated as already expired
pub const DEFAULT_REFRESH_MARGIN_MS: i64 = 60_000;

type FetchOutcome = std::result::Result<AuthToken, Arc<AuthFetchError>>;
type PendingFetch = Shared<BoxFuture<'static, FetchOutcome>>;

/// Bearer credential with its expiry instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken {
    /// Raw credential as returned by the auth endpoint
    pub token: String,
    /// Expiry in Unix milliseconds
    pub expires_at_ms: i64,
}

impl AuthToken {
    /// Create a token with a known expiry
    pub fn new(token: impl Into<String>, expires_at_ms: i64) -> Self {
        Self {
            token: token.into(),
            expires_at_ms,
        }
    }

    /// Decode a signed `header.payload.signature` credential, reading the
    /// `exp` claim (Unix seconds) from its payload.
    pub fn from_credential(raw: &str) -> std::result::Result<Self, AuthFetchError> {
        let raw = raw.trim();
        let payload = raw
            .split('.')
            .nth(1)
            .filter(|segment| !segment.is_empty())
            .ok_or_else(|| AuthFetchError::MalformedCredential {
                message: "missing payload segment".to_string(),
            })?;

        // Accept both alphabets, padded or not
        let normalized: String = payload
            .trim_end_matches('=')
            .chars()
            .map(|c| match c {
                '+' => '-',
                '/' => '_',
                c => c,
            })
            .collect();
        let bytes = URL_SAFE_NO_PAD.decode(normalized.as_bytes())?;
        let claims: serde_json::Value = serde_json::from_slice(&bytes)?;

        let exp = claims
            .get("exp")
            .and_then(serde_json::Value::as_f64)
            .ok_or_else(|| AuthFetchError::MalformedCredential {
                message: "missing numeric exp claim".to_string(),
            })?;

        let max_exp = (i64::MAX / 1000) as f64;
        if !exp.is_finite() || !(0.0..=max_exp).contains(&exp) {
            return Err(AuthFetchError::MalformedCredential {
                message: format!("exp claim out of range: {}", exp),
            });
        }

        Ok(Self::new(raw, (exp * 1000.0) as i64))
    }

    /// Expired, or expiring within `margin_ms` of `now_ms`
    pub fn is_expired_at(&self, now_ms: i64, margin_ms: i64) -> bool {
        self.expires_at_ms.saturating_sub(now_ms) < margin_ms
    }

    /// Expiry as a timestamp
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.expires_at_ms)
    }

    /// Value for the `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Fetch a fresh credential from the auth endpoint
pub async fn fetch_token(
    client: reqwest::Client,
    auth_url: String,
    user_agent: String,
) -> std::result::Result<AuthToken, AuthFetchError> {
    let response = client
        .get(&auth_url)
        .header(USER_AGENT, user_agent)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(AuthFetchError::Status {
            status: status.as_u16(),
        });
    }

    let body = response.text().await?;
    let token = AuthToken::from_credential(&body)?;

    match token.expires_at() {
        Some(at) => info!("Fetched auth token, expires at {}", at),
        None => info!("Fetched auth token"),
    }

    Ok(token)
}

#[derive(Default)]
struct TokenState {
    current: Option<AuthToken>,
    pending: Option<PendingFetch>,
}

impl fmt::Debug for TokenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenState")
            .field("current", &self.current.as_ref().map(|t| t.expires_at_ms))
            .field("pending", &self.pending.is_some())
            .finish()
    }
}

/// Token holder shared by every request of a client.
///
/// At most one auth fetch is in flight at a time; callers arriving while it
/// runs await the same fetch. The lock is never held across the fetch itself.
#[derive(Debug)]
pub struct TokenCache {
    state: Mutex<TokenState>,
    margin_ms: i64,
}

impl TokenCache {
    /// Create an empty cache with the default refresh margin
    pub fn new() -> Self {
        Self::with_margin(DEFAULT_REFRESH_MARGIN_MS)
    }

    /// Create an empty cache with a custom refresh margin
    pub fn with_margin(margin_ms: i64) -> Self {
        Self {
            state: Mutex::new(TokenState::default()),
            margin_ms,
        }
    }

    /// Create a cache pre-seeded with a token
    pub fn with_token(token: AuthToken) -> Self {
        Self {
            state: Mutex::new(TokenState {
                current: Some(token),
                pending: None,
            }),
            margin_ms: DEFAULT_REFRESH_MARGIN_MS,
        }
    }

    /// Token currently held, expired or not
    pub async fn current(&self) -> Option<AuthToken> {
        self.state.lock().await.current.clone()
    }

    /// True when no token is held or the held one is within the margin
    pub async fn is_expired(&self) -> bool {
        self.valid_token().await.is_none()
    }

    async fn valid_token(&self) -> Option<AuthToken> {
        let state = self.state.lock().await;
        state
            .current
            .as_ref()
            .filter(|t| !t.is_expired_at(now_ms(), self.margin_ms))
            .cloned()
    }

    /// Return a usable token, fetching one through `start_fetch` if needed.
    ///
    /// `start_fetch` is only invoked when no fetch is already in flight. If
    /// the awaited fetch still leaves the cache expired, one more refresh is
    /// made and its token returned as is.
    pub async fn ensure_fresh<F, Fut>(&self, start_fetch: F) -> Result<AuthToken>
    where
        F: Fn() -> Fut + Send + Sync,
        Fut: Future<Output = std::result::Result<AuthToken, AuthFetchError>> + Send + 'static,
    {
        if let Some(token) = self.valid_token().await {
            return Ok(token);
        }

        self.refresh(&start_fetch).await?;

        if let Some(token) = self.valid_token().await {
            return Ok(token);
        }

        warn!("Auth token still expired after refresh, fetching once more");
        self.refresh(&start_fetch).await
    }

    async fn refresh<F, Fut>(&self, start_fetch: &F) -> Result<AuthToken>
    where
        F: Fn() -> Fut + Send + Sync,
        Fut: Future<Output = std::result::Result<AuthToken, AuthFetchError>> + Send + 'static,
    {
        let pending = {
            let mut state = self.state.lock().await;
            if let Some(pending) = state.pending.clone() {
                debug!("Joining in-flight auth token fetch");
                pending
            } else {
                debug!("Starting auth token fetch");
                let fetch = start_fetch()
                    .map(|outcome| outcome.map_err(Arc::new))
                    .boxed()
                    .shared();
                state.pending = Some(fetch.clone());
                fetch
            }
        };

        let outcome = pending.clone().await;

        let mut state = self.state.lock().await;
        if state.pending.as_ref().is_some_and(|p| p.ptr_eq(&pending)) {
            state.pending = None;
        }

        match outcome {
            Ok(token) => {
                let newer = state
                    .current
                    .as_ref()
                    .map_or(true, |held| held.expires_at_ms <= token.expires_at_ms);
                if newer {
                    state.current = Some(token.clone());
                }
                Ok(token)
            }
            Err(source) => {
                error!("Failed to fetch auth token: {}", source);
                Err(TranslationError::AuthError { source })
            }
        }
    }
}

impl Default for TokenCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;
    use std::error::Error as _;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Build an unsigned credential expiring at `exp` (Unix seconds)
    fn credential(exp: i64) -> String {
        let payload = serde_json::json!({ "region": "global", "exp": exp }).to_string();
        format!("eyJhbGciOiJIUzI1NiJ9.{}.c2ln", URL_SAFE_NO_PAD.encode(payload))
    }

    fn in_an_hour() -> i64 {
        Utc::now().timestamp() + 3600
    }

    #[test]
    fn test_from_credential_reads_exp() {
        let token = AuthToken::from_credential(&format!("{}\n", credential(1_700_000_000))).unwrap();
        assert_eq!(token.expires_at_ms, 1_700_000_000_000);
        assert!(!token.token.ends_with('\n'));
        assert!(token.bearer().starts_with("Bearer eyJ"));
    }

    #[test]
    fn test_from_credential_accepts_padded_standard_alphabet() {
        let payload = STANDARD.encode(r#"{"exp":1700000000}"#);
        let token = AuthToken::from_credential(&format!("h.{}.s", payload)).unwrap();
        assert_eq!(token.expires_at_ms, 1_700_000_000_000);
    }

    #[test]
    fn test_from_credential_rejects_garbage() {
        assert!(matches!(
            AuthToken::from_credential("no-dots-here"),
            Err(AuthFetchError::MalformedCredential { .. })
        ));
        assert!(matches!(
            AuthToken::from_credential("a.!!!.c"),
            Err(AuthFetchError::Encoding(_))
        ));
        let not_json = URL_SAFE_NO_PAD.encode("hello");
        assert!(matches!(
            AuthToken::from_credential(&format!("a.{}.c", not_json)),
            Err(AuthFetchError::Payload(_))
        ));
        let no_exp = URL_SAFE_NO_PAD.encode(r#"{"sub":"x"}"#);
        assert!(matches!(
            AuthToken::from_credential(&format!("a.{}.c", no_exp)),
            Err(AuthFetchError::MalformedCredential { .. })
        ));
    }

    #[test]
    fn test_from_credential_rejects_out_of_range_exp() {
        for claims in [r#"{"exp":-1e300}"#, r#"{"exp":1e300}"#, r#"{"exp":-1}"#] {
            let payload = URL_SAFE_NO_PAD.encode(claims);
            assert!(
                matches!(
                    AuthToken::from_credential(&format!("a.{}.c", payload)),
                    Err(AuthFetchError::MalformedCredential { .. })
                ),
                "{}",
                claims
            );
        }
    }

    #[test]
    fn test_expiry_check_saturates_at_extremes() {
        let now = now_ms();
        assert!(AuthToken::new("t", i64::MIN).is_expired_at(now, DEFAULT_REFRESH_MARGIN_MS));
        assert!(!AuthToken::new("t", i64::MAX).is_expired_at(now, DEFAULT_REFRESH_MARGIN_MS));
    }

    #[test]
    fn test_expiry_margin() {
        let token = AuthToken::new("t", 100_000);
        assert!(!token.is_expired_at(39_999, DEFAULT_REFRESH_MARGIN_MS));
        assert!(token.is_expired_at(40_001, DEFAULT_REFRESH_MARGIN_MS));
        assert!(token.is_expired_at(200_000, DEFAULT_REFRESH_MARGIN_MS));
    }

    #[tokio::test]
    async fn test_empty_cache_is_expired() {
        let cache = TokenCache::new();
        assert!(cache.is_expired().await);
        assert!(cache.current().await.is_none());
    }

    #[tokio::test]
    async fn test_valid_token_skips_fetch() {
        let cache = TokenCache::with_token(AuthToken::new("held", now_ms() + 3_600_000));
        let calls = AtomicUsize::new(0);

        let token = cache
            .ensure_fresh(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(AuthFetchError::Status { status: 500 }) }
            })
            .await
            .unwrap();

        assert_eq!(token.token, "held");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_concurrent_callers_share_one_fetch() {
        let cache = TokenCache::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let fetch = || {
            calls.fetch_add(1, Ordering::SeqCst);
            async {
                tokio::time::sleep(Duration::from_millis(20)).await;
                AuthToken::from_credential(&credential(in_an_hour()))
            }
        };

        let results =
            futures::future::join_all((0..8).map(|_| cache.ensure_fresh(fetch))).await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(results.iter().all(|r| r.is_ok()));
        assert!(!cache.is_expired().await);
    }

    #[tokio::test]
    async fn test_stale_fetch_triggers_exactly_one_more() {
        let cache = TokenCache::new();
        let calls = AtomicUsize::new(0);

        let token = cache
            .ensure_fresh(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok(AuthToken::new("stale", now_ms() - 1_000)) }
            })
            .await
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(token.token, "stale");
        assert!(cache.is_expired().await);
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_cause_and_clears_pending() {
        let cache = TokenCache::new();
        let calls = AtomicUsize::new(0);
        let failing = || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(AuthFetchError::Status { status: 503 }) }
        };

        let err = cache.ensure_fresh(failing).await.unwrap_err();
        assert!(matches!(err, TranslationError::AuthError { .. }));
        assert!(err.source().unwrap().to_string().contains("503"));

        cache.ensure_fresh(failing).await.unwrap_err();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_refresh_replaces_expired_token() {
        let cache = TokenCache::with_token(AuthToken::new("old", now_ms() - 1_000));

        let token = cache
            .ensure_fresh(|| async { AuthToken::from_credential(&credential(in_an_hour())) })
            .await
            .unwrap();

        assert_ne!(token.token, "old");
        assert_eq!(cache.current().await, Some(token));
    }
}
