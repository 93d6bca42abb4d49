//! Firebase ID token verification
//!
//! Tokens are RS256 JWTs signed by keys Google publishes as a JWK set. The
//! set is cached and refetched once it is stale or a token names a key id
//! the cache does not know.

use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header, jwk::JwkSet};
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use crate::{
    config::IdentityConfig,
    constants::{FIREBASE_ISSUER_PREFIX, FIREBASE_JWKS_URL, JWKS_CACHE_TTL_SECS},
    error::{AppError, AppResult},
};

use super::{IdentityVerifier, Principal};

/// Minimum age of the cached key set before an unknown key id forces a refetch
const MIN_REFRESH_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Deserialize)]
struct FirebaseClaims {
    sub: String,
    #[serde(default)]
    email: Option<String>,
}

struct CachedKeys {
    keys: HashMap<String, DecodingKey>,
    fetched_at: Instant,
}

impl CachedKeys {
    fn from_set(set: &JwkSet) -> AppResult<Self> {
        let mut keys = HashMap::new();
        for jwk in &set.keys {
            let Some(kid) = jwk.common.key_id.clone() else {
                continue;
            };
            match DecodingKey::from_jwk(jwk) {
                Ok(key) => {
                    keys.insert(kid, key);
                }
                Err(e) => warn!(%kid, error = %e, "Skipping unusable signing key"),
            }
        }

        if keys.is_empty() {
            return Err(AppError::UpstreamIdentity(
                "identity provider published no usable signing keys".to_string(),
            ));
        }

        Ok(Self {
            keys,
            fetched_at: Instant::now(),
        })
    }

    fn age(&self) -> Duration {
        self.fetched_at.elapsed()
    }
}

/// Verifies Firebase Authentication ID tokens
pub struct FirebaseVerifier {
    client: Client,
    project_id: String,
    jwks_url: String,
    cache: RwLock<Option<CachedKeys>>,
}

impl FirebaseVerifier {
    pub fn new(config: &IdentityConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("identity HTTP client: {}", e)))?;

        Ok(Self {
            client,
            project_id: config.service_account.project_id.clone(),
            jwks_url: FIREBASE_JWKS_URL.to_string(),
            cache: RwLock::new(None),
        })
    }

    fn issuer(&self) -> String {
        format!("{}{}", FIREBASE_ISSUER_PREFIX, self.project_id)
    }

    async fn fetch_keys(&self) -> AppResult<CachedKeys> {
        debug!(url = %self.jwks_url, "Fetching identity signing keys");

        let set = self
            .client
            .get(&self.jwks_url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| AppError::UpstreamIdentity(e.to_string()))?
            .json::<JwkSet>()
            .await
            .map_err(|e| AppError::UpstreamIdentity(format!("malformed key set: {}", e)))?;

        CachedKeys::from_set(&set)
    }

    /// Look up the decoding key for `kid`, refreshing the cache when needed
    async fn key_for(&self, kid: &str) -> AppResult<DecodingKey> {
        let ttl = Duration::from_secs(JWKS_CACHE_TTL_SECS);

        {
            let cache = self.cache.read().await;
            if let Some(cached) = cache.as_ref() {
                if let Some(key) = cached.keys.get(kid).filter(|_| cached.age() < ttl) {
                    return Ok(key.clone());
                }
                if cached.age() < MIN_REFRESH_INTERVAL {
                    return Err(AppError::InvalidToken("unknown signing key".to_string()));
                }
            }
        }

        let mut cache = self.cache.write().await;
        // Another request may have refreshed while we waited for the lock
        let fresh = cache
            .as_ref()
            .is_some_and(|cached| cached.age() < MIN_REFRESH_INTERVAL);
        if !fresh {
            *cache = Some(self.fetch_keys().await?);
        }

        cache
            .as_ref()
            .and_then(|cached| cached.keys.get(kid).cloned())
            .ok_or_else(|| AppError::InvalidToken("unknown signing key".to_string()))
    }
}

#[async_trait]
impl IdentityVerifier for FirebaseVerifier {
    #[instrument(skip_all)]
    async fn verify(&self, token: &str) -> AppResult<Principal> {
        let header = decode_header(token)?;
        if header.alg != Algorithm::RS256 {
            return Err(AppError::InvalidToken(format!(
                "unexpected algorithm {:?}",
                header.alg
            )));
        }
        let kid = header
            .kid
            .ok_or_else(|| AppError::InvalidToken("missing key id".to_string()))?;

        let key = self.key_for(&kid).await?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[&self.project_id]);
        validation.set_issuer(&[self.issuer()]);
        validation.set_required_spec_claims(&["exp", "iat", "aud", "iss", "sub"]);

        let claims = decode::<FirebaseClaims>(token, &key, &validation)?.claims;

        if claims.sub.is_empty() {
            return Err(AppError::InvalidToken("empty subject".to_string()));
        }
        let email = claims
            .email
            .filter(|e| !e.is_empty())
            .ok_or_else(|| AppError::InvalidToken("token carries no email".to_string()))?;

        Ok(Principal {
            uid: claims.sub,
            email,
        })
    }
}

#[cfg(test)]
mod tests {
    use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde_json::json;

    use super::*;
    use crate::config::ServiceAccount;

    const PROJECT_ID: &str = "prochallenger-test";
    const SIGNING_KEY: &str = include_str!("testdata/signing_key.pem");
    const KEY_SET: &str = include_str!("testdata/jwks.json");

    fn verifier() -> FirebaseVerifier {
        let verifier = FirebaseVerifier::new(&IdentityConfig {
            service_account: ServiceAccount {
                project_id: PROJECT_ID.into(),
                client_email: None,
            },
            timeout_secs: 1,
        })
        .unwrap();

        let set: JwkSet = serde_json::from_str(KEY_SET).unwrap();
        *verifier.cache.try_write().unwrap() = Some(CachedKeys::from_set(&set).unwrap());
        verifier
    }

    fn sign(kid: &str, claims: serde_json::Value) -> String {
        let mut header = Header::new(Algorithm::RS256);
        header.kid = Some(kid.to_string());
        let key = EncodingKey::from_rsa_pem(SIGNING_KEY.as_bytes()).unwrap();
        encode(&header, &claims, &key).unwrap()
    }

    fn claims(email: Option<&str>, exp_offset: i64) -> serde_json::Value {
        let now = Utc::now().timestamp();
        let mut claims = json!({
            "iss": format!("{}{}", FIREBASE_ISSUER_PREFIX, PROJECT_ID),
            "aud": PROJECT_ID,
            "sub": "uid-123",
            "iat": now - 10,
            "exp": now + exp_offset,
        });
        if let Some(email) = email {
            claims["email"] = json!(email);
        }
        claims
    }

    #[tokio::test]
    async fn test_valid_token() {
        let token = sign("test-key-1", claims(Some("player@example.com"), 3600));
        let principal = verifier().verify(&token).await.unwrap();

        assert_eq!(principal.uid, "uid-123");
        assert_eq!(principal.email, "player@example.com");
    }

    #[tokio::test]
    async fn test_expired_token() {
        let token = sign("test-key-1", claims(Some("player@example.com"), -3600));
        let err = verifier().verify(&token).await.unwrap_err();
        assert!(matches!(err, AppError::TokenExpired));
    }

    #[tokio::test]
    async fn test_wrong_audience() {
        let mut body = claims(Some("player@example.com"), 3600);
        body["aud"] = json!("someone-else");
        let token = sign("test-key-1", body);

        let err = verifier().verify(&token).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidToken(_)));
    }

    #[tokio::test]
    async fn test_token_without_email() {
        let token = sign("test-key-1", claims(None, 3600));
        let err = verifier().verify(&token).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidToken(reason) if reason.contains("email")));
    }

    #[tokio::test]
    async fn test_unknown_key_id() {
        let token = sign("rotated-away", claims(Some("player@example.com"), 3600));
        let err = verifier().verify(&token).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidToken(reason) if reason == "unknown signing key"));
    }

    #[tokio::test]
    async fn test_rejects_symmetric_tokens() {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT","kid":"test-key-1"}"#);
        let payload = URL_SAFE_NO_PAD.encode(claims(Some("x@example.com"), 3600).to_string());
        let token = format!("{}.{}.c2lnbmF0dXJl", header, payload);

        let err = verifier().verify(&token).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidToken(_)));
    }

    #[tokio::test]
    async fn test_garbage_token() {
        let err = verifier().verify("not-a-jwt").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidToken(_)));
    }
}
