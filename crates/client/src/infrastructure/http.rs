//! HTTP adapter implementing the outbound ports with reqwest.
//!
//! Holds the bearer token from the last successful sign-in or verification
//! and attaches it to every dashboard call. The application layer only ever
//! sees `ApiError`; status codes stop here.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::application::dto::{
    AnalyticsSummary, BrandSettingsData, ProductData, ProductDraft, Session, SignUpData,
};
use crate::ports::outbound::{ApiError, AuthPort, CatalogPort};

/// Fallback when `MARQUE_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080/api";

/// Reqwest-backed implementation of [`AuthPort`] and [`CatalogPort`].
pub struct ApiAdapter {
    base_url: String,
    client: reqwest::Client,
    token: RwLock<Option<String>>,
}

#[derive(Serialize)]
struct SignInBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct VerifyBody<'a> {
    identifier: &'a str,
    code: &'a str,
}

#[derive(Serialize)]
struct IdentifierBody<'a> {
    identifier: &'a str,
}

#[derive(Serialize)]
struct EmailBody<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct ResetConfirmBody<'a> {
    email: &'a str,
    code: &'a str,
    new_password: &'a str,
}

impl ApiAdapter {
    /// Create an adapter for the given API base URL (no trailing slash).
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
            token: RwLock::new(None),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.token.read().await.as_deref() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn remember_session(&self, session: &Session) {
        *self.token.write().await = Some(session.token.clone());
    }

    async fn send(&self, req: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = self
            .authorize(req)
            .await
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        Err(map_status(status))
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Protocol(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.client.get(self.url(path))).await?;
        Self::decode(response).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send(self.client.post(self.url(path)).json(body)).await?;
        Self::decode(response).await
    }

    async fn post_empty<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.send(self.client.post(self.url(path)).json(body)).await?;
        Ok(())
    }

    async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send(self.client.put(self.url(path)).json(body)).await?;
        Self::decode(response).await
    }
}

fn map_status(status: StatusCode) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::InvalidCredentials,
        StatusCode::NOT_FOUND => ApiError::NotFound,
        StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited,
        s => ApiError::Protocol(format!("unexpected status {s}")),
    }
}

#[async_trait::async_trait]
impl AuthPort for ApiAdapter {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let session: Session = self
            .post_json("/auth/signin", &SignInBody { email, password })
            .await?;
        self.remember_session(&session).await;
        Ok(session)
    }

    async fn sign_up(&self, data: &SignUpData) -> Result<(), ApiError> {
        self.post_empty("/auth/signup", data).await
    }

    async fn verify(&self, identifier: &str, code: &str) -> Result<Session, ApiError> {
        let result: Result<Session, ApiError> = self
            .post_json("/auth/verify", &VerifyBody { identifier, code })
            .await;
        match result {
            Ok(session) => {
                self.remember_session(&session).await;
                Ok(session)
            }
            // A verify rejection is about the code, not the credentials.
            Err(ApiError::InvalidCredentials) => Err(ApiError::CodeRejected),
            Err(e) => Err(e),
        }
    }

    async fn resend(&self, identifier: &str) -> Result<(), ApiError> {
        self.post_empty("/auth/resend", &IdentifierBody { identifier })
            .await
    }

    async fn request_password_reset(&self, email: &str) -> Result<(), ApiError> {
        self.post_empty("/auth/reset-request", &EmailBody { email })
            .await
    }

    async fn complete_password_reset(
        &self,
        email: &str,
        code: &str,
        new_password: &str,
    ) -> Result<(), ApiError> {
        let result = self
            .post_empty(
                "/auth/reset-confirm",
                &ResetConfirmBody {
                    email,
                    code,
                    new_password,
                },
            )
            .await;
        match result {
            // As with verify, a rejection here is about the code.
            Err(ApiError::InvalidCredentials) => Err(ApiError::CodeRejected),
            other => other,
        }
    }
}

#[async_trait::async_trait]
impl CatalogPort for ApiAdapter {
    async fn list_products(&self) -> Result<Vec<ProductData>, ApiError> {
        self.get_json("/products").await
    }

    async fn create_product(&self, draft: &ProductDraft) -> Result<ProductData, ApiError> {
        self.post_json("/products", draft).await
    }

    async fn update_product(&self, product: &ProductData) -> Result<ProductData, ApiError> {
        self.put_json(&format!("/products/{}", product.id), product)
            .await
    }

    async fn delete_product(&self, product_id: Uuid) -> Result<(), ApiError> {
        self.send(self.client.delete(self.url(&format!("/products/{product_id}"))))
            .await?;
        Ok(())
    }

    async fn brand_settings(&self) -> Result<BrandSettingsData, ApiError> {
        self.get_json("/brand").await
    }

    async fn update_brand_settings(
        &self,
        settings: &BrandSettingsData,
    ) -> Result<BrandSettingsData, ApiError> {
        self.put_json("/brand", settings).await
    }

    async fn analytics_summary(&self, days: u32) -> Result<AnalyticsSummary, ApiError> {
        self.get_json(&format!("/analytics/summary?days={days}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_normalized() {
        let adapter = ApiAdapter::new("http://localhost:8080/api/");
        assert_eq!(adapter.url("/products"), "http://localhost:8080/api/products");
    }

    #[test]
    fn unknown_statuses_map_to_protocol_errors() {
        assert!(matches!(
            map_status(StatusCode::BAD_GATEWAY),
            ApiError::Protocol(_)
        ));
        assert_eq!(map_status(StatusCode::NOT_FOUND), ApiError::NotFound);
        assert_eq!(
            map_status(StatusCode::TOO_MANY_REQUESTS),
            ApiError::RateLimited
        );
    }
}
