//! HTTP client for end-to-end tests
//!
//! Wraps reqwest and provides one method per singles-server endpoint.
//! When API routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use serde_json::Value;
use singles_catalog_server::catalog::example_single_fields;
use std::time::Duration;

/// The example single as a request body.
pub fn example_single_json() -> Value {
    serde_json::to_value(example_single_fields()).expect("Example single should serialize")
}

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ========================================================================
    // Server Endpoints
    // ========================================================================

    /// GET / - Server stats, or the frontend index page
    pub async fn get_home(&self) -> Response {
        self.client
            .get(self.url("/"))
            .send()
            .await
            .expect("Home request failed")
    }

    /// GET /static/{path} - Frontend files
    pub async fn get_static(&self, path: &str) -> Response {
        self.client
            .get(self.url(&format!("/static/{}", path)))
            .send()
            .await
            .expect("Static file request failed")
    }

    // ========================================================================
    // Singles Endpoints
    // ========================================================================

    /// POST /singles/
    pub async fn create_single(&self, body: &Value) -> Response {
        self.client
            .post(self.url("/singles/"))
            .json(body)
            .send()
            .await
            .expect("Create single request failed")
    }

    /// POST /singles/ with a raw, possibly malformed, JSON body
    pub async fn create_single_raw(&self, body: &str) -> Response {
        self.client
            .post(self.url("/singles/"))
            .header("content-type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .expect("Create single request failed")
    }

    /// GET /singles/
    pub async fn list_singles(&self) -> Response {
        self.client
            .get(self.url("/singles/"))
            .send()
            .await
            .expect("List singles request failed")
    }

    /// GET /singles/{isrc}
    pub async fn get_single(&self, isrc: &str) -> Response {
        self.client
            .get(self.url(&format!("/singles/{}", isrc)))
            .send()
            .await
            .expect("Get single request failed")
    }

    /// PUT /singles/{isrc}
    pub async fn update_single(&self, isrc: &str, body: &Value) -> Response {
        self.client
            .put(self.url(&format!("/singles/{}", isrc)))
            .json(body)
            .send()
            .await
            .expect("Update single request failed")
    }

    /// DELETE /singles/{isrc}
    pub async fn delete_single(&self, isrc: &str) -> Response {
        self.client
            .delete(self.url(&format!("/singles/{}", isrc)))
            .send()
            .await
            .expect("Delete single request failed")
    }
}
