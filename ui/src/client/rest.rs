//! Inventory REST Client
//!
//! Talks to the backend's JSON API over the browser's fetch. The two
//! collections are plain CRUD plus an atomic adjust endpoint that takes
//! a signed delta; the server is the only place quantities are computed.

use gloo_net::http::{Request, Response};
use serde::{de::DeserializeOwned, Serialize};

use pantry_shared::{
    ApiError, FoodItem, NewFoodItem, NewRawMaterial, QuantityAdjustment, RawMaterial,
};

use super::ClientError;

/// Client for the inventory REST API
#[derive(Debug, Clone)]
pub struct InventoryClient {
    /// API base URL
    base_url: String,
}

impl InventoryClient {
    /// Create a client against the page's own origin
    pub fn new() -> Self {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_else(|| "http://localhost:5000".to_string());
        Self::with_base_url(&origin)
    }

    /// Create a client against an explicit base URL
    pub fn with_base_url(url: &str) -> Self {
        // Normalize URL (remove trailing slash)
        let base_url = url.trim_end_matches('/').to_string();
        Self { base_url }
    }

    fn materials_url(&self) -> String {
        format!("{}/api/raw-materials", self.base_url)
    }

    fn material_url(&self, id: u32) -> String {
        format!("{}/api/raw-materials/{}", self.base_url, id)
    }

    fn material_adjust_url(&self, id: u32) -> String {
        format!("{}/api/raw-materials/{}/adjust", self.base_url, id)
    }

    fn food_items_url(&self) -> String {
        format!("{}/api/food-items", self.base_url)
    }

    fn food_item_url(&self, id: u32) -> String {
        format!("{}/api/food-items/{}", self.base_url, id)
    }

    fn food_item_adjust_url(&self, id: u32) -> String {
        format!("{}/api/food-items/{}/adjust", self.base_url, id)
    }

    // ========================================================================
    // Raw materials
    // ========================================================================

    pub async fn list_materials(&self) -> Result<Vec<RawMaterial>, ClientError> {
        self.get_json(&self.materials_url()).await
    }

    pub async fn create_material(
        &self,
        material: &NewRawMaterial,
    ) -> Result<RawMaterial, ClientError> {
        self.post_json(&self.materials_url(), material).await
    }

    /// Apply a signed delta to a material's quantity
    pub async fn adjust_material(
        &self,
        id: u32,
        adjustment: f64,
    ) -> Result<RawMaterial, ClientError> {
        self.adjust(&self.material_adjust_url(id), adjustment).await
    }

    pub async fn delete_material(&self, id: u32) -> Result<(), ClientError> {
        self.delete(&self.material_url(id)).await
    }

    // ========================================================================
    // Food items
    // ========================================================================

    pub async fn list_food_items(&self) -> Result<Vec<FoodItem>, ClientError> {
        self.get_json(&self.food_items_url()).await
    }

    pub async fn create_food_item(&self, item: &NewFoodItem) -> Result<FoodItem, ClientError> {
        self.post_json(&self.food_items_url(), item).await
    }

    /// Apply a signed (whole-serving) delta to a food item's quantity
    pub async fn adjust_food_item(&self, id: u32, adjustment: i32) -> Result<FoodItem, ClientError> {
        self.adjust(&self.food_item_adjust_url(id), adjustment as f64)
            .await
    }

    pub async fn delete_food_item(&self, id: u32) -> Result<(), ClientError> {
        self.delete(&self.food_item_url(id)).await
    }

    // ========================================================================
    // Request plumbing
    // ========================================================================

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ClientError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| ClientError::ConnectionFailed(e.to_string()))?;

        if !response.ok() {
            return Err(Self::request_failed(&response).await);
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ClientError::ConnectionFailed(e.to_string()))?;

        if !response.ok() {
            return Err(Self::request_failed(&response).await);
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// POST to an adjust endpoint, mapping the backend's quantity
    /// rejection (400) and unknown-id (404) statuses to their own
    /// variants so callers can show the specific message
    async fn adjust<T: DeserializeOwned>(
        &self,
        url: &str,
        adjustment: f64,
    ) -> Result<T, ClientError> {
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .json(&QuantityAdjustment { adjustment })
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ClientError::ConnectionFailed(e.to_string()))?;

        match response.status() {
            400 => Err(ClientError::InsufficientQuantity),
            404 => Err(ClientError::NotFound),
            _ if !response.ok() => Err(Self::request_failed(&response).await),
            _ => response
                .json()
                .await
                .map_err(|e| ClientError::InvalidResponse(e.to_string())),
        }
    }

    async fn delete(&self, url: &str) -> Result<(), ClientError> {
        let response = Request::delete(url)
            .send()
            .await
            .map_err(|e| ClientError::ConnectionFailed(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(Self::request_failed(&response).await)
        }
    }

    /// Build a `RequestFailed`, preferring the backend's error body when
    /// it has one
    async fn request_failed(response: &Response) -> ClientError {
        let message = match response.json::<ApiError>().await {
            Ok(body) => body.error,
            Err(_) => response.status_text(),
        };
        ClientError::RequestFailed {
            status: response.status(),
            message,
        }
    }
}

impl Default for InventoryClient {
    fn default() -> Self {
        Self::new()
    }
}
