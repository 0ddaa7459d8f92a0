//! HTTP API client
//!
//! Functions for communicating with the EcoNeighbor REST API. Every intent
//! function returns the refreshed panel snapshot from the server.

use gloo_net::http::Request;

use crate::state::global::{AirSnapshot, ClaimResponse, ResourcesSnapshot, WasteSnapshot};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8090/api/v1";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("econeighbor_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Error handling ============

#[derive(Debug, serde::Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    message: String,
}

/// Extract the server's error message, falling back to a generic one
async fn error_message(response: gloo_net::http::Response) -> String {
    response
        .json::<ErrorResponse>()
        .await
        .map(|e| e.error.message)
        .unwrap_or_else(|_| "Unknown error".to_string())
}

// ============ Shell ============

/// Tell the server which tab is visible
pub async fn set_active_tab(tab: &str) -> Result<(), String> {
    #[derive(serde::Serialize)]
    struct SetTabRequest<'a> {
        tab: &'a str,
    }

    let response = Request::put(&format!("{}/session/tab", get_api_base()))
        .json(&SetTabRequest { tab })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }
    Ok(())
}

// ============ Air quality ============

/// Fetch the air quality panel
pub async fn fetch_air() -> Result<AirSnapshot, String> {
    let response = Request::get(&format!("{}/air", get_api_base()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }
    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// Select a neighborhood on the map
pub async fn select_neighborhood(id: u32) -> Result<AirSnapshot, String> {
    #[derive(serde::Serialize)]
    struct SelectRequest {
        id: u32,
    }

    let response = Request::put(&format!("{}/air/selection", get_api_base()))
        .json(&SelectRequest { id })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }
    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

// ============ Resources ============

/// Fetch the resource savings panel
pub async fn fetch_resources() -> Result<ResourcesSnapshot, String> {
    let response = Request::get(&format!("{}/resources", get_api_base()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }
    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// Flip a habit's completion flag
pub async fn toggle_habit(id: u32) -> Result<ResourcesSnapshot, String> {
    let response = Request::post(&format!("{}/resources/habits/{}/toggle", get_api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }
    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

// ============ Waste guide ============

/// Fetch the waste guide panel under the active filters
pub async fn fetch_waste() -> Result<WasteSnapshot, String> {
    let response = Request::get(&format!("{}/waste", get_api_base()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }
    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// Replace the catalog search query
pub async fn set_search(query: &str) -> Result<WasteSnapshot, String> {
    #[derive(serde::Serialize)]
    struct SearchRequest<'a> {
        query: &'a str,
    }

    let response = Request::put(&format!("{}/waste/search", get_api_base()))
        .json(&SearchRequest { query })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }
    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// Set or clear the category filter
pub async fn set_filter(category: Option<&str>) -> Result<WasteSnapshot, String> {
    #[derive(serde::Serialize)]
    struct FilterRequest<'a> {
        category: Option<&'a str>,
    }

    let response = Request::put(&format!("{}/waste/filter", get_api_base()))
        .json(&FilterRequest { category })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }
    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// Open an item's detail view (+2 points)
pub async fn inspect_item(id: u32) -> Result<WasteSnapshot, String> {
    let response = Request::post(&format!("{}/waste/items/{}/inspect", get_api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }
    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// Close the item detail view
pub async fn clear_selection() -> Result<WasteSnapshot, String> {
    let response = Request::delete(&format!("{}/waste/selection", get_api_base()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }
    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// Attempt a reward claim
pub async fn claim_reward(id: u32) -> Result<ClaimResponse, String> {
    let response = Request::post(&format!("{}/waste/rewards/{}/claim", get_api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }
    response.json().await.map_err(|e| format!("Parse error: {}", e))
}
