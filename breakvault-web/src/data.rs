//! Dataset loading for the calculator pages.
//!
//! The checklist dataset is fetched exactly once per page visit. There is
//! no retry: a failed fetch is logged and the page keeps its loading state.

use breakvault_odds::ChecklistDataset;

/// Path of the dataset artifact the builder writes.
pub const DATASET_ASSET: &str = "static/assets/data/checklist.json";

#[cfg(target_arch = "wasm32")]
pub async fn load_checklist() -> Option<ChecklistDataset> {
    let url = crate::paths::asset_path(DATASET_ASSET);
    let response = match gloo_net::http::Request::get(&url).send().await {
        Ok(response) => response,
        Err(err) => {
            log::error!("checklist dataset fetch failed: {err}");
            return None;
        }
    };
    if !response.ok() {
        log::error!(
            "checklist dataset fetch failed: HTTP {} for {url}",
            response.status()
        );
        return None;
    }
    match response.json::<ChecklistDataset>().await {
        Ok(dataset) => Some(dataset),
        Err(err) => {
            log::error!("checklist dataset is not valid JSON: {err}");
            None
        }
    }
}

/// Server-side renders have no dataset; pages show their loading state.
#[cfg(not(target_arch = "wasm32"))]
pub async fn load_checklist() -> Option<ChecklistDataset> {
    None
}
