//! Loading the per-day leaderboard from the server.

use crate::dom::{self, DomError};
use kkomantle_game::DayDirectory;
#[cfg(target_arch = "wasm32")]
use kkomantle_game::DayEntry;

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error(transparent)]
    Dom(#[from] DomError),
    #[error("server answered {0}")]
    Status(u16),
    #[error("malformed day list: {0}")]
    Decode(String),
}

/// Fetch the day list, mapping any failure to [`DayDirectory::Unavailable`].
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_days(path: &str) -> DayDirectory {
    match try_fetch_days(path).await {
        Ok(directory) => directory,
        Err(err) => {
            log::warn!("day list unavailable from {path}: {err}");
            DayDirectory::Unavailable
        }
    }
}

/// Fetch and decode the day list.
///
/// # Errors
/// Returns an error if the request fails, the status is not 2xx, or the body
/// is not a list of day entries.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn try_fetch_days(path: &str) -> Result<DayDirectory, DirectoryError> {
    let resp = dom::fetch_response(path).await?;
    if !resp.ok() {
        return Err(DirectoryError::Status(resp.status()));
    }
    #[cfg(target_arch = "wasm32")]
    {
        let promise = resp.json().map_err(DomError::from)?;
        let body = wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map_err(DomError::from)?;
        let days: Vec<DayEntry> = serde_wasm_bindgen::from_value(body)
            .map_err(|err| DirectoryError::Decode(err.to_string()))?;
        log::debug!("loaded {} days", days.len());
        Ok(DayDirectory::Loaded(days))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Err(DirectoryError::Decode("no JSON decoder off the web".to_string()))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn fetch_without_browser_is_unavailable() {
        assert_eq!(block_on(fetch_days("/days")), DayDirectory::Unavailable);
        let err = block_on(try_fetch_days("/days")).unwrap_err();
        assert!(matches!(err, DirectoryError::Dom(DomError::Unavailable("window"))));
    }
}
