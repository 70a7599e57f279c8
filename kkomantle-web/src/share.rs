use crate::dom;
use crate::storage::WebStore;
use kkomantle_game::CompanionConfig;
use kkomantle_game::CompanionEngine;
use kkomantle_game::constants::{NOTICE_COPIED, NOTICE_COPY_FAILED};

/// Share text for the session saved in `localStorage`.
#[must_use]
pub fn share_text(config: &CompanionConfig, puzzle_number: u32) -> String {
    CompanionEngine::new(config.clone(), WebStore).share_text(puzzle_number)
}

/// Copy `text` to the clipboard and return the notice to show the player.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn copy_share_text(text: &str) -> &'static str {
    match dom::write_clipboard(text).await {
        Ok(()) => NOTICE_COPIED,
        Err(err) => {
            dom::console_error(&format!("clipboard write failed: {err}"));
            NOTICE_COPY_FAILED
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn copy_without_clipboard_reports_failure() {
        assert_eq!(block_on(copy_share_text("hi")), NOTICE_COPY_FAILED);
    }

    #[test]
    fn empty_storage_shares_untried_give_up() {
        let text = share_text(&CompanionConfig::default(), 12);
        assert_eq!(
            text,
            "12번째 꼬맨틀을 시도하지 않고 바로 포기했어요.\nhttps://semantle-ko.newsjel.ly/"
        );
    }
}
