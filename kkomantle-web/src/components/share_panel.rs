use kkomantle_game::CompanionConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub config: CompanionConfig,
    pub puzzle_number: u32,
    /// Notice shown before any copy attempt, mostly for tests.
    #[prop_or_default]
    pub initial_notice: Option<AttrValue>,
}

/// Share button that copies the result text and announces the outcome.
#[function_component(SharePanel)]
pub fn share_panel(p: &Props) -> Html {
    let notice = use_state(|| p.initial_notice.clone());

    let on_share = {
        let notice = notice.clone();
        let config = p.config.clone();
        let puzzle_number = p.puzzle_number;
        Callback::from(move |_: MouseEvent| {
            let text = crate::share::share_text(&config, puzzle_number);
            log::debug!("sharing puzzle {puzzle_number}");
            let notice = notice.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let message = crate::share::copy_share_text(&text).await;
                notice.set(Some(AttrValue::from(message)));
            });
        })
    };

    html! {
        <div class="share-panel">
            <button id="share-button" type="button" onclick={on_share}>{"결과 공유하기"}</button>
            <div id="share-status" class="share-status" role="status" aria-live="polite" aria-atomic="true">
                { for (*notice).clone() }
            </div>
        </div>
    }
}
