use kkomantle_game::{SettingName, Settings};
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

const FOCUSABLE: &str = "button, [href], input, [tabindex]:not([tabindex='-1'])";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub settings: Settings,
    pub on_close: Callback<()>,
    /// Fired with the toggle and its new value; the owner persists it.
    #[prop_or_default]
    pub on_toggle: Callback<(SettingName, bool)>,
}

/// Checkbox id and label for each toggle.
#[must_use]
pub const fn control(name: SettingName) -> (&'static str, &'static str) {
    match name {
        SettingName::DarkMode => ("dark-mode", "다크 모드"),
        SettingName::ShareGuesses => ("share-guesses", "공유할 때 추측 횟수 포함"),
        SettingName::ShareTime => ("share-time", "공유할 때 소요 시간 포함"),
        SettingName::ShareTopGuess => ("share-top-guess", "공유할 때 최대 유사도 포함"),
    }
}

#[function_component(SettingsDialog)]
pub fn settings_dialog(p: &Props) -> Html {
    let ref_node = use_node_ref();

    {
        let node = ref_node.clone();
        let open = p.open;
        use_effect_with((open, node), move |(open, node)| {
            if cfg!(target_arch = "wasm32") && *open {
                let first = node.cast::<web_sys::Element>().and_then(|el| {
                    el.query_selector(FOCUSABLE)
                        .ok()
                        .flatten()
                        .and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok())
                });
                if let Some(first) = first {
                    let _ = first.focus();
                }
            }
        });
    }

    if !p.open {
        return html! {};
    }

    let on_keydown = {
        let on_close = p.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if cfg!(target_arch = "wasm32") && e.key() == "Escape" {
                on_close.emit(());
            }
        })
    };
    let close = {
        let cb = p.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let rows = SettingName::ALL.into_iter().map(|name| {
        let (id, label) = control(name);
        let checked = p.settings.get(name);
        let onclick = {
            let on_toggle = p.on_toggle.clone();
            Callback::from(move |_: MouseEvent| on_toggle.emit((name, !checked)))
        };
        html! {
            <div class="field">
                <input {id} type="checkbox" {checked} {onclick} />
                <label for={id}>{ label }</label>
            </div>
        }
    });

    html! {
      <div class="dialog-underlay" onclick={close.clone()}>
        <div class="dialog" role="dialog" aria-modal="true" aria-labelledby="settings-title"
             ref={ref_node} onkeydown={on_keydown}
             onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
          <h2 id="settings-title">{"설정"}</h2>
          { for rows }
          <div class="controls">
            <button class="dialog-close" onclick={close}>{"닫기"}</button>
          </div>
        </div>
      </div>
    }
}
