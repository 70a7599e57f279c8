use crate::components::leaderboard::LeaderboardTable;
use crate::components::settings_dialog::SettingsDialog;
use crate::components::share_panel::SharePanel;
use crate::storage::WebStore;
use kkomantle_game::{CompanionConfig, Leaderboard, SettingName, Settings, SettingsStore};
use yew::prelude::*;

fn persist_setting(settings: &UseStateHandle<Settings>, name: SettingName, value: bool) {
    if name == SettingName::DarkMode {
        crate::theme::set_dark_mode(value);
    } else if let Err(err) = SettingsStore::new(WebStore).set(name, value) {
        log::warn!("{name} not saved: {err}");
    }
    let mut next = **settings;
    next.set(name, value);
    settings.set(next);
}

/// Leaderboard state, filled once the day list arrives.
#[hook]
fn use_day_directory(path: String) -> UseStateHandle<Leaderboard> {
    let board = use_state(Leaderboard::default);
    {
        let board = board.clone();
        use_effect_with(path, move |path| {
            #[cfg(target_arch = "wasm32")]
            {
                let path = path.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let directory = crate::directory::fetch_days(&path).await;
                    board.set(Leaderboard::new(directory));
                });
            }
            #[cfg(not(target_arch = "wasm32"))]
            let _ = (board, path);
        });
    }
    board
}

/// Page shell: header, day table, share panel and the settings dialog.
#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |()| crate::config::load_config());
    let board = use_day_directory(config.days_path.clone());
    let settings = use_state(crate::theme::initial_settings);
    let show_settings = use_state(|| false);
    let puzzle_number = config.calendar().current_puzzle_number(&chrono::Utc::now());

    let on_toggle_sort = {
        let board = board.clone();
        Callback::from(move |()| {
            let mut next = (*board).clone();
            next.toggle_sort();
            board.set(next);
        })
    };
    let on_open_settings = {
        let show = show_settings.clone();
        Callback::from(move |_: MouseEvent| show.set(true))
    };
    let on_close_settings = {
        let show = show_settings.clone();
        Callback::from(move |()| show.set(false))
    };
    let on_toggle_setting = {
        let settings = settings.clone();
        Callback::from(move |(name, value)| persist_setting(&settings, name, value))
    };

    html! {
        <>
            <header class="page-header">
                <h1>{"꼬맨틀"}</h1>
                <button id="settings-button" type="button" aria-haspopup="dialog" onclick={on_open_settings}>{"설정"}</button>
            </header>
            <main id="main">
                <SharePanel config={CompanionConfig::clone(&config)} {puzzle_number} />
                <LeaderboardTable board={(*board).clone()} {on_toggle_sort} />
            </main>
            <SettingsDialog
                open={*show_settings}
                settings={*settings}
                on_close={on_close_settings}
                on_toggle={on_toggle_setting}
            />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn app_renders_shell_without_browser() {
        let html = block_on(LocalServerRenderer::<App>::new().render());
        assert!(html.contains("settings-button"));
        assert!(html.contains("chronoOrder"));
        assert!(html.contains("share-button"));
        assert!(!html.contains("settings-title"));
    }
}
