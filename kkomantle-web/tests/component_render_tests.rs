use futures::executor::block_on;
use kkomantle_game::{CompanionConfig, DayDirectory, Leaderboard, SettingName, Settings};
use kkomantle_web::app::App;
use kkomantle_web::components::leaderboard::LeaderboardTable;
use kkomantle_web::components::settings_dialog::SettingsDialog;
use kkomantle_web::components::share_panel::SharePanel;
use yew::{Callback, LocalServerRenderer};

#[test]
fn leaderboard_renders_server_payload() {
    let directory = DayDirectory::from_json(
        r#"[{"day": 1, "leader": {"nickname": "첫날"}}, {"day": 2, "leader": "없음"}]"#,
    );
    let props = kkomantle_web::components::leaderboard::Props {
        board: Leaderboard::new(directory),
        on_toggle_sort: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<LeaderboardTable>::with_props(props).render());
    assert!(html.contains("첫날"));
    assert!(html.contains("2번째 꼬맨틀"));
    assert!(!html.contains("없음"));
}

#[test]
fn settings_dialog_marks_dark_mode_checked() {
    let mut settings = Settings::default();
    settings.set(SettingName::DarkMode, true);
    let props = kkomantle_web::components::settings_dialog::Props {
        open: true,
        settings,
        on_close: Callback::noop(),
        on_toggle: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<SettingsDialog>::with_props(props).render());
    assert!(html.contains("dark-mode"));
    assert!(html.contains("dialog-close"));
}

#[test]
fn share_panel_starts_without_notice() {
    let props = kkomantle_web::components::share_panel::Props {
        config: CompanionConfig::default(),
        puzzle_number: 42,
        initial_notice: None,
    };
    let html = block_on(LocalServerRenderer::<SharePanel>::with_props(props).render());
    assert!(html.contains("결과 공유하기"));
    assert!(!html.contains("클립보드"));
}

#[test]
fn app_renders_empty_leaderboard_before_fetch() {
    let html = block_on(LocalServerRenderer::<App>::new().render());
    assert!(html.contains("회차"));
    assert!(!html.contains("번째 꼬맨틀"));
}
