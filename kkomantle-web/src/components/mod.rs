pub mod leaderboard;
pub mod settings_dialog;
pub mod share_panel;
