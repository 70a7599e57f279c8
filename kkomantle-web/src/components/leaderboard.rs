use kkomantle_game::leaderboard::headers;
use kkomantle_game::{DayRow, Leaderboard, SortDirection};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub board: Leaderboard,
    /// Fired when the day header is clicked.
    #[prop_or_default]
    pub on_toggle_sort: Callback<()>,
}

fn row_html(row: &DayRow) -> Html {
    html! {
        <tr key={row.day}>
            <td><a href={row.href.clone()}>{ row.link_text.clone() }</a></td>
            <td>{ row.leader.clone() }</td>
        </tr>
    }
}

/// Day directory table with a sortable day column.
#[function_component(LeaderboardTable)]
pub fn leaderboard_table(p: &Props) -> Html {
    let [day_header, leader_header] = headers();
    let on_sort = {
        let cb = p.on_toggle_sort.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let aria_sort = match p.board.direction() {
        SortDirection::Chronological => "none",
        SortDirection::Reverse => "descending",
    };

    html! {
        <table id="days" class="days" role="table">
            <thead>
                <tr>
                    <th id="chronoOrder" scope="col" aria-sort={aria_sort} onclick={on_sort}>{ day_header }</th>
                    <th scope="col">{ leader_header }</th>
                </tr>
            </thead>
            <tbody>
                { for p.board.rows().iter().map(row_html) }
            </tbody>
        </table>
    }
}
