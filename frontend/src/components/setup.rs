use common::{GameMode, MAX_DISKS, MAX_TIME_LIMIT, MIN_DISKS, MIN_TIME_LIMIT, TIME_LIMIT_STEP};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SetupProps {
    pub mode: GameMode,
    pub disk_count: usize,
    pub time_limit: u32,
    pub set_mode: Callback<GameMode>,
    pub set_disk_count: Callback<usize>,
    pub set_time_limit: Callback<u32>,
    pub start: Callback<()>,
    pub show_leaderboard: Callback<()>,
}

/// Slider value of an input event, if it parses.
fn slider_value<T: std::str::FromStr>(ev: InputEvent) -> Option<T> {
    let input: HtmlInputElement = ev.target_unchecked_into();
    input.value().parse().ok()
}

/// Pick the mode, disk count and time limit before a game.
#[function_component]
pub fn Setup(
    SetupProps {
        mode,
        disk_count,
        time_limit,
        set_mode,
        set_disk_count,
        set_time_limit,
        start,
        show_leaderboard,
    }: &SetupProps,
) -> Html {
    let mode_button = |m: GameMode, label: &'static str| {
        let set_mode = set_mode.clone();
        let class = if *mode == m { "mode selected" } else { "mode" };
        html! {
            <button class={class} onclick={move |_| set_mode.emit(m)}>{label}</button>
        }
    };

    let on_disks = {
        let set_disk_count = set_disk_count.clone();
        move |ev: InputEvent| {
            if let Some(n) = slider_value(ev) {
                set_disk_count.emit(n);
            }
        }
    };
    let on_time = {
        let set_time_limit = set_time_limit.clone();
        move |ev: InputEvent| {
            if let Some(s) = slider_value(ev) {
                set_time_limit.emit(s);
            }
        }
    };
    let start = {
        let start = start.clone();
        move |_| start.emit(())
    };
    let show_leaderboard = {
        let show_leaderboard = show_leaderboard.clone();
        move |_| show_leaderboard.emit(())
    };

    html! {
        <div class="setup">
            <h2>{if *mode == GameMode::Timed {"Timed Mode"} else {"Story Mode"}}</h2>
            <div>
                {mode_button(GameMode::Story, "story")}
                {mode_button(GameMode::Timed, "timed")}
            </div>

            <label>{"Number of disks"}</label>
            <input
                id="disk-count"
                type="range"
                min={MIN_DISKS.to_string()}
                max={MAX_DISKS.to_string()}
                value={disk_count.to_string()}
                oninput={on_disks}
            />
            <p>{format!("{disk_count} disks")}</p>

            if *mode == GameMode::Timed {<>
                <label>{"Time limit (seconds)"}</label>
                <input
                    id="time-limit"
                    type="range"
                    min={MIN_TIME_LIMIT.to_string()}
                    max={MAX_TIME_LIMIT.to_string()}
                    step={TIME_LIMIT_STEP.to_string()}
                    value={time_limit.to_string()}
                    oninput={on_time}
                />
                <p>{format!("{time_limit} seconds")}</p>
            </>}

            <button class="start" onclick={start}>{"start"}</button>
            <button onclick={show_leaderboard}>{"leaderboard"}</button>
        </div>
    }
}
