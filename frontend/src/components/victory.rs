use common::{GameMode, Outcome};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VictoryProps {
    pub outcome: Outcome,
    pub mode: GameMode,
    pub move_count: u32,
    pub elapsed: u32,
    /// Called with the player name. `None` once the score has been saved.
    pub save_score: Option<Callback<String>>,
    pub show_leaderboard: Callback<()>,
    pub retry: Callback<()>,
}

/// Banner shown once a game is over, solved or not.
#[function_component]
pub fn Victory(
    VictoryProps {
        outcome,
        mode,
        move_count,
        elapsed,
        save_score,
        show_leaderboard,
        retry,
    }: &VictoryProps,
) -> Html {
    let name = use_state(String::new);

    let (title, text) = match outcome {
        Outcome::Solved => ("Huzzah!!", "The ritual has been completed!"),
        Outcome::TimedOut => ("Time Expired!", "The ritual was left incomplete!"),
    };
    let can_rank = *outcome == Outcome::Solved && *mode == GameMode::Story;

    let on_name = {
        let name = name.clone();
        move |ev: InputEvent| {
            let input: HtmlInputElement = ev.target_unchecked_into();
            name.set(input.value());
        }
    };
    let save = {
        let name = name.clone();
        let save_score = save_score.clone();
        move |_| {
            if let Some(cb) = &save_score {
                cb.emit((*name).clone());
            }
        }
    };
    let show_leaderboard = {
        let show_leaderboard = show_leaderboard.clone();
        move |_| show_leaderboard.emit(())
    };
    let retry = {
        let retry = retry.clone();
        move |_| retry.emit(())
    };

    html! {
        <div class="victory">
            <h2>{title}</h2>
            <p>{text}</p>
            <p>{format!("Time: {elapsed} seconds")}</p>
            <p>{format!("Moves: {move_count}")}</p>

            if can_rank {<>
                if save_score.is_some() {<>
                    <input placeholder="your name" value={(*name).clone()} oninput={on_name}/>
                    <button disabled={name.trim().is_empty()} onclick={save}>{"save score"}</button>
                </>} else {
                    <p>{"Score saved!"}</p>
                }
                <button onclick={show_leaderboard}>{"leaderboard"}</button>
            </>}

            <button onclick={retry}>{"retry"}</button>
        </div>
    }
}
