mod components;
mod game_state;
mod storage;

use common::{Leaderboard as Ranking, ScoreRecord, Status};
use gloo_timers::callback::Interval;
use web_sys::HtmlElement;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::{
    board::Board, hud::Hud, leaderboard::Leaderboard, setup::Setup, victory::Victory,
};
use crate::game_state::{GameAction, GameState};

const TICK_MILLIS: u32 = 1000;

#[function_component]
fn App() -> Html {
    let game_state = use_reducer(GameState::new);
    let ranking = use_state(|| None::<Ranking>);
    let score_saved = use_state(|| false);
    let display_scale = use_state(|| 1.0);
    let div_ref = use_node_ref();

    // one interval per started game; a new epoch drops the old one
    {
        let dispatcher = game_state.dispatcher();
        let epoch = game_state.session.epoch();
        let running = game_state.session.is_active();
        use_effect_with((epoch, running), move |&(epoch, running)| {
            let interval = running.then(|| {
                log::debug!("starting clock for {epoch:?}");
                Interval::new(TICK_MILLIS, move || {
                    dispatcher.dispatch(GameAction::Tick { epoch })
                })
            });
            move || drop(interval)
        });
    }

    let dispatch = |action: GameAction| {
        let game_state = game_state.clone();
        Callback::from(move |_: ()| game_state.dispatch(action))
    };

    let show_leaderboard = {
        let ranking = ranking.clone();
        Callback::from(move |_| ranking.set(Some(storage::load_leaderboard())))
    };
    let hide_leaderboard = {
        let ranking = ranking.clone();
        Callback::from(move |_| ranking.set(None))
    };

    let retry = {
        let game_state = game_state.clone();
        let score_saved = score_saved.clone();
        Callback::from(move |_| {
            log::info!("retry");
            score_saved.set(false);
            game_state.dispatch(GameAction::Retry);
        })
    };

    let save_score = {
        let game_state = game_state.clone();
        let score_saved = score_saved.clone();
        Callback::from(move |name: String| {
            let record = match ScoreRecord::from_session(&name, &game_state.session) {
                Ok(record) => record,
                Err(err) => {
                    log::warn!("Not saving score: {err}");
                    return;
                }
            };
            match storage::save_score(record) {
                Ok(()) => score_saved.set(true),
                Err(err) => log::error!("Cannot save score: {err:#}"),
            }
        })
    };

    let window_size = use_window_size();
    let debounced_size_update = {
        let display_scale = display_scale.clone();
        let div_ref = div_ref.clone();
        use_debounce(
            move || {
                let Some(div) = div_ref.cast::<HtmlElement>() else {
                    return;
                };

                let new_scale = (window_size.0 / div.client_width().max(1) as f64)
                    .min(window_size.1 / div.client_height().max(1) as f64)
                    * 0.9;
                display_scale.set(new_scale.min(1.5));
            },
            200,
        )
    };
    use_memo(window_size, |_| {
        debounced_size_update.run();
        || {}
    });

    let view = game_state.session.view();

    let content = if let Some(ranking) = &*ranking {
        html! { <Leaderboard ranking={ranking.clone()} back={hide_leaderboard} /> }
    } else if game_state.is_setting_up() {
        let set_mode = {
            let game_state = game_state.clone();
            Callback::from(move |mode| game_state.dispatch(GameAction::SetMode { mode }))
        };
        let set_disk_count = {
            let game_state = game_state.clone();
            Callback::from(move |count| game_state.dispatch(GameAction::SetDiskCount { count }))
        };
        let set_time_limit = {
            let game_state = game_state.clone();
            Callback::from(move |seconds| {
                game_state.dispatch(GameAction::SetTimeLimit { seconds })
            })
        };
        html! {
            <Setup
                mode={game_state.mode}
                disk_count={game_state.disk_count}
                time_limit={game_state.time_limit}
                {set_mode}
                {set_disk_count}
                {set_time_limit}
                start={dispatch(GameAction::Start)}
                show_leaderboard={show_leaderboard.clone()}
            />
        }
    } else {
        let disk_click = {
            let game_state = game_state.clone();
            Callback::from(move |id| game_state.dispatch(GameAction::ClickDisk { id }))
        };
        let peg_click = {
            let game_state = game_state.clone();
            Callback::from(move |peg| game_state.dispatch(GameAction::ClickPeg { peg }))
        };
        let banner = match view.status {
            Status::Finished(outcome) => html! {
                <Victory
                    {outcome}
                    mode={view.mode}
                    move_count={view.move_count}
                    elapsed={view.elapsed_seconds}
                    save_score={(!*score_saved).then_some(save_score)}
                    show_leaderboard={show_leaderboard.clone()}
                    retry={retry.clone()}
                />
            },
            _ => html! {},
        };
        html! {<>
            <Hud
                move_count={view.move_count}
                elapsed={view.elapsed_seconds}
                countdown={view.countdown}
                undo={view.can_undo.then(|| dispatch(GameAction::Undo))}
                redo={view.can_redo.then(|| dispatch(GameAction::Redo))}
                back={retry}
            />
            <Board
                pegs={view.pegs.clone()}
                selected={view.selected}
                {disk_click}
                {peg_click}
                move_denied={game_state.move_denied}
            />
            {banner}
        </>}
    };

    html! {
        <div ref={div_ref} class="scaling-container" style={format!("transform: scale({})", *display_scale)}>
            <h1>{"Towers of Hanoi"}</h1>
            {content}
        </div>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
