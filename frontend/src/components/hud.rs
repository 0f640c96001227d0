use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::components::b2f;

/// Countdown values below this are highlighted.
const LOW_TIME: u32 = 10;

#[derive(Properties, PartialEq)]
pub struct HudProps {
    pub move_count: u32,
    pub elapsed: u32,
    pub countdown: Option<u32>,
    pub undo: Option<Callback<()>>,
    pub redo: Option<Callback<()>>,
    pub back: Callback<()>,
}

/// Move counter, clocks and the undo/redo buttons shown during a game.
#[function_component]
pub fn Hud(
    HudProps {
        move_count,
        elapsed,
        countdown,
        undo,
        redo,
        back,
    }: &HudProps,
) -> Html {
    let can_undo = undo.is_some();
    let undo = {
        let undo = undo.clone();
        move |_| {
            if let Some(cb) = &undo {
                cb.emit(());
            }
        }
    };
    let can_redo = redo.is_some();
    let redo = {
        let redo = redo.clone();
        move |_| {
            if let Some(cb) = &redo {
                cb.emit(());
            }
        }
    };
    let back = {
        let back = back.clone();
        move |_| back.emit(())
    };

    let time_style = match countdown {
        Some(left) if *left < LOW_TIME => "color: #f00",
        _ => "",
    };

    html! {
        <div class="hud">
            <p>{format!("Moves: {move_count}")}</p>
            <p style={time_style}>
                {format!("Time: {elapsed}s")}
                if let Some(left) = countdown {
                    {format!(" ({left}s left)")}
                }
            </p>
            <button style={format!("opacity: {};", 0.3 + 0.7 * b2f(can_undo))} disabled={!can_undo} onclick={undo}>
                <Icon icon_id={IconId::LucideUndo2} class="icon"/>
            </button>
            <button style={format!("opacity: {};", 0.3 + 0.7 * b2f(can_redo))} disabled={!can_redo} onclick={redo}>
                <Icon icon_id={IconId::LucideRedo2} class="icon"/>
            </button>
            <button onclick={back}>{"back"}</button>
        </div>
    }
}
