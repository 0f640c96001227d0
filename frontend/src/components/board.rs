use common::{Disk, DiskId, NR_PEGS, PegIndex};
use yew::prelude::*;

/// Pixels per world unit of disk radius.
const PX_PER_UNIT: f32 = 28.0;
const PX_DISK_HEIGHT: u32 = 22;

#[derive(Properties, PartialEq)]
pub struct BoardProps {
    pub pegs: [Vec<Disk>; NR_PEGS],
    pub selected: Option<DiskId>,
    pub disk_click: Callback<DiskId>,
    pub peg_click: Callback<PegIndex>,
    #[prop_or_default]
    pub move_denied: bool,
}

/// Render the three pegs with their disks. Clicking a disk selects it,
/// clicking anywhere else on a peg moves the selected disk there.
#[function_component]
pub fn Board(
    BoardProps {
        pegs,
        selected,
        disk_click,
        peg_click,
        move_denied,
    }: &BoardProps,
) -> Html {
    let max_disks = pegs.iter().map(Vec::len).sum::<usize>() as u32;
    let rod_height = PX_DISK_HEIGHT * (max_disks + 1);

    let mut board_classes = Classes::new();
    board_classes.push("game-board");
    if *move_denied {
        board_classes.push("denied");
    }

    html! {
        <div class={board_classes}>
            { for PegIndex::all().into_iter().map(|peg| {
                let onclick = {
                    let peg_click = peg_click.clone();
                    move |_: MouseEvent| peg_click.emit(peg)
                };
                html! {
                    <div
                        class="peg"
                        key={peg.idx()}
                        onclick={onclick}
                        style={format!("height: {rod_height}px")}
                    >
                        <div class="rod"/>
                        { for pegs[peg.idx()].iter().map(|disk| disk_html(disk, *selected, disk_click)) }
                    </div>
                }
            }) }
        </div>
    }
}

fn disk_html(disk: &Disk, selected: Option<DiskId>, disk_click: &Callback<DiskId>) -> Html {
    let id = disk.id();
    let width = 2.0 * disk.size().as_units() * PX_PER_UNIT;

    let mut classes = Classes::new();
    classes.push("disk");
    classes.push(format!("disk-{}", id.0 % 4));
    if selected == Some(id) {
        classes.push("selected");
    }

    let onclick = {
        let disk_click = disk_click.clone();
        Callback::from(move |ev: MouseEvent| {
            // the peg underneath must not see this click
            ev.stop_propagation();
            disk_click.emit(id);
        })
    };

    html! {
        <div
            class={classes}
            key={id.0}
            onclick={onclick}
            style={format!("width: {width}px; height: {PX_DISK_HEIGHT}px")}
        />
    }
}
