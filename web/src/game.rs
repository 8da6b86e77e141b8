use serde::{Deserialize, Serialize};
use tictactoe_core as game;
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) enum Msg {
    Play(game::CellIndex),
}

pub trait HasUpdate {
    fn has_update(self) -> bool;
}

impl HasUpdate for game::Result<game::MoveOutcome> {
    fn has_update(self) -> bool {
        match self {
            Ok(outcome) => outcome.has_update(),
            Err(err) => {
                log::warn!("move rejected: {}", err);
                false
            }
        }
    }
}

fn square_class(cell: game::Cell, winning: bool, locked: bool) -> Classes {
    use game::Cell::*;

    classes!(
        "square",
        match cell {
            Empty => None,
            X => Some("x"),
            O => Some("o"),
        },
        winning.then_some("win"),
        locked.then_some("locked")
    )
}

#[derive(Properties, Clone, PartialEq)]
struct SquareProps {
    index: game::CellIndex,
    cell: game::Cell,
    #[prop_or_default]
    winning: bool,
    #[prop_or_default]
    locked: bool,
    callback: Callback<game::CellIndex>,
}

#[function_component(SquareView)]
fn square_component(props: &SquareProps) -> Html {
    let SquareProps {
        index,
        cell,
        winning,
        locked,
        callback,
    } = props.clone();

    let class = square_class(cell, winning, locked);
    let label = cell.mark().map(|mark| mark.to_string()).unwrap_or_default();

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("square {} clicked", index);
        callback.emit(index);
    });

    html! {
        <button {class} {onclick}>{label}</button>
    }
}

fn square_props(
    snapshot: &game::Snapshot,
    index: game::CellIndex,
    callback: Callback<game::CellIndex>,
) -> SquareProps {
    SquareProps {
        index,
        cell: snapshot.board[index],
        winning: snapshot.is_winning_cell(index),
        locked: !snapshot.accepts_move_at(index),
        callback,
    }
}

/// Renders the nine squares of a snapshot and forwards clicks by cell index.
#[derive(Properties, Clone, PartialEq)]
pub(crate) struct BoardProps {
    pub snapshot: game::Snapshot,
    pub onclick: Callback<game::CellIndex>,
}

#[function_component(BoardView)]
pub(crate) fn board_component(props: &BoardProps) -> Html {
    let BoardProps { snapshot, onclick } = props;

    html! {
        <div class="board">
            {
                for (0..game::BOARD_SIDE).map(|row| html! {
                    <div class="board-row">
                        {
                            for (0..game::BOARD_SIDE).map(|col| {
                                let index = game::cell_index(row, col);
                                let props = square_props(snapshot, index, onclick.clone());
                                html! {
                                    <SquareView ..props/>
                                }
                            })
                        }
                    </div>
                })
            }
        </div>
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    engine: game::GameEngine,
}

impl GameView {
    fn play(&mut self, index: game::CellIndex) -> bool {
        let updated = self.engine.play(index).has_update();

        if updated && log::log_enabled!(log::Level::Trace) {
            match serde_json::to_string(&self.engine.snapshot()) {
                Ok(json) => log::trace!("snapshot: {}", json),
                Err(err) => log::error!("failed to serialize snapshot: {}", err),
            }
        }

        updated
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            engine: game::GameEngine::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Play(index) => {
                log::debug!("play at {}", index);
                self.play(index)
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let snapshot = self.engine.snapshot();
        let status = snapshot.status.clone();
        let onclick = ctx.link().callback(Msg::Play);

        html! {
            <div class="game">
                <div class="game-board">
                    <BoardView {snapshot} {onclick}/>
                </div>
                <div class="game-info">
                    <div>{status}</div>
                </div>
            </div>
        }
    }
}
