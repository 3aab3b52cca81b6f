use crate::client::HttpTriviaSource;
use crate::controller::{GameController, load_board};
use crate::utils::*;
use jeopardy_core::{self as game, CellPos, GameConfig, RevealState};
use yew::prelude::*;

pub(crate) enum Msg {
    StartGame,
    BoardLoaded(game::Result<game::Board>),
    CellClicked(CellPos),
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    pos: CellPos,
    text: String,
    state: RevealState,
    callback: Callback<CellPos>,
}

fn cell_classes(state: RevealState) -> Classes {
    use RevealState::*;

    let mut class = classes!(
        "cell",
        match state {
            Hidden => classes!(),
            Question => classes!("question"),
            Answer => classes!("answer"),
        }
    );
    if state.is_terminal() {
        class.push("locked");
    }
    class
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        pos,
        text,
        state,
        callback,
    } = props.clone();

    let class = cell_classes(state);

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("{} clicked", pos);
        callback.emit(pos);
    });

    html! {
        <td {class} {onclick}>{text}</td>
    }
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    pub config: GameConfig,
    pub api_base: String,
    /// Force a seed instead of random
    pub seed: Option<u64>,
}

#[derive(Debug)]
pub(crate) struct GameView {
    controller: GameController,
    source: HttpTriviaSource,
}

impl GameView {
    fn start_game(&mut self, ctx: &Context<Self>) -> bool {
        if !self.controller.begin_loading() {
            return false;
        }

        let GameProps { config, seed, .. } = ctx.props().clone();
        let seed = seed.unwrap_or_else(js_random_seed);
        let source = self.source.clone();
        log::info!("starting game, seed: {}", seed);

        ctx.link().send_future(async move {
            let result = load_board(&source, config, seed).await;
            Msg::BoardLoaded(result)
        });
        true
    }

    fn button_label(&self) -> &'static str {
        if self.controller.is_loading() {
            "Loading…"
        } else if self.controller.has_loaded_before() {
            "Restart"
        } else {
            "Start"
        }
    }

    fn view_board(&self, ctx: &Context<Self>) -> Html {
        let display = self.controller.display();
        let board = self.controller.board();
        let callback = ctx.link().callback(Msg::CellClicked);

        if display.is_empty() {
            return html! {};
        }

        html! {
            <table id="jeopardy">
                <thead>
                    <tr>
                        { for display.titles().iter().map(|title| html! { <th>{title.clone()}</th> }) }
                    </tr>
                </thead>
                <tbody>
                    {
                        for (0..display.rows()).map(|row| html! {
                            <tr>
                                {
                                    for (0..display.cols()).map(|col| {
                                        let pos = CellPos::new(row, col);
                                        let text = display.text_at(pos).unwrap_or_default().to_string();
                                        let state = board.state_at(pos).unwrap_or_default();
                                        let callback = callback.clone();
                                        html! {
                                            <CellView {pos} {text} {state} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </tbody>
            </table>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            controller: GameController::new(),
            source: HttpTriviaSource::new(ctx.props().api_base.clone()),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            StartGame => self.start_game(ctx),
            BoardLoaded(result) => {
                self.controller.finish_loading(result);
                true
            }
            CellClicked(pos) => match self.controller.on_cell_clicked(pos) {
                Some(update) => {
                    log::debug!(
                        "{} is now {:?}: {:?}",
                        update.pos,
                        update.state,
                        update.content
                    );
                    true
                }
                None => false,
            },
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().api_base != old_props.api_base {
            self.source = HttpTriviaSource::new(ctx.props().api_base.clone());
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let loading = self.controller.is_loading();
        let label = self.button_label();
        let cb_start = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::StartGame
        });

        html! {
            <div class="jeopardy">
                <nav>
                    <button id="start" class={classes!(loading.then_some("loading"))} disabled={loading} onclick={cb_start}>
                        {label}
                    </button>
                </nav>
                if let Some(err) = self.controller.error() {
                    <p class="error" role="alert">{format!("Could not load a board: {}", err)}</p>
                }
                if loading {
                    <div class="spinner" aria-label="loading"/>
                }
                { self.view_board(ctx) }
            </div>
        }
    }
}
