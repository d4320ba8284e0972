use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GamePanelProps {
    pub title: AttrValue,
    pub emblem: AttrValue,
    pub blurb: AttrValue,
    /// Entry cost and win range, e.g. "Cost: 50 coins | Win: 10-500 coins".
    pub stakes: AttrValue,
    pub play_label: AttrValue,
    pub busy_label: AttrValue,
    pub cost: u64,
    pub coins: u64,
    pub busy: bool,
    pub on_play: Callback<()>,
}

/// Shared panel for the chance-based mini-games. The play button is
/// disabled while this game's round is in flight or the balance is below
/// the entry cost.
#[function_component(GamePanel)]
pub fn game_panel(props: &GamePanelProps) -> Html {
    let play = {
        let cb = props.on_play.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="text-align:center;">
            <h2 style="margin:0 0 20px 0; font-size:26px;">{ &props.title }</h2>
            <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:20px; padding:40px; max-width:420px; margin:0 auto;">
                <div style="font-size:72px; margin-bottom:18px;">{ &props.emblem }</div>
                <p style="margin:0 0 14px 0; color:#8b949e;">{ &props.blurb }</p>
                <p style="margin:0 0 20px 0; color:#d4af37;">{ &props.stakes }</p>
                <button
                    onclick={play}
                    disabled={props.busy || props.coins < props.cost}
                    style="padding:14px 32px; background:linear-gradient(90deg, #8957e5, #db61a2); border:none; border-radius:999px; color:#fff; font-size:18px; font-weight:700; cursor:pointer;"
                >
                    { if props.busy { props.busy_label.clone() } else { props.play_label.clone() } }
                </button>
            </div>
        </div>
    }
}
