use super::{game_view::GamePanel, inventory_view::InventoryView, shop_view::ShopView};
use crate::actions::{CoinAction, run_coin_action};
use crate::api::{self, ApiClient};
use crate::model::{
    CatalogItem, EGG_SMASH_COST, LUCKY_SPIN_COST, PlayerState, Session,
};
use crate::session::SessionStore;
use crate::util::clog;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Webshop,
    LuckySpin,
    EggSmash,
    Inventory,
}

impl Tab {
    fn label(&self) -> &'static str {
        match self {
            Tab::Webshop => "🛒 Webshop",
            Tab::LuckySpin => "🎰 Lucky Spin",
            Tab::EggSmash => "🥚 Egg Smashing",
            Tab::Inventory => "🎒 Inventory",
        }
    }
}

const TABS: [Tab; 4] = [Tab::Webshop, Tab::LuckySpin, Tab::EggSmash, Tab::Inventory];

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub session: Session,
    pub on_logout: Callback<()>,
}

/// Authenticated home screen: header with the coin balance, sidebar with
/// four mutually exclusive panels, and a transient notice banner driven by
/// the coin actions.
#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let tab = use_state(|| Tab::Webshop);
    let player = {
        let profile = props.session.user.clone();
        use_reducer(move || PlayerState::from_profile(&profile))
    };
    let items = use_state(Vec::<CatalogItem>::new);
    let message = use_state(|| None::<String>);
    let notice_seq = use_mut_ref(|| 0u64);
    let purchase_busy = use_state(|| false);
    let spin_busy = use_state(|| false);
    let smash_busy = use_state(|| false);

    // Catalog is fetched once per mount; a failure just leaves the shop
    // empty and goes to the console.
    {
        let items = items.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match ApiClient::new().get_json("/items").await {
                    Ok(body) => match api::decode::<Vec<CatalogItem>>(body) {
                        Ok(list) => items.set(list),
                        Err(err) => clog(&format!("failed to parse items: {err}")),
                    },
                    Err(err) => clog(&format!("failed to load items: {err}")),
                }
            });
            || ()
        });
    }

    // Re-persist the reconciled profile (always together with the token)
    // so a reload starts from the latest known balance.
    {
        let session = props.session.clone();
        let player = player.clone();
        use_effect_with((player.coins, player.inventory.len()), move |_| {
            let user = player.apply_to(&session.user);
            SessionStore::browser().save(&Session {
                token: session.token.clone(),
                user,
            });
            || ()
        });
    }

    let on_purchase = {
        let token = props.session.token.clone();
        let player = player.clone();
        let busy = purchase_busy.clone();
        let message = message.clone();
        let notice_seq = notice_seq.clone();
        Callback::from(move |item: CatalogItem| {
            run_coin_action(
                CoinAction::Purchase(item),
                token.clone(),
                player.clone(),
                busy.clone(),
                message.clone(),
                notice_seq.clone(),
            );
        })
    };
    let on_spin = {
        let token = props.session.token.clone();
        let player = player.clone();
        let busy = spin_busy.clone();
        let message = message.clone();
        let notice_seq = notice_seq.clone();
        Callback::from(move |_| {
            run_coin_action(
                CoinAction::LuckySpin,
                token.clone(),
                player.clone(),
                busy.clone(),
                message.clone(),
                notice_seq.clone(),
            );
        })
    };
    let on_smash = {
        let token = props.session.token.clone();
        let player = player.clone();
        let busy = smash_busy.clone();
        let message = message.clone();
        let notice_seq = notice_seq.clone();
        Callback::from(move |_| {
            run_coin_action(
                CoinAction::EggSmash,
                token.clone(),
                player.clone(),
                busy.clone(),
                message.clone(),
                notice_seq.clone(),
            );
        })
    };
    let logout = {
        let cb = props.on_logout.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let nav_button = |this: Tab| {
        let tab = tab.clone();
        let active = *tab == this;
        let style = if active {
            "width:100%; text-align:left; padding:10px 14px; border-radius:8px; border:none; background:#1f6feb; color:#fff; cursor:pointer;"
        } else {
            "width:100%; text-align:left; padding:10px 14px; border-radius:8px; border:none; background:transparent; color:#8b949e; cursor:pointer;"
        };
        html! {
            <button onclick={Callback::from(move |_| tab.set(this))} style={style}>
                { this.label() }
            </button>
        }
    };

    let content = match *tab {
        Tab::Webshop => html! {
            <ShopView
                items={(*items).clone()}
                coins={player.coins}
                busy={*purchase_busy}
                on_purchase={on_purchase}
            />
        },
        Tab::LuckySpin => html! {
            <GamePanel
                title="🎰 Lucky Spin"
                emblem="🎰"
                blurb="Spin the wheel of fortune!"
                stakes="Cost: 50 coins | Win: 10-500 coins"
                play_label="SPIN! 🎰"
                busy_label="Spinning..."
                cost={LUCKY_SPIN_COST}
                coins={player.coins}
                busy={*spin_busy}
                on_play={on_spin}
            />
        },
        Tab::EggSmash => html! {
            <GamePanel
                title="🥚 Egg Smashing"
                emblem="🥚"
                blurb="Smash eggs to find treasures!"
                stakes="Cost: 25 coins | Win: 5-200 coins"
                play_label="SMASH! 🔨"
                busy_label="Smashing..."
                cost={EGG_SMASH_COST}
                coins={player.coins}
                busy={*smash_busy}
                on_play={on_smash}
            />
        },
        Tab::Inventory => html! {
            <InventoryView inventory={player.inventory.clone()} />
        },
    };

    html! {
        <div style="min-height:100vh; background:linear-gradient(135deg, #1a1033, #0d1b3e, #101735); color:#e6edf3;">
            <header id="top-bar" style="display:flex; justify-content:space-between; align-items:center; padding:12px 20px; background:rgba(0,0,0,0.3); border-bottom:1px solid #30363d;">
                <h1 style="margin:0; font-size:22px;">{"🎮 GameHub"}</h1>
                <div style="display:flex; align-items:center; gap:16px;">
                    <div style="display:flex; align-items:center; gap:6px; background:rgba(212,175,55,0.15); border-radius:999px; padding:6px 14px; color:#d4af37; font-weight:600;">
                        <span>{"💰"}</span>
                        <span>{ format!("{} coins", player.coins) }</span>
                    </div>
                    <span>{ format!("Welcome, {}!", props.session.user.username) }</span>
                    <button onclick={logout} style="padding:8px 14px; background:#f85149; border:1px solid #b62324; border-radius:8px; color:#fff; cursor:pointer;">
                        {"Logout"}
                    </button>
                </div>
            </header>

            <div style="display:flex;">
                <aside style="width:220px; min-height:calc(100vh - 61px); padding:18px; background:rgba(0,0,0,0.3); border-right:1px solid #30363d; display:flex; flex-direction:column; gap:6px;">
                    { for TABS.iter().map(|t| nav_button(*t)) }
                </aside>

                <main style="flex:1; padding:28px;">
                    if let Some(notice) = (*message).clone() {
                        <div style="margin-bottom:20px; padding:12px 16px; background:rgba(46,160,67,0.15); border:1px solid rgba(46,160,67,0.4); border-radius:8px; color:#3fb950;">
                            { notice }
                        </div>
                    }
                    { content }
                </main>
            </div>
        </div>
    }
}
