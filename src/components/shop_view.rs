use crate::model::CatalogItem;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ShopViewProps {
    pub items: Vec<CatalogItem>,
    pub coins: u64,
    pub busy: bool,
    pub on_purchase: Callback<CatalogItem>,
}

/// Catalog grid. Buy is disabled while a purchase is in flight or the
/// local balance is short, but affordability is only re-checked here for
/// convenience; the server validates independently.
#[function_component(ShopView)]
pub fn shop_view(props: &ShopViewProps) -> Html {
    html! {
        <div>
            <h2 style="margin:0 0 20px 0; font-size:26px;">{"🛒 Webshop"}</h2>
            <div style="display:grid; grid-template-columns:repeat(auto-fill, minmax(240px, 1fr)); gap:18px;">
                {
                    for props.items.iter().map(|item| {
                        let affordable = props.coins >= item.coin_price;
                        let on_buy = {
                            let cb = props.on_purchase.clone();
                            let item = item.clone();
                            Callback::from(move |_| cb.emit(item.clone()))
                        };
                        html! {
                            <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:12px; padding:18px; display:flex; flex-direction:column; gap:10px;">
                                <div style="aspect-ratio:1; display:flex; align-items:center; justify-content:center; font-size:48px; background:linear-gradient(135deg, #8957e5, #1f6feb); border-radius:10px;">
                                    { item.item_type.icon() }
                                </div>
                                <h3 style="margin:0; font-size:18px;">{ &item.item_name }</h3>
                                <p style="margin:0; color:#8b949e; font-size:13px; flex:1;">{ &item.description }</p>
                                <div style="display:flex; justify-content:space-between; align-items:center;">
                                    <span style="color:#d4af37; font-weight:600;">{ format!("💰 {} coins", item.coin_price) }</span>
                                    <button
                                        onclick={on_buy}
                                        disabled={props.busy || !affordable}
                                        style="padding:8px 16px; background:#2ea043; border:1px solid #238636; border-radius:8px; color:#fff; cursor:pointer;"
                                    >
                                        {"Buy"}
                                    </button>
                                </div>
                            </div>
                        }
                    })
                }
            </div>
        </div>
    }
}
