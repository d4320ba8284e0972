use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InventoryViewProps {
    pub inventory: Vec<String>,
}

#[function_component(InventoryView)]
pub fn inventory_view(props: &InventoryViewProps) -> Html {
    html! {
        <div>
            <h2 style="margin:0 0 20px 0; font-size:26px;">{"🎒 My Inventory"}</h2>
            if props.inventory.is_empty() {
                <div style="text-align:center; padding:48px 0;">
                    <div style="font-size:56px; margin-bottom:12px;">{"📦"}</div>
                    <p style="color:#8b949e;">{"Your inventory is empty. Visit the webshop to buy items!"}</p>
                </div>
            } else {
                <div style="display:grid; grid-template-columns:repeat(auto-fill, minmax(150px, 1fr)); gap:14px;">
                    {
                        for props.inventory.iter().map(|name| html! {
                            <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:10px; padding:16px; text-align:center;">
                                <div style="font-size:26px; margin-bottom:6px;">{"🎁"}</div>
                                <p style="margin:0; font-size:13px;">{ name }</p>
                            </div>
                        })
                    }
                </div>
            }
        </div>
    }
}
