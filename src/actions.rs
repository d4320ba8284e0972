//! Coin-spending actions: purchase and the two mini-games.
//!
//! Every action follows the same shape: guard locally, POST, commit the
//! server's verdict through the player-state reducer, show a transient
//! notice. The guard is a convenience only; the server independently
//! validates and may still reject a racing request.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use serde_json::{Value, json};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{self, ApiClient, ApiError};
use crate::model::{
    CatalogItem, EGG_SMASH_COST, GameResult, LUCKY_SPIN_COST, PlayerAction, PlayerState,
    PurchaseReceipt,
};

/// How long a result or error notice stays on screen.
pub const NOTICE_MS: u32 = 3_000;

#[derive(Clone, Debug, PartialEq)]
pub enum CoinAction {
    Purchase(CatalogItem),
    LuckySpin,
    EggSmash,
}

impl CoinAction {
    pub fn path(&self) -> &'static str {
        match self {
            CoinAction::Purchase(_) => "/purchase",
            CoinAction::LuckySpin => "/games/lucky-spin",
            CoinAction::EggSmash => "/games/egg-smash",
        }
    }

    pub fn entry_cost(&self) -> u64 {
        match self {
            CoinAction::Purchase(item) => item.coin_price,
            CoinAction::LuckySpin => LUCKY_SPIN_COST,
            CoinAction::EggSmash => EGG_SMASH_COST,
        }
    }

    pub fn request_body(&self) -> Value {
        match self {
            CoinAction::Purchase(item) => json!({ "item_id": item.id }),
            CoinAction::LuckySpin | CoinAction::EggSmash => json!({}),
        }
    }

    /// Turn a 2xx body into the reducer commit and the notice to show.
    /// Purchase adopts the server's authoritative total; the games carry
    /// only the winnings on the wire, so their entry fee is applied as a
    /// local delta.
    fn outcome(&self, body: Value) -> Result<(PlayerAction, String), ApiError> {
        match self {
            CoinAction::Purchase(item) => {
                let receipt: PurchaseReceipt = api::decode(body)?;
                Ok((
                    PlayerAction::CommitPurchase {
                        coins_remaining: receipt.coins_remaining,
                        item_name: item.item_name.clone(),
                    },
                    receipt.message,
                ))
            }
            CoinAction::LuckySpin | CoinAction::EggSmash => {
                let result: GameResult = api::decode(body)?;
                Ok((
                    PlayerAction::CommitGameResult {
                        entry_cost: self.entry_cost(),
                        coins_won: result.coins_won,
                    },
                    result.message,
                ))
            }
        }
    }
}

/// Show `text` for `NOTICE_MS`, then clear it. The shared sequence number
/// keeps a stale timer from wiping a newer notice.
pub fn show_notice(
    message: &UseStateHandle<Option<String>>,
    notice_seq: &Rc<RefCell<u64>>,
    text: String,
) {
    let my_seq = {
        let mut seq = notice_seq.borrow_mut();
        *seq += 1;
        *seq
    };
    message.set(Some(text));
    let message = message.clone();
    let notice_seq = notice_seq.clone();
    spawn_local(async move {
        TimeoutFuture::new(NOTICE_MS).await;
        if *notice_seq.borrow() == my_seq {
            message.set(None);
        }
    });
}

/// Fire one coin action against the backend. Re-entrancy of the same
/// action is blocked by its busy flag; an unaffordable action is refused
/// before any network dispatch.
pub fn run_coin_action(
    action: CoinAction,
    token: String,
    player: UseReducerHandle<PlayerState>,
    busy: UseStateHandle<bool>,
    message: UseStateHandle<Option<String>>,
    notice_seq: Rc<RefCell<u64>>,
) {
    if *busy || !player.can_afford(action.entry_cost()) {
        return;
    }
    busy.set(true);
    spawn_local(async move {
        let client = ApiClient::with_token(token);
        let shown = match client.post_json(action.path(), &action.request_body()).await {
            Ok(body) => match action.outcome(body) {
                Ok((commit, notice)) => {
                    player.dispatch(commit);
                    notice
                }
                Err(err) => err.to_string(),
            },
            Err(err) => err.to_string(),
        };
        busy.set(false);
        show_notice(&message, &notice_seq, shown);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiErrorKind;

    fn sword() -> CatalogItem {
        CatalogItem {
            id: "i1".into(),
            item_type: crate::model::ItemType::Weapon,
            item_name: "Steel Sword".into(),
            coin_price: 150,
            description: "A sharp steel sword for battle".into(),
            image_url: None,
        }
    }

    #[test]
    fn actions_map_to_their_endpoints_and_costs() {
        assert_eq!(CoinAction::Purchase(sword()).path(), "/purchase");
        assert_eq!(CoinAction::Purchase(sword()).entry_cost(), 150);
        assert_eq!(CoinAction::LuckySpin.path(), "/games/lucky-spin");
        assert_eq!(CoinAction::LuckySpin.entry_cost(), 50);
        assert_eq!(CoinAction::EggSmash.path(), "/games/egg-smash");
        assert_eq!(CoinAction::EggSmash.entry_cost(), 25);
    }

    #[test]
    fn purchase_body_carries_the_item_id_and_games_send_empty_objects() {
        assert_eq!(
            CoinAction::Purchase(sword()).request_body(),
            json!({ "item_id": "i1" })
        );
        assert_eq!(CoinAction::LuckySpin.request_body(), json!({}));
        assert_eq!(CoinAction::EggSmash.request_body(), json!({}));
    }

    #[test]
    fn purchase_outcome_commits_the_server_total() {
        let (commit, notice) = CoinAction::Purchase(sword())
            .outcome(json!({ "coins_remaining": 850, "message": "Successfully purchased!" }))
            .unwrap();
        assert_eq!(notice, "Successfully purchased!");
        match commit {
            PlayerAction::CommitPurchase {
                coins_remaining,
                item_name,
            } => {
                assert_eq!(coins_remaining, 850);
                assert_eq!(item_name, "Steel Sword");
            }
            other => panic!("unexpected commit: {other:?}"),
        }
    }

    #[test]
    fn purchase_outcome_without_total_is_a_shape_error() {
        // The balance must stay untouched: no commit is produced at all.
        let err = CoinAction::Purchase(sword())
            .outcome(json!({ "message": "Successfully purchased!" }))
            .unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::ProtocolShape);
    }

    #[test]
    fn game_outcome_carries_the_entry_cost_for_the_local_delta() {
        let (commit, _) = CoinAction::LuckySpin
            .outcome(json!({ "coins_won": 200, "message": "You won 200 coins!" }))
            .unwrap();
        match commit {
            PlayerAction::CommitGameResult {
                entry_cost,
                coins_won,
            } => {
                assert_eq!(entry_cost, LUCKY_SPIN_COST);
                assert_eq!(coins_won, 200);
            }
            other => panic!("unexpected commit: {other:?}"),
        }
    }

    #[test]
    fn game_outcome_without_winnings_is_a_shape_error() {
        let err = CoinAction::EggSmash
            .outcome(json!({ "success": true }))
            .unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::ProtocolShape);
    }
}
