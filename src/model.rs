//! Core data models for the GameHub client.
//! Wire shapes mirror the backend API; the client only caches what the
//! server reports and never invents balances of its own.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

/// Entry cost of one Lucky Spin play, charged server-side.
pub const LUCKY_SPIN_COST: u64 = 50;
/// Entry cost of one Egg Smash play, charged server-side.
pub const EGG_SMASH_COST: u64 = 25;

/// Cached copy of the server-owned user profile. May transiently diverge
/// from server truth between actions; converges by trusting each response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub coins: u64,
    pub inventory: Vec<String>,
}

/// Authenticated identity held between requests. Token and profile are
/// always persisted and cleared together; a half-pair is treated as absent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemType {
    Weapon,
    Tool,
    Cosmetic,
    #[serde(rename = "Power-up")]
    PowerUp,
}

impl ItemType {
    pub fn icon(&self) -> &'static str {
        match self {
            ItemType::Weapon => "⚔️",
            ItemType::Tool => "🔨",
            ItemType::Cosmetic => "👑",
            ItemType::PowerUp => "🧪",
        }
    }
}

/// A purchasable shop item. Immutable from the client's perspective;
/// fetched once per dashboard mount.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub item_type: ItemType,
    pub item_name: String,
    pub coin_price: u64,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

// ---------------- Wire payloads & responses -----------------

#[derive(Debug, Serialize)]
pub struct LoginPayload<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RegisterPayload<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// A 2xx auth body missing either field is a protocol-shape failure,
/// not a rejection.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: UserProfile,
}

/// Purchase result: the server reports the authoritative remaining total.
#[derive(Debug, Deserialize)]
pub struct PurchaseReceipt {
    pub coins_remaining: u64,
    pub message: String,
}

/// Mini-game result: the server reports only the winnings, not a running
/// total, so the entry fee is deducted locally.
#[derive(Debug, Deserialize)]
pub struct GameResult {
    pub coins_won: u64,
    pub message: String,
}

// ---------------- Player state reducer -----------------

/// The dashboard's working copy of balance and inventory. All mutations
/// flow through the reducer so reconciliation lives in one place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerState {
    pub coins: u64,
    pub inventory: Vec<String>,
}

impl PlayerState {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            coins: profile.coins,
            inventory: profile.inventory.clone(),
        }
    }

    pub fn can_afford(&self, cost: u64) -> bool {
        self.coins >= cost
    }

    /// Fold the reconciled state back into a profile for re-persisting.
    pub fn apply_to(&self, profile: &UserProfile) -> UserProfile {
        UserProfile {
            username: profile.username.clone(),
            coins: self.coins,
            inventory: self.inventory.clone(),
        }
    }
}

#[derive(Clone, Debug)]
pub enum PlayerAction {
    /// Committed purchase: adopt the server's remaining total and record
    /// the item locally.
    CommitPurchase {
        coins_remaining: u64,
        item_name: String,
    },
    /// Committed mini-game round: entry fee out, winnings in.
    CommitGameResult { entry_cost: u64, coins_won: u64 },
}

impl Reducible for PlayerState {
    type Action = PlayerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use PlayerAction::*;
        let mut new = (*self).clone();
        match action {
            CommitPurchase {
                coins_remaining,
                item_name,
            } => {
                new.coins = coins_remaining;
                new.inventory.push(item_name);
            }
            CommitGameResult {
                entry_cost,
                coins_won,
            } => {
                new.coins = new.coins.saturating_sub(entry_cost).saturating_add(coins_won);
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(coins: u64) -> PlayerState {
        PlayerState {
            coins,
            inventory: vec!["Pickaxe".into()],
        }
    }

    #[test]
    fn purchase_adopts_server_total_and_appends_item() {
        let state = Rc::new(player(500));
        let next = state.reduce(PlayerAction::CommitPurchase {
            coins_remaining: 350,
            item_name: "Steel Sword".into(),
        });
        assert_eq!(next.coins, 350);
        assert_eq!(
            next.inventory,
            vec!["Pickaxe".to_string(), "Steel Sword".to_string()]
        );
    }

    #[test]
    fn game_result_applies_cost_and_winnings_exactly() {
        // Starting from B >= cost, the new balance must be B - cost + won.
        let state = Rc::new(player(100));
        let next = state.reduce(PlayerAction::CommitGameResult {
            entry_cost: LUCKY_SPIN_COST,
            coins_won: 200,
        });
        assert_eq!(next.coins, 100 - 50 + 200);
    }

    #[test]
    fn game_result_never_underflows() {
        let state = Rc::new(player(10));
        let next = state.reduce(PlayerAction::CommitGameResult {
            entry_cost: EGG_SMASH_COST,
            coins_won: 5,
        });
        assert_eq!(next.coins, 5);
    }

    #[test]
    fn can_afford_is_inclusive() {
        assert!(player(50).can_afford(50));
        assert!(!player(49).can_afford(50));
    }

    #[test]
    fn apply_to_keeps_username_and_takes_local_state() {
        let profile = UserProfile {
            username: "alice".into(),
            coins: 1000,
            inventory: vec![],
        };
        let updated = player(75).apply_to(&profile);
        assert_eq!(updated.username, "alice");
        assert_eq!(updated.coins, 75);
        assert_eq!(updated.inventory, vec!["Pickaxe".to_string()]);
    }

    #[test]
    fn item_type_round_trips_wire_names() {
        let item: CatalogItem = serde_json::from_value(serde_json::json!({
            "id": "i1",
            "item_type": "Power-up",
            "item_name": "Speed Potion",
            "coin_price": 25,
            "description": "Increases your speed temporarily"
        }))
        .unwrap();
        assert_eq!(item.item_type, ItemType::PowerUp);
        assert_eq!(item.image_url, None);
        let raw = serde_json::to_value(&item).unwrap();
        assert_eq!(raw["item_type"], "Power-up");
    }

    #[test]
    fn purchase_receipt_requires_remaining_total() {
        // A body without coins_remaining must not parse into a receipt.
        let body = serde_json::json!({ "message": "Successfully purchased!" });
        assert!(serde_json::from_value::<PurchaseReceipt>(body).is_err());
    }

    #[test]
    fn auth_response_requires_token_and_profile() {
        let missing_user = serde_json::json!({ "access_token": "t1" });
        assert!(serde_json::from_value::<AuthResponse>(missing_user).is_err());
        let full = serde_json::json!({
            "access_token": "t1",
            "token_type": "bearer",
            "user": { "username": "alice", "coins": 100, "inventory": [] }
        });
        let auth: AuthResponse = serde_json::from_value(full).unwrap();
        assert_eq!(auth.user.coins, 100);
    }
}
