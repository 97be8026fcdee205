use eopdeal::{
    Card, Deal, DealOptions, DealParams, DistributionPolicy, Hand, HostGroup, build_deck,
    played_storage_key,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Host and player pages build one of these from the page URL.
#[wasm_bindgen]
pub struct WasmDeal {
    deal: Deal,
    player: Option<usize>,
}

#[wasm_bindgen]
impl WasmDeal {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: &str, players: u32, policy: Option<String>) -> Result<WasmDeal, JsValue> {
        let options = options_for(policy.as_deref())?;
        let deal = Deal::new(&options, seed, players as usize).map_err(js_err)?;
        Ok(Self { deal, player: None })
    }

    /// Builds a deal from `location.search`.
    pub fn from_query(query: &str, policy: Option<String>) -> Result<WasmDeal, JsValue> {
        let params = DealParams::parse(query).map_err(js_err)?;
        let options = options_for(policy.as_deref())?;
        let deal = Deal::new(&options, &params.seed, params.players).map_err(js_err)?;
        if let Some(player) = params.player {
            deal.hand(player).map_err(js_err)?;
        }
        Ok(Self {
            deal,
            player: params.player,
        })
    }

    pub fn seed(&self) -> String {
        self.deal.seed().to_string()
    }

    pub fn players(&self) -> u32 {
        self.deal.player_count() as u32
    }

    pub fn player(&self) -> Option<u32> {
        self.player.map(|player| player as u32)
    }

    /// Seed escaped for insertion into page markup.
    pub fn display_seed(&self) -> String {
        eopdeal::sanitize_input(self.deal.seed())
    }

    pub fn hand(&self, player: u32) -> Result<JsValue, JsValue> {
        let hand = self.deal.hand(player as usize).map_err(js_err)?;
        to_js_value(&JsHand::from(hand))
    }

    /// The hand of the player named in the page URL.
    pub fn own_hand(&self) -> Result<JsValue, JsValue> {
        let player = self
            .player
            .ok_or_else(|| JsValue::from_str("no player in query"))?;
        self.hand(player as u32)
    }

    pub fn host_view(&self) -> Result<JsValue, JsValue> {
        let groups: Vec<JsGroup> = self.deal.host_view().into_iter().map(JsGroup::from).collect();
        to_js_value(&groups)
    }

    pub fn storage_key(&self) -> Result<String, JsValue> {
        let player = self
            .player
            .ok_or_else(|| JsValue::from_str("no player in query"))?;
        Ok(played_storage_key(self.deal.seed(), player))
    }
}

#[wasm_bindgen]
pub fn deck() -> Result<JsValue, JsValue> {
    let cards: Vec<JsCard> = build_deck().iter().map(JsCard::from).collect();
    to_js_value(&cards)
}

#[wasm_bindgen]
pub fn host_link(base: &str, seed: &str, players: u32) -> String {
    eopdeal::host_link(base, seed, players as usize)
}

#[wasm_bindgen]
pub fn player_link(base: &str, seed: &str, player: u32, players: u32) -> String {
    eopdeal::player_link(base, seed, player as usize, players as usize)
}

#[wasm_bindgen]
pub fn sanitize(input: &str) -> String {
    eopdeal::sanitize_input(input)
}

#[derive(Serialize)]
struct JsCard {
    id: String,
    suit: char,
    suit_name: &'static str,
    value: &'static str,
    display_name: String,
    filename: String,
}

impl From<&Card> for JsCard {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id(),
            suit: card.category_code(),
            suit_name: card.category_name(),
            value: card.rank_symbol(),
            display_name: card.display_name(),
            filename: card.filename(),
        }
    }
}

#[derive(Serialize)]
struct JsHand {
    player: u32,
    cards: Vec<JsCard>,
}

impl From<&Hand> for JsHand {
    fn from(hand: &Hand) -> Self {
        Self {
            player: hand.player() as u32,
            cards: hand.cards().iter().map(JsCard::from).collect(),
        }
    }
}

#[derive(Serialize)]
struct JsGroup {
    suit: char,
    suit_name: &'static str,
    cards: Vec<JsCard>,
}

impl From<HostGroup> for JsGroup {
    fn from(group: HostGroup) -> Self {
        Self {
            suit: group.category.code(),
            suit_name: group.category.name(),
            cards: group.cards.iter().map(JsCard::from).collect(),
        }
    }
}

fn options_for(policy: Option<&str>) -> Result<DealOptions, JsValue> {
    let policy = match policy {
        None => DistributionPolicy::default(),
        Some(name) => DistributionPolicy::from_name(name)
            .ok_or_else(|| JsValue::from_str(&format!("unknown policy `{name}`")))?,
    };
    Ok(DealOptions::default().with_policy(policy))
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
