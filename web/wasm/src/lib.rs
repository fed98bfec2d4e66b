use memrs::{
    Card, Face, Game, ScoreReport, Settings, Store, StoreError, Symbol, Timer, TimerKind,
    Transition, TurnState,
};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

pub const CARD_BACK_IMAGE: &str = "images/back.png";
pub const CARD_BLANK_IMAGE: &str = "images/blank.png";

pub fn card_front_image(symbol: Symbol) -> String {
    format!("images/card_{}.png", u32::from(symbol.id()) + 1)
}

/// `window.localStorage`, or nothing when storage is disabled.
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        Self { storage }
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StoreError::WriteFailed)
    }
}

#[wasm_bindgen]
pub struct WasmGame {
    game: Game<LocalStore>,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Result<WasmGame, JsValue> {
        let game = Game::from_settings(Settings::new(LocalStore::new()), u64::from(seed))
            .map_err(js_err)?;
        Ok(Self { game })
    }

    /// Clicks a card. Returns `{ transition, timers }`; the page runs each
    /// timer with `setTimeout` and hands it back to `fire`.
    pub fn click(&self, index: u32) -> Result<JsValue, JsValue> {
        let mut timers = Vec::new();
        let transition = self.game.click(index as usize, &mut timers);
        to_js_value(&Step::new(transition, timers))
    }

    pub fn fire(&self, timer: JsValue) -> Result<JsValue, JsValue> {
        let timer: JsTimer = serde_wasm_bindgen::from_value(timer)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        let timer = Timer::try_from(timer).map_err(|err| JsValue::from_str(&err))?;
        let mut timers = Vec::new();
        let transition = self.game.fire(timer, &mut timers);
        to_js_value(&Step::new(transition, timers))
    }

    pub fn new_round(&self) -> Result<u32, JsValue> {
        self.game.new_round().map_err(js_err)
    }

    pub fn save_settings(&self, player_name: &str, card_count: u32) -> Result<u32, JsValue> {
        self.game
            .save_settings(player_name, card_count as usize)
            .map_err(js_err)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let stats = self.game.stats();
        let snapshot = Snapshot {
            round: self.game.round(),
            state: state_to_str(self.game.turn_state()),
            locked: self.game.is_locked(),
            player: self.game.player_name(),
            card_count: self.game.card_count().get() as u32,
            cards: self.game.cards().iter().map(JsCard::from).collect(),
            attempts: stats.attempts,
            correct: stats.correct,
            matched_pairs: stats.matched_pairs,
            best_score: self.game.best_score(),
            last_score: self.game.last_score().map(JsScore::from),
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    round: u32,
    state: &'static str,
    locked: bool,
    player: String,
    card_count: u32,
    cards: Vec<JsCard>,
    attempts: u32,
    correct: u32,
    matched_pairs: u32,
    best_score: u8,
    last_score: Option<JsScore>,
}

#[derive(Serialize)]
struct JsCard {
    index: u32,
    face: &'static str,
    image: String,
    matched: bool,
}

impl From<&Card> for JsCard {
    fn from(card: &Card) -> Self {
        let image = match card.face() {
            Face::Down => CARD_BACK_IMAGE.to_string(),
            Face::Up => card_front_image(card.symbol),
            Face::Cleared => CARD_BLANK_IMAGE.to_string(),
        };
        Self {
            index: card.index as u32,
            face: face_to_str(card.face()),
            image,
            matched: card.is_matched(),
        }
    }
}

#[derive(Serialize)]
struct JsScore {
    accuracy: u8,
    previous_best: u8,
    best: u8,
    new_best: bool,
}

impl From<ScoreReport> for JsScore {
    fn from(score: ScoreReport) -> Self {
        Self {
            accuracy: score.accuracy,
            previous_best: score.previous_best,
            best: score.best,
            new_best: score.is_new_best(),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct JsTimer {
    round: u32,
    kind: String,
    index: Option<u32>,
}

impl From<Timer> for JsTimer {
    fn from(timer: Timer) -> Self {
        let (kind, index) = match timer.kind {
            TimerKind::RevealDone { index } => ("reveal", Some(index as u32)),
            TimerKind::Settle => ("settle", None),
        };
        Self {
            round: timer.round,
            kind: kind.to_string(),
            index,
        }
    }
}

impl TryFrom<JsTimer> for Timer {
    type Error = String;

    fn try_from(timer: JsTimer) -> Result<Self, Self::Error> {
        let kind = match (timer.kind.as_str(), timer.index) {
            ("reveal", Some(index)) => TimerKind::RevealDone {
                index: index as usize,
            },
            ("settle", None) => TimerKind::Settle,
            (kind, index) => return Err(format!("unknown timer {kind:?} with index {index:?}")),
        };
        Ok(Self {
            round: timer.round,
            kind,
        })
    }
}

#[derive(Serialize)]
struct JsScheduled {
    delay: u32,
    timer: JsTimer,
}

#[derive(Serialize)]
struct Step {
    transition: JsTransition,
    timers: Vec<JsScheduled>,
}

impl Step {
    fn new(transition: Transition, timers: Vec<(u32, Timer)>) -> Self {
        Self {
            transition: JsTransition::from(transition),
            timers: timers
                .into_iter()
                .map(|(delay, timer)| JsScheduled {
                    delay,
                    timer: timer.into(),
                })
                .collect(),
        }
    }
}

#[derive(Serialize)]
struct JsTransition {
    kind: &'static str,
    cards: Vec<u32>,
    score: Option<JsScore>,
}

impl From<Transition> for JsTransition {
    fn from(transition: Transition) -> Self {
        let (kind, cards, score) = match transition {
            Transition::Ignored => ("ignored", Vec::new(), None),
            Transition::Revealing { index } => ("revealing", vec![index as u32], None),
            Transition::Selected { index } => ("selected", vec![index as u32], None),
            Transition::PairSelected { first, second } => {
                ("pair_selected", vec![first as u32, second as u32], None)
            }
            Transition::Matched { first, second } => {
                ("matched", vec![first as u32, second as u32], None)
            }
            Transition::Mismatched { first, second } => {
                ("mismatched", vec![first as u32, second as u32], None)
            }
            Transition::RoundComplete {
                first,
                second,
                score,
            } => (
                "round_complete",
                vec![first as u32, second as u32],
                Some(JsScore::from(score)),
            ),
        };
        Self { kind, cards, score }
    }
}

fn face_to_str(face: Face) -> &'static str {
    match face {
        Face::Down => "down",
        Face::Up => "up",
        Face::Cleared => "cleared",
    }
}

fn state_to_str(state: TurnState) -> &'static str {
    match state {
        TurnState::Idle => "Idle",
        TurnState::OneSelected => "OneSelected",
        TurnState::TwoSelected => "TwoSelected",
        TurnState::RoundComplete => "RoundComplete",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
