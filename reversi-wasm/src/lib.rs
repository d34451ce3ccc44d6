use reversi_engine::Engine;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmEngine {
    inner: Engine,
}

#[wasm_bindgen]
impl WasmEngine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: Engine::new(),
        }
    }

    // -- Game actions (delegate to Engine) --

    /// Forward a click on (row, col) as the human (Dark) move.
    /// Returns whether the move was accepted.
    pub fn handle_click(&mut self, row: u8, col: u8) -> bool {
        self.inner.handle_click((row, col))
    }

    /// One automated tick: play the first legal Light move in scan order.
    /// Returns whether a move was made. The host drives this from its timer
    /// and should stop ticking once `is_over()` reports true.
    pub fn auto_tick(&mut self) -> bool {
        self.inner.play_auto().is_some()
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    // -- State access --

    pub fn is_over(&self) -> bool {
        self.inner.is_over()
    }

    pub fn stage(&self) -> String {
        self.inner.stage().to_string()
    }

    pub fn outcome(&self) -> String {
        self.inner.outcome().to_string()
    }

    /// Flat row-major board view: 1 = Dark, -1 = Light, 0 = empty.
    pub fn board(&self) -> js_sys::Int8Array {
        let cells: Vec<i8> = self
            .inner
            .board()
            .cells()
            .iter()
            .map(|c| c.to_int())
            .collect();
        js_sys::Int8Array::from(cells.as_slice())
    }

    // -- JSON serialization (WASM boundary) --

    /// Legal cells for the current mover as a JSON array of [row, col] pairs.
    /// Empty once the game is over.
    pub fn legal_moves_json(&self) -> String {
        let moves = match self.inner.stage().mover() {
            Some(disc) => self.inner.board().legal_moves(disc),
            None => Vec::new(),
        };
        serde_json::to_string(&moves).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn game_state_json(&self) -> String {
        serde_json::to_string(&self.inner.game_state())
            .unwrap_or_else(|e| format!(r#"{{"error":"{}"}}"#, e))
    }
}

impl Default for WasmEngine {
    fn default() -> Self {
        Self::new()
    }
}
