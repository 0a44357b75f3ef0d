use crate::state::DrawMode;

/// Which game the engine deals and enforces.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Variant {
    /// Eight face-up columns, free cells, any card on an empty column.
    #[default]
    #[strum(to_string = "freecell", serialize = "free_cell")]
    FreeCell,
    /// Seven staggered columns, stock and waste, Kings on empty columns.
    Klondike,
}

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub variant: Variant,
    /// Number of free cells (FreeCell only), clamped to `1..=MAX_FREE_CELLS`.
    pub free_cells: usize,
    /// Cards turned per stock draw (Klondike only).
    pub draw_mode: DrawMode,
}

impl GameConfig {
    // ===== compile-time constants =====
    pub const DECK_SIZE: usize = 52;
    pub const FOUNDATIONS: usize = 4;
    pub const FREECELL_COLUMNS: usize = 8;
    pub const KLONDIKE_COLUMNS: usize = 7;
    pub const MAX_FREE_CELLS: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_FREE_CELLS: usize = 4;

    pub fn new() -> Self {
        Self {
            variant: Variant::default(),
            free_cells: Self::DEFAULT_FREE_CELLS,
            draw_mode: DrawMode::default(),
        }
    }

    pub fn freecell() -> Self {
        Self::new()
    }

    pub fn klondike(draw_mode: DrawMode) -> Self {
        Self {
            variant: Variant::Klondike,
            draw_mode,
            ..Self::new()
        }
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_free_cells(mut self, free_cells: usize) -> Self {
        self.free_cells = free_cells.clamp(1, Self::MAX_FREE_CELLS);
        self
    }

    pub fn with_draw_mode(mut self, draw_mode: DrawMode) -> Self {
        self.draw_mode = draw_mode;
        self
    }

    /// Number of tableau columns dealt for the configured variant.
    pub const fn columns(&self) -> usize {
        match self.variant {
            Variant::FreeCell => Self::FREECELL_COLUMNS,
            Variant::Klondike => Self::KLONDIKE_COLUMNS,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
