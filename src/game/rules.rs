/// Which destinations a moving-phase `move` may target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Movement {
    /// Any empty cell on the board.
    #[default]
    Anywhere,
    /// One of the eight neighbouring cells (row, column or diagonal step).
    Adjacent,
}

impl Movement {
    /// Whether a piece may travel from `from` to `to` under this rule.
    /// Bounds and occupancy are checked separately by the engine.
    pub fn allows(self, from: (usize, usize), to: (usize, usize)) -> bool {
        match self {
            Movement::Anywhere => true,
            Movement::Adjacent => {
                let dr = from.0.abs_diff(to.0);
                let dc = from.1.abs_diff(to.1);
                dr.max(dc) == 1
            }
        }
    }
}

/// Rule variants, loadable from the `[rules]` table of the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub movement: Movement,
}
