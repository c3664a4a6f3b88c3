use tilepath_core::Movement;

/// Construction-time settings of a [`GreedyEngine`](crate::GreedyEngine).
///
/// The grid dimensions fix the coordinate space for the engine's lifetime;
/// every internal buffer is sized from them once.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    pub num_cols: u32,
    pub num_rows: u32,
    /// Default maximum number of steps in a returned route. `None` means
    /// the search only stops at the destination or when the frontier runs
    /// dry.
    #[cfg_attr(feature = "serde", serde(default))]
    pub distance_limit: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub movement: Movement,
}

impl EngineConfig {
    /// Config for a `num_cols` x `num_rows` grid with 8-way movement and no
    /// distance limit.
    pub fn new(num_cols: u32, num_rows: u32) -> Self {
        Self {
            num_cols,
            num_rows,
            distance_limit: None,
            movement: Movement::default(),
        }
    }

    pub fn with_distance_limit(mut self, limit: u32) -> Self {
        self.distance_limit = Some(limit);
        self
    }

    pub fn with_movement(mut self, movement: Movement) -> Self {
        self.movement = movement;
        self
    }
}
