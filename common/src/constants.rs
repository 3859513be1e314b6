/// Side length of the square playing grid, in cells.
pub const GRID_SIZE: i16 = 20;

/// Fixed period of the movement tick in milliseconds.
pub const TICK_INTERVAL_MS: u32 = 100;

/// Points awarded for each piece of food eaten.
pub const FOOD_POINTS: u32 = 10;

/// Random draws attempted before food placement falls back to scanning
/// the grid for free cells.
pub const FOOD_PLACEMENT_ATTEMPTS: u32 = 1024;
