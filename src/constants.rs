// Tick timing
pub const TICK_INTERVAL_MS: u64 = 100;

// Big/Small table
pub const STARTING_BALANCE: f64 = 500.0;
pub const PAYOUT_MULTIPLIER: f64 = 1.95; // Slightly under 2x for house edge
pub const BET_AMOUNTS: [f64; 8] = [10.0, 20.0, 30.0, 50.0, 100.0, 200.0, 300.0, 500.0];
pub const HISTORY_LIMIT: usize = 10;

// Roll choreography: one die face lands per interval, then a short pause
// before the round settles.
pub const DIE_REVEAL_TICKS: u32 = 10;
pub const RESULT_DELAY_TICKS: u32 = 10;

// Dice demo
pub const DICE_DEMO_COUNT: usize = 5;
pub const DICE_DEMO_STAGGER_TICKS: u32 = 3;
pub const DICE_DEMO_TUMBLE_TICKS: u32 = 10;

// Coin toss demo
pub const COIN_DEMO_COUNT: usize = 8;
pub const COIN_DEMO_STAGGER_TICKS: u32 = 2;
pub const COIN_DEMO_FLIP_TICKS: u32 = 8;

// Card reveal demo
pub const CARD_REVEAL_COUNT: usize = 12;
pub const CARD_REVEAL_TICKS: u32 = 5;

// Save system
pub const SAVE_VERSION_MAGIC: u64 = 0x5041524C4F555200; // "PARLOUR\0" in hex
