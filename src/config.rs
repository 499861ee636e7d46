pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;
