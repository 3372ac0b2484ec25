/// Sentinel reported in place of a count when input validation fails
pub const INPUT_ERROR: i128 = -1;
