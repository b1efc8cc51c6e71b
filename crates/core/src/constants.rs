/// Key of the singleton rotation cursor row
pub const ROTATION_CURSOR_ID: &str = "SALES_ROTATION";

/// Bounded retry count when the rotation cursor advance loses a
/// compare-and-swap race
pub const MAX_ASSIGN_ATTEMPTS: u32 = 3;
