//! Solution domain models.

mod checker;
pub use self::checker::check_fleet;

mod fleet;
pub use self::fleet::Fleet;

mod penalty;
pub use self::penalty::{Penalty, PenaltyTable};

mod tour;
pub use self::tour::{Stop, Tour};

mod vehicle;
pub use self::vehicle::Vehicle;
