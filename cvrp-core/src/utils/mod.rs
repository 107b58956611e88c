//! A collection of various utility helpers.

mod comparison;
pub use self::comparison::*;

mod environment;
pub use self::environment::*;

mod error;
pub use self::error::*;

mod quota;
pub use self::quota::*;

mod timing;
pub use self::timing::*;

mod types;
pub use self::types::*;
