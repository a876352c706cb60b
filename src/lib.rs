/// Log a debug message
/// It will only log if the feature "logging" is enabled
macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "logging")]
        log::debug!($($arg)*);
    };
}

/// Log a trace message
/// It will only log if the feature "logging" is enabled
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "logging")]
        log::trace!($($arg)*);
    };
}

mod error;
mod u256;

pub use error::{IndexError, ParseError};
pub use u256::U256;
