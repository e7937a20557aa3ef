// Logging macros. With the `logging` feature these forward to the `log`
// crate, otherwise they expand to nothing and their arguments are never
// evaluated.

macro_rules! debug {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            log::debug!($($tt)*);
        }
    };
}

macro_rules! trace {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            log::trace!($($tt)*);
        }
    };
}
