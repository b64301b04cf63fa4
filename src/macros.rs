//! Logging shims.
//!
//! Forward to `tracing` on std hosts and to `defmt` on embedded targets.
//! With neither backend the arguments are still evaluated so call sites
//! stay warning-free. Only plain `{}` placeholders are used so the same
//! format string is valid for both backends.

macro_rules! info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "std")]
        tracing::info!($($arg)*);
        #[cfg(all(feature = "defmt", not(feature = "std")))]
        defmt::info!($($arg)*);
        #[cfg(not(any(feature = "std", feature = "defmt")))]
        let _ = core::format_args!($($arg)*);
    }};
}

macro_rules! warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "std")]
        tracing::warn!($($arg)*);
        #[cfg(all(feature = "defmt", not(feature = "std")))]
        defmt::warn!($($arg)*);
        #[cfg(not(any(feature = "std", feature = "defmt")))]
        let _ = core::format_args!($($arg)*);
    }};
}

macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "std")]
        tracing::debug!($($arg)*);
        #[cfg(all(feature = "defmt", not(feature = "std")))]
        defmt::debug!($($arg)*);
        #[cfg(not(any(feature = "std", feature = "defmt")))]
        let _ = core::format_args!($($arg)*);
    }};
}
