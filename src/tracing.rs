//! Internal logging hook.
//!
//! With the `log` feature enabled, formatting decisions (which unit matched,
//! when a fallback path was taken) are reported at trace level under the
//! `readout` target. Without the feature the macro expands to nothing.

macro_rules! trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        ::log::trace!(target: "readout", $($arg)+);
    };
}

pub(crate) use trace;
