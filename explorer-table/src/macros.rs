#[cfg(feature = "tracing")]
macro_rules! ttrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "explorer_table", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! ttrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! tdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "explorer_table", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! tdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! twarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "explorer_table", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! twarn {
    ($($tt:tt)*) => {};
}
