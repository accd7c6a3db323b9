/// Emits a `trace`-level event under the `optr` target.
///
/// Expands to `tracing::trace!` when the `tracing` feature is enabled and to
/// nothing otherwise, so call sites carry no cost in default builds.
///
/// ```rust,ignore
/// trace_event!("allocated", ty = core::any::type_name::<T>());
/// ```
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($msg:literal $(, $key:ident = $val:expr)* $(,)?) => {
        ::tracing::trace!(target: "optr", $($key = $val,)* $msg)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($msg:literal $(, $key:ident = $val:expr)* $(,)?) => {};
}
