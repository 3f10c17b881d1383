//! Logging macros. Arguments are only formatted when the level is enabled.

#[macro_export]
macro_rules! vm_log {
    ($level:expr, $component:expr, $($arg:tt)*) => {{
        let level = $level;
        if $crate::debugger::should_log(level) {
            $crate::debugger::debugger::emit(level, $component, format_args!($($arg)*));
        }
    }};
}

#[macro_export]
macro_rules! vm_error {
    ($component:expr, $($arg:tt)*) => {
        $crate::vm_log!($crate::debugger::DebugLevel::Error, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! vm_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::vm_log!($crate::debugger::DebugLevel::Warn, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! vm_info {
    ($component:expr, $($arg:tt)*) => {
        $crate::vm_log!($crate::debugger::DebugLevel::Info, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! vm_debug {
    ($component:expr, $($arg:tt)*) => {
        $crate::vm_log!($crate::debugger::DebugLevel::Debug, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! vm_trace {
    ($component:expr, $($arg:tt)*) => {
        $crate::vm_log!($crate::debugger::DebugLevel::Trace, $component, $($arg)*)
    };
}

/// Runs `$body` as a named phase of the run timeline and yields its value.
#[macro_export]
macro_rules! vm_phase {
    ($name:expr, $body:block) => {{
        $crate::debugger::begin_phase($name);
        let result = $body;
        $crate::debugger::end_phase();
        result
    }};
}
