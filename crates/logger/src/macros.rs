//! Logging macros that forward to the default logger

/// Log at an explicit level through the default logger
#[macro_export]
macro_rules! log {
    ($level:expr, $($arg:tt)+) => {
        $crate::log($level, ::std::format!($($arg)+))
    };
}

/// Log a fatal error through the default logger
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Fatal, $($arg)+)
    };
}

/// Log an error through the default logger
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Error, $($arg)+)
    };
}

/// Log a warning through the default logger
#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Warn, $($arg)+)
    };
}

/// Log info through the default logger
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Info, $($arg)+)
    };
}

/// Log debug through the default logger
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Debug, $($arg)+)
    };
}

/// Log trace through the default logger
#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Trace, $($arg)+)
    };
}
