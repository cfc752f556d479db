/// Prints only when the user asked for detail.
#[macro_export]
macro_rules! verbose {
    ($opts:expr, $($arg:tt)*) => {
        if $opts.verbose {
            println!($($arg)*);
        }
    };
}

/// Prints actions which change the filesystem. A noop run always shows them, since
/// showing them is all it does.
#[macro_export]
macro_rules! announce {
    ($opts:expr, $($arg:tt)*) => {
        if $opts.verbose || $opts.noop {
            println!($($arg)*);
        }
    };
}
