use getarg::ParsedArgs;
use std::sync::{Mutex, MutexGuard, PoisonError};

static GLOBAL_ARGS: Mutex<()> = Mutex::new(());

/// Splits a command line on whitespace and prepends a dummy program name.
pub fn argv(line: &str) -> Vec<String> {
    std::iter::once("getarg-test")
        .chain(line.split_whitespace())
        .map(String::from)
        .collect()
}

#[allow(dead_code)]
pub fn reset_args(line: &str) -> ParsedArgs {
    ParsedArgs::from_argv(argv(line))
}

/// Serializes tests that touch the process-wide arguments.
#[allow(dead_code)]
pub fn lock_global() -> MutexGuard<'static, ()> {
    GLOBAL_ARGS.lock().unwrap_or_else(PoisonError::into_inner)
}
