use crate::args::ParsedArgs;
use once_cell::sync::Lazy;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

static ARGS: Lazy<RwLock<Arc<ParsedArgs>>> = Lazy::new(RwLock::default);

/// Parses a full argv (`argv[0]` is the program name) and replaces the process-wide arguments.
pub fn parse_parameters<I, S>(argv: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    install(ParsedArgs::from_argv(argv));
}

pub fn parse_env() {
    parse_parameters(std::env::args());
}

/// Publishes an already parsed set of arguments.
pub fn install(args: ParsedArgs) {
    debug!(flags = args.len(), raw = args.raw().len(), "installing arguments");
    let args = Arc::new(args);
    *ARGS.write().unwrap_or_else(PoisonError::into_inner) = args;
}

/// Snapshot of the current arguments. Later parses don't affect it.
pub fn current() -> Arc<ParsedArgs> {
    ARGS.read().unwrap_or_else(PoisonError::into_inner).clone()
}

pub fn is_arg_set(key: &str) -> bool {
    current().is_set(key)
}

pub fn get_bool_arg(key: &str, default: bool) -> bool {
    current().get_bool_or(key, default)
}

pub fn get_arg(key: &str, default: &str) -> String {
    current().get_string_or(key, default).to_string()
}

pub fn get_int_arg(key: &str, default: i64) -> i64 {
    current().get_int(key, default)
}

pub fn soft_set_arg(key: &str, value: &str) -> bool {
    let mut args = ARGS.write().unwrap_or_else(PoisonError::into_inner);
    Arc::make_mut(&mut *args).soft_set(key, value)
}

pub fn soft_set_bool_arg(key: &str, value: bool) -> bool {
    let mut args = ARGS.write().unwrap_or_else(PoisonError::into_inner);
    Arc::make_mut(&mut *args).soft_set_bool(key, value)
}
