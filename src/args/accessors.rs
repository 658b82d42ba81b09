use super::{tokenizer::normalize, ParsedArgs};
use anyhow::{Context, Result};
use std::{borrow::Cow, num::ParseIntError};

/// `"0"` is the only falsy value.
pub fn is_truthy(value: &str) -> bool {
    value != "0"
}

pub fn try_parse_int(value: &str) -> Result<i64, ParseIntError> {
    value.trim().parse()
}

pub fn parse_int(value: &str) -> Option<i64> {
    try_parse_int(value).ok()
}

pub(crate) fn lookup_key(key: &str) -> Cow<'_, str> {
    let key = normalize(key);
    if key.starts_with('-') {
        Cow::Borrowed(key)
    } else {
        Cow::Owned(format!("-{key}"))
    }
}

impl ParsedArgs {
    fn value(&self, key: &str) -> Option<&str> {
        self.map.get(&*lookup_key(key)).map(String::as_str)
    }

    pub fn is_set(&self, key: &str) -> bool {
        self.value(key).is_some()
    }

    pub fn get_bool(&self, key: &str) -> bool {
        self.get_bool_or(key, false)
    }

    pub fn get_bool_or(&self, key: &str, default: bool) -> bool {
        self.value(key).map_or(default, is_truthy)
    }

    pub fn get_string(&self, key: &str) -> &str {
        self.get_string_or(key, "")
    }

    pub fn get_string_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.value(key).unwrap_or(default)
    }

    /// Reads a base-10 integer. A present but unparsable value reads as `0`,
    /// not as `default`.
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        match self.value(key) {
            Some(value) => parse_int(value).unwrap_or(0),
            None => default,
        }
    }

    /// Strict form of [`get_int`](Self::get_int) that reports unparsable values.
    pub fn try_get_int(&self, key: &str) -> Result<Option<i64>> {
        self.value(key)
            .map(|value| {
                try_parse_int(value)
                    .with_context(|| format!("invalid integer for {}: {value:?}", lookup_key(key)))
            })
            .transpose()
    }
}
