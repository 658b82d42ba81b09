use hashbrown::{hash_map::Entry, HashMap};
use tracing::{debug, trace};

/// Normalizes a leading `--` to `-`. Anything else is returned untouched.
pub fn normalize(token: &str) -> &str {
    if token.starts_with("--") {
        &token[1..]
    } else {
        token
    }
}

/// Splits a single token into its flag key and value.
///
/// Returns `None` for anything that isn't a well-formed flag: non-dashed words,
/// a bare `-`/`--`, an empty name (`-=x`), or a name that still starts with a
/// dash after normalization (`---x`). A flag without `=` carries an empty value.
pub fn split_flag(token: &str) -> Option<(&str, &str)> {
    let token = normalize(token);
    let name = token.strip_prefix('-')?;
    let (name, value) = name.split_once('=').unwrap_or((name, ""));
    if name.is_empty() || name.starts_with('-') {
        return None;
    }
    Some((&token[..name.len() + 1], value))
}

pub fn is_flag(token: &str) -> bool {
    token.starts_with('-')
}

pub fn tokenize(raw: &[String]) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for token in raw {
        let Some((key, value)) = split_flag(token) else {
            trace!(token = %token, "skipping non-flag token");
            continue;
        };
        match map.entry(key.to_string()) {
            Entry::Occupied(_) => trace!(key, "ignoring repeated flag"),
            Entry::Vacant(slot) => {
                slot.insert(value.to_string());
            }
        }
    }
    debug!(tokens = raw.len(), flags = map.len(), "tokenized arguments");
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_double_dash() {
        assert_eq!(normalize("--NTC"), "-NTC");
        assert_eq!(normalize("-NTC"), "-NTC");
        assert_eq!(normalize("NTC"), "NTC");
        assert_eq!(normalize("---NTC"), "--NTC");
    }

    #[test]
    fn test_split_flag() {
        assert_eq!(split_flag("-NTC"), Some(("-NTC", "")));
        assert_eq!(split_flag("--NTC=11"), Some(("-NTC", "11")));
        assert_eq!(split_flag("-NTC="), Some(("-NTC", "")));
        assert_eq!(split_flag("-url=a=b"), Some(("-url", "a=b")));
    }

    #[test]
    fn test_split_flag_rejects_malformed() {
        for token in ["NTC", "", "-", "--", "-=1", "--=1", "---NTC", "NTC=1"] {
            assert_eq!(split_flag(token), None, "token {token:?}");
        }
    }

    #[test]
    fn test_first_occurrence_wins() {
        let map = tokenize(&raw(&["-NTC=1", "--NTC=2", "-NTC"]));
        assert_eq!(map.len(), 1);
        assert_eq!(map["-NTC"], "1");
    }

    #[test]
    fn test_non_flags_are_ignored() {
        let map = tokenize(&raw(&["run", "-v", "file.txt", "-"]));
        assert_eq!(map.len(), 1);
        assert_eq!(map["-v"], "");
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let map = tokenize(&raw(&["-ntc=1", "-NTC=2"]));
        assert_eq!(map["-ntc"], "1");
        assert_eq!(map["-NTC"], "2");
    }
}
