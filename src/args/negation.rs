use super::accessors::is_truthy;
use hashbrown::HashMap;
use tracing::debug;

const NEGATION_PREFIX: &str = "-no";

/// Maps `-noNAME` to `-NAME`. `None` when the key isn't a negation, or when
/// `NAME` is empty or starts with a dash.
pub fn paired_key(key: &str) -> Option<String> {
    key.strip_prefix(NEGATION_PREFIX)
        .filter(|name| !name.is_empty() && !name.starts_with('-'))
        .map(|name| format!("-{name}"))
}

/// Adds the implied `-NAME` entry for every explicit `-noNAME` flag.
///
/// Explicit entries are never touched, whichever order they were given in.
/// Only keys present before this call drive synthesis.
pub fn resolve(map: &mut HashMap<String, String>) {
    let implied: Vec<(String, &'static str)> = map
        .iter()
        .filter_map(|(key, value)| {
            let paired = paired_key(key)?;
            if map.contains_key(&paired) {
                debug!(negation = %key, key = %paired, "explicit flag overrides negation");
                return None;
            }
            Some((paired, if is_truthy(value) { "0" } else { "1" }))
        })
        .collect();

    for (key, value) in implied {
        debug!(key = %key, value, "implied by negation");
        map.insert(key, value.to_string());
    }
}
