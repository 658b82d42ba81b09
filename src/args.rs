pub mod accessors;
pub mod negation;
pub mod tokenizer;

use hashbrown::HashMap;

/// Arguments of one parse: the resolved flag map plus every raw token in order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedArgs {
    map: HashMap<String, String>,
    raw: Vec<String>,
}

impl ParsedArgs {
    /// Parses arguments that already exclude the program name.
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let raw: Vec<String> = args.into_iter().map(Into::into).collect();
        let mut map = tokenizer::tokenize(&raw);
        negation::resolve(&mut map);
        Self { map, raw }
    }

    /// Parses a full argv, dropping `argv[0]`.
    pub fn from_argv<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::parse(argv.into_iter().skip(1))
    }

    pub fn raw(&self) -> &[String] {
        &self.raw
    }

    pub fn positionals(&self) -> impl Iterator<Item = &str> {
        self.raw
            .iter()
            .map(String::as_str)
            .filter(|token| !tokenizer::is_flag(token))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Sets `key` only if it isn't already present. Returns whether it was set.
    pub fn soft_set(&mut self, key: &str, value: &str) -> bool {
        let key = accessors::lookup_key(key);
        match tokenizer::split_flag(&key) {
            Some((name, _)) if name.len() == key.len() => {}
            _ => return false,
        }
        if self.map.contains_key(&*key) {
            return false;
        }
        self.map.insert(key.into_owned(), value.to_string());
        true
    }

    pub fn soft_set_bool(&mut self, key: &str, value: bool) -> bool {
        self.soft_set(key, if value { "1" } else { "0" })
    }
}

