// Turns a settings record back into the command line you would have typed
//
// Think of it as argument parsing in reverse: every flag value becomes one or
// more shell-safe tokens, in the order the settings were recorded.

const FLAG_PREFIX: &str = "--";

/// A single flag value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Flag takes a value but wasn't given one
    Absent,
    /// Present or not
    Flag(bool),
    /// Single value, `--flag=value`
    Text(String),
    /// Value-less flag repeated N times (`-vvv` style)
    Count(u32),
    /// Flag with a value, repeated once per element
    Repeated(Vec<String>),
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Flag(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Count(value)
    }
}

impl From<Vec<String>> for Value {
    fn from(value: Vec<String>) -> Self {
        Value::Repeated(value)
    }
}

impl From<Option<String>> for Value {
    fn from(value: Option<String>) -> Self {
        value.map_or(Value::Absent, Value::Text)
    }
}

/// Ordered flag-name -> value mapping
///
/// Keys come out in the order they were first set. Setting a key again
/// replaces its value but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    entries: Vec<(String, Value)>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, replacing any previous one for the same key
    ///
    /// `key` must not be empty. Flag names are always written by us, never by the user.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        debug_assert!(!key.is_empty(), "settings keys must not be empty");
        let value = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style `set`
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build the command line for `program_name` invoked with `settings`
///
/// The program name goes in as-is; every user-provided string is quoted.
pub fn serialize(program_name: &str, settings: &Settings) -> String {
    let mut line = vec![program_name.to_string()];

    for (key, value) in settings.iter() {
        if key.starts_with(FLAG_PREFIX) {
            push_flag(&mut line, key, value);
        } else {
            push_positional(&mut line, key, value);
        }
    }

    line.join(" ")
}

// Positional arguments: either a literal command word that is present or not,
// or a plain value
fn push_positional(line: &mut Vec<String>, key: &str, value: &Value) {
    match value {
        Value::Flag(true) => line.push(key.to_string()),
        Value::Text(text) if !text.is_empty() => line.push(quote(text)),
        _ => {}
    }
}

fn push_flag(line: &mut Vec<String>, key: &str, value: &Value) {
    match value {
        Value::Absent | Value::Flag(false) => {}
        Value::Flag(true) => line.push(key.to_string()),
        Value::Text(text) => line.push(format!("{}={}", key, quote(text))),
        Value::Count(times) => {
            line.extend((0..*times).map(|_| key.to_string()));
        }
        Value::Repeated(items) => {
            line.extend(items.iter().map(|item| format!("{}={}", key, quote(item))));
        }
    }
}

/// Quote a string so a POSIX shell reads it back unchanged
///
/// Strings made only of harmless characters are left alone so the output
/// stays readable. Everything else is single-quoted, with embedded single
/// quotes written as `'"'"'`.
pub fn quote(s: &str) -> String {
    if s.is_empty() {
        return "''".to_string();
    }

    if s.chars().all(is_shell_safe) {
        return s.to_string();
    }

    format!("'{}'", s.replace('\'', "'\"'\"'"))
}

fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || "_@%+=:,./-".contains(c)
}
