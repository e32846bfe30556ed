//! Read-only access to environment variables.
//!
//! Detection never calls `std::env` directly. It asks an [`EnvLookup`], which
//! lets tests (and callers who already know what terminal they're talking to)
//! describe an environment without mutating the real process state.
//!
//! ## Examples
//!
//! ```
//! use termlink::{MapEnv, supports_hyperlinks_in};
//!
//! let kitty = MapEnv::from([("TERM", "xterm-kitty")]);
//! assert!(supports_hyperlinks_in(&kitty));
//!
//! let nothing = MapEnv::new();
//! assert!(!supports_hyperlinks_in(&nothing));
//! ```

use std::collections::HashMap;
use std::env;

/// A read-only key/value view of an environment.
pub trait EnvLookup {
    /// The value of `key`, or `None` when it isn't set.
    ///
    /// A variable that is set to the empty string returns `Some("")`.
    fn var(&self, key: &str) -> Option<String>;

    /// Whether `key` is set at all (even to an empty value).
    fn is_present(&self, key: &str) -> bool {
        self.var(key).is_some()
    }

    /// The value of `key` when it is set to something other than `""`.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key).filter(|v| !v.is_empty())
    }
}

impl<T: EnvLookup + ?Sized> EnvLookup for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// The live process environment.
///
/// Every lookup reads the environment afresh; nothing is cached, so a change
/// made between two detections is observed by the second one.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        // Non-UTF-8 values still count as "set"; the lossy text is only ever
        // compared against ASCII identifiers.
        env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }
}

/// An in-memory environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// An environment with no variables set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, returning the environment for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.vars.remove(key)
    }
}

impl EnvLookup for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_env_distinguishes_empty_from_missing() {
        let env = MapEnv::from([("WT_SESSION", "")]);

        assert_eq!(env.var("WT_SESSION"), Some(String::new()));
        assert!(env.is_present("WT_SESSION"));
        assert_eq!(env.non_empty("WT_SESSION"), None);

        assert_eq!(env.var("KONSOLE_VERSION"), None);
        assert!(!env.is_present("KONSOLE_VERSION"));
    }

    #[test]
    fn test_map_env_builder_and_mutation() {
        let mut env = MapEnv::new().with("TERM", "xterm-kitty");
        assert_eq!(env.non_empty("TERM").as_deref(), Some("xterm-kitty"));

        env.set("TERM", "dumb");
        assert_eq!(env.var("TERM").as_deref(), Some("dumb"));

        assert_eq!(env.remove("TERM").as_deref(), Some("dumb"));
        assert!(!env.is_present("TERM"));
    }

    #[test]
    fn test_lookup_through_reference() {
        let env = MapEnv::from([("DOMTERM", "1")]);
        let by_ref: &MapEnv = &env;
        assert_eq!(EnvLookup::var(&by_ref, "DOMTERM").as_deref(), Some("1"));
    }

    #[test]
    #[serial_test::serial]
    fn test_process_env_reads_live_values() {
        let key = "TERMLINK_PROCESS_ENV_PROBE";

        // SAFETY: Test runs serially, no concurrent env access
        unsafe { std::env::remove_var(key) };
        assert!(!ProcessEnv.is_present(key));

        // SAFETY: Test runs serially, no concurrent env access
        unsafe { std::env::set_var(key, "") };
        assert!(ProcessEnv.is_present(key));
        assert_eq!(ProcessEnv.non_empty(key), None);

        // SAFETY: Test runs serially, no concurrent env access
        unsafe { std::env::set_var(key, "value") };
        assert_eq!(ProcessEnv.var(key).as_deref(), Some("value"));

        // SAFETY: Test runs serially, no concurrent env access
        unsafe { std::env::remove_var(key) };
    }
}
