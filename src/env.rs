/// Snapshot of environment variables, captured once and handed to the
/// commands that consult them (`which`, `shell`, `whoami`, `env`).
///
/// Commands never read the process environment directly; tests construct a
/// snapshot with [`Environment::from_pairs`] and exercise them without
/// touching process globals. Pairs keep the order they were captured in,
/// which is the order the `-e` listing prints.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: Vec<(String, String)>,
}

impl Environment {
    /// Capture the current process environment.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Build a snapshot from explicit pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            vars: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Value of `name`, if set. First occurrence wins, like `getenv`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// All pairs in captured order.
    pub fn vars(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_first_occurrence() {
        let env = Environment::from_pairs(&[("PATH", "/bin"), ("PATH", "/usr/bin")]);
        assert_eq!(env.get("PATH"), Some("/bin"));
    }

    #[test]
    fn get_missing_is_none() {
        let env = Environment::from_pairs(&[("USER", "alice")]);
        assert_eq!(env.get("SHELL"), None);
    }

    #[test]
    fn vars_preserve_capture_order() {
        let env = Environment::from_pairs(&[("B", "2"), ("A", "1"), ("C", "3")]);
        let keys: Vec<&str> = env.vars().map(|(k, _)| k).collect();
        assert_eq!(keys, ["B", "A", "C"]);
    }

    #[test]
    fn from_process_sees_real_variables() {
        // PATH is set in any environment cargo runs tests under.
        let env = Environment::from_process();
        assert!(env.get("PATH").is_some());
    }
}
