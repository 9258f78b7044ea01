#[cfg(test)]
use std::collections::HashMap;

/// Trait for providing environment variable access
///
/// Lets settings be loaded from an injected source so tests do not have to
/// mutate the process-global environment.
pub trait EnvironmentProvider {
    fn get_var(&self, key: &str) -> Option<String>;

    /// Like `get_var`, but treats a value that is empty after trimming as unset
    fn get_non_empty(&self, key: &str) -> Option<String> {
        self.get_var(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

/// Production environment provider that reads from system environment
pub struct SystemEnvironment;

impl EnvironmentProvider for SystemEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Test environment provider with configurable variables
#[cfg(test)]
pub struct MockEnvironment {
    vars: HashMap<String, String>,
}

#[cfg(test)]
impl MockEnvironment {
    pub fn empty() -> Self {
        Self {
            vars: HashMap::new(),
        }
    }

    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_vars(mut self, vars: &[(&str, &str)]) -> Self {
        for (key, value) in vars {
            self.vars.insert(key.to_string(), value.to_string());
        }
        self
    }
}

#[cfg(test)]
impl EnvironmentProvider for MockEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_environment_provider() {
        let provider = MockEnvironment::empty()
            .with_var("DB_HOST", "localhost")
            .with_var("DB_PORT", "5432");

        assert_eq!(provider.get_var("DB_HOST"), Some("localhost".to_string()));
        assert_eq!(provider.get_var("DB_PORT"), Some("5432".to_string()));
        assert_eq!(provider.get_var("DB_NAME"), None);
    }

    #[test]
    fn test_get_non_empty_treats_blank_as_unset() {
        let provider = MockEnvironment::empty().with_vars(&[
            ("BLANK", "   "),
            ("EMPTY", ""),
            ("PADDED", "  value "),
        ]);

        assert_eq!(provider.get_non_empty("BLANK"), None);
        assert_eq!(provider.get_non_empty("EMPTY"), None);
        assert_eq!(provider.get_non_empty("MISSING"), None);
        assert_eq!(provider.get_non_empty("PADDED"), Some("value".to_string()));
    }

    #[test]
    fn test_system_environment_reads_missing_var_as_none() {
        let provider = SystemEnvironment;
        assert_eq!(provider.get_var("LOYALTY_BACKEND_UNSET_VAR_98765"), None);
    }
}
