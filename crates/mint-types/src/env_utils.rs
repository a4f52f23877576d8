//! Environment variable parsing and home directory resolution.

use std::path::PathBuf;
use std::str::FromStr;

/// Parse an environment variable into a type that implements `FromStr`.
///
/// Returns `None` if the variable is not set or cannot be parsed.
pub fn env_var<T: FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

/// Parse an environment variable with a default value.
///
/// # Example
///
/// ```
/// use mint_types::env_utils::env_var_or;
///
/// let ceiling: u32 = env_var_or("MINT_PUBLIC_CEILING", 5);
/// ```
pub fn env_var_or<T: FromStr>(key: &str, default: T) -> T {
    env_var(key).unwrap_or(default)
}

/// Check if an environment variable is set to a truthy value.
///
/// Returns `true` if the variable is set to "1", "true", "yes", or "on"
/// (case-insensitive).
pub fn env_bool(key: &str) -> bool {
    std::env::var(key)
        .ok()
        .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}

/// The console's durable state directory.
///
/// `MINT_CONSOLE_HOME` overrides the default of `~/.mint-console`.
pub fn console_home() -> PathBuf {
    std::env::var("MINT_CONSOLE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".mint-console")
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_var_parsing() {
        std::env::set_var("MINT_TEST_U32", "7");
        let val: Option<u32> = env_var("MINT_TEST_U32");
        assert_eq!(val, Some(7));

        let missing: Option<u32> = env_var("MINT_NONEXISTENT_VAR_1");
        assert_eq!(missing, None);

        std::env::remove_var("MINT_TEST_U32");
    }

    #[test]
    fn test_env_var_or() {
        let default_val: u32 = env_var_or("MINT_NONEXISTENT_VAR_2", 5);
        assert_eq!(default_val, 5);
    }

    #[test]
    fn test_env_bool() {
        std::env::set_var("MINT_TEST_BOOL", "yes");
        assert!(env_bool("MINT_TEST_BOOL"));
        std::env::set_var("MINT_TEST_BOOL", "false");
        assert!(!env_bool("MINT_TEST_BOOL"));
        assert!(!env_bool("MINT_NONEXISTENT_VAR_3"));
        std::env::remove_var("MINT_TEST_BOOL");
    }

    #[test]
    fn test_console_home_override() {
        std::env::set_var("MINT_CONSOLE_HOME", "/tmp/mint-console-test");
        assert_eq!(console_home(), PathBuf::from("/tmp/mint-console-test"));
        std::env::remove_var("MINT_CONSOLE_HOME");
    }
}
