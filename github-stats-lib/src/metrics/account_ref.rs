use compact_str::CompactString;
use core::fmt::{Display, Formatter};
use ohno::app_err;

/// The account a collection run is scoped to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountRef {
    login: CompactString,
}

impl AccountRef {
    /// Create a reference to `login`, rejecting blank names.
    pub fn new(login: impl AsRef<str>) -> crate::Result<Self> {
        let login = login.as_ref().trim();
        if login.is_empty() {
            return Err(app_err!("account name must not be empty"));
        }

        Ok(Self { login: login.into() })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.login
    }
}

impl Display for AccountRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_whitespace() {
        let account = AccountRef::new("  octocat ").unwrap();
        assert_eq!(account.as_str(), "octocat");
        assert_eq!(account.to_string(), "octocat");
    }

    #[test]
    fn test_new_rejects_empty() {
        let _ = AccountRef::new("").unwrap_err();
        let _ = AccountRef::new("   ").unwrap_err();
    }
}
