use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Holder for PIN form fields that zeroes its memory on drop.
///
/// The PIN entered into the form lives in state for as long as the form
/// does; wrapping it keeps the digits out of logs and debug output and
/// wipes them once the field is cleared or the state is torn down.
#[derive(Default, Zeroize, ZeroizeOnDrop)]
pub struct SecureCredential {
    data: String,
}

impl SecureCredential {
    pub fn new(data: String) -> Self {
        Self { data }
    }

    /// Borrow the credential data.
    ///
    /// The returned slice points at memory that is zeroed on drop; do not
    /// store it beyond the lifetime of the credential.
    pub fn as_str(&self) -> &str {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Clone for SecureCredential {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }
}

impl From<String> for SecureCredential {
    fn from(data: String) -> Self {
        Self::new(data)
    }
}

impl From<&str> for SecureCredential {
    fn from(data: &str) -> Self {
        Self::new(data.to_string())
    }
}

impl fmt::Debug for SecureCredential {
    /// Debug implementation that doesn't expose the credential data.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureCredential")
            .field("len", &self.len())
            .field("data", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Display for SecureCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[SecureCredential: {} bytes]", self.len())
    }
}

impl PartialEq for SecureCredential {
    fn eq(&self, other: &Self) -> bool {
        // Length check first, then a byte comparison; not constant-time,
        // but never a plain string compare.
        if self.len() != other.len() {
            return false;
        }
        self.data.as_bytes() == other.data.as_bytes()
    }
}

impl Eq for SecureCredential {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_operations() {
        let credential = SecureCredential::new("2468".to_string());
        assert_eq!(credential.as_str(), "2468");
        assert_eq!(credential.len(), 4);
        assert!(!credential.is_empty());
    }

    #[test]
    fn empty_credential() {
        let credential = SecureCredential::default();
        assert!(credential.is_empty());
        assert_eq!(credential.len(), 0);
    }

    #[test]
    fn equality() {
        let a = SecureCredential::from("1111");
        let b = SecureCredential::from("1111");
        let c = SecureCredential::from("2222");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn debug_redacts_data() {
        let credential = SecureCredential::from("secret");
        let debug_str = format!("{:?}", credential);

        assert!(!debug_str.contains("secret"));
        assert!(debug_str.contains("REDACTED"));
    }

    #[test]
    fn display_hides_data() {
        let credential = SecureCredential::from("secret");
        let display_str = format!("{}", credential);

        assert!(!display_str.contains("secret"));
        assert!(display_str.contains("6 bytes"));
    }
}
