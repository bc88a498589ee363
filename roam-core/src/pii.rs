use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A wrapper for sensitive contact data that masks its value in Debug output
/// while serializing the real value for API responses and storage.
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct Masked<T>(pub T);

impl<T: fmt::Display> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T: fmt::Display> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Masking applies to log macros like tracing::info!("{:?}", booking);
        // wire and storage forms carry the real value.
        self.0.serialize(serializer)
    }
}

impl<T> Masked<T> {
    pub fn into_inner(self) -> T {
        self.0
    }

    pub fn inner(&self) -> &T {
        &self.0
    }
}

impl<T> From<T> for Masked<T> {
    fn from(value: T) -> Self {
        Masked(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_output_is_masked() {
        let email = Masked("guest@example.com".to_string());
        assert_eq!(format!("{:?}", email), "********");
        assert_eq!(email.inner(), "guest@example.com");
    }

    #[test]
    fn test_serialization_keeps_value() {
        let phone = Masked("+385911234567".to_string());
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"+385911234567\"");
    }
}
