use std::fmt;

/// Base64-encoded App Store receipt, exactly as supplied by the client app.
///
/// The relay never looks inside it; it is forwarded to Apple verbatim.
#[derive(Clone, PartialEq, Eq)]
pub struct ReceiptBlob(pub String);

impl ReceiptBlob {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ReceiptBlob {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ReceiptBlob {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

// Receipts can be large and identify a customer, so keep them out of logs.
impl fmt::Debug for ReceiptBlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReceiptBlob({} bytes)", self.0.len())
    }
}
