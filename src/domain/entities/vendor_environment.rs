use std::fmt;

/// The two environments Apple runs the verifyReceipt service in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VendorEnvironment {
    /// Receipts for purchases made through the live App Store.
    Production,
    /// Receipts for purchases made by sandbox testers, TestFlight or Xcode.
    Sandbox,
}

impl VendorEnvironment {
    pub fn as_str(&self) -> &'static str {
        match self {
            VendorEnvironment::Production => "production",
            VendorEnvironment::Sandbox => "sandbox",
        }
    }
}

impl fmt::Display for VendorEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
