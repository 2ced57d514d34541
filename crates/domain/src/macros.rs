//! Macro for implementing Display for status enums
//!
//! Status enums that show up in logs share one canonical lowercase string
//! mapping through this macro.
//!
//! # Example
//!
//! ```rust
//! use salesdigest_domain::impl_domain_status_display;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum FetchState {
//!     Pending,
//!     Done,
//! }
//!
//! impl_domain_status_display!(FetchState {
//!     Pending => "pending",
//!     Done => "done",
//! });
//!
//! assert_eq!(FetchState::Done.to_string(), "done");
//! assert_eq!(FetchState::Pending.as_str(), "pending");
//! ```

/// Implements `as_str` and Display for status enums
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their lowercase string
///   representations
#[macro_export]
macro_rules! impl_domain_status_display {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Canonical lowercase name.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum SendState {
        Queued,
        Sent,
        Rejected,
    }

    impl_domain_status_display!(SendState {
        Queued => "queued",
        Sent => "sent",
        Rejected => "rejected",
    });

    #[test]
    fn display_uses_canonical_lowercase() {
        assert_eq!(SendState::Queued.to_string(), "queued");
        assert_eq!(SendState::Rejected.to_string(), "rejected");
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format!("[{}]", SendState::Sent), "[sent]");
        assert_eq!(SendState::Sent.as_str(), "sent");
    }
}
