//! Pure data structures (DTOs) stored by the resource actors and passed between the
//! use-case services and their repositories.

/// Declares an opaque string identifier.
///
/// Ids minted by the actors look like `customer_1`; ids supplied by callers are taken
/// as-is.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Id generator for the owning actor: `<prefix>_1`, `<prefix>_2`, ...
            pub fn sequence() -> impl FnMut() -> Self + Send + 'static {
                let mut next: u64 = 0;
                move || {
                    next += 1;
                    Self(format!(concat!($prefix, "_{}"), next))
                }
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

pub mod customer;
pub mod order;
pub mod product;

pub use customer::*;
pub use order::*;
pub use product::*;
