//! Macro for implementing Display and FromStr for wire-name enums
//!
//! Several enums travel over the wire as lowercase identifiers (HTTP verbs,
//! invoice message actions). This macro provides both conversions from a
//! single mapping, with case-insensitive parsing.
//!
//! # Example
//!
//! ```rust
//! use harvest_domain::impl_wire_name_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Toggle {
//!     On,
//!     Off,
//! }
//!
//! impl_wire_name_conversions!(Toggle {
//!     On => "on",
//!     Off => "off",
//! });
//!
//! assert_eq!(Toggle::On.to_string(), "on");
//! assert_eq!("OFF".parse::<Toggle>().unwrap(), Toggle::Off);
//! ```

/// Implements Display and FromStr for an enum with lowercase wire names.
///
/// `$str` literals must be lowercase; parsing lowercases its input first.
#[macro_export]
macro_rules! impl_wire_name_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl ::std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl ::std::str::FromStr for $enum_name {
            type Err = ::std::string::String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => ::std::result::Result::Ok(Self::$variant),)+
                    _ => ::std::result::Result::Err(::std::format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
