//#![deny(missing_docs, rust_2018_idioms, unused, unused_import_braces, unused_lifetimes, unused_qualifications, warnings)]

//! Small conveniences: cycling through the members of an enum, and emptiness checks for strings.
//!
//! ```
//! use {
//!     enum_iterator::IntoEnumIterator,
//!     corekit::Cycle as _,
//! };
//!
//! #[derive(Debug, Clone, Copy, IntoEnumIterator, PartialEq)]
//! enum Light { Green, Yellow, Red }
//!
//! assert_eq!(Light::Green.next(), Light::Yellow);
//! assert_eq!(Light::Red.next(), Light::Green);
//! ```

pub mod cycle;
pub mod error;
pub mod paths;
pub mod phase;
pub mod strings;

pub use crate::{
    cycle::{
        Cycle,
        Enumerable,
        Orbit,
    },
    error::{
        Error,
        UncommonError,
    },
    strings::{
        OptionStrExt,
        StrExt,
    },
};
