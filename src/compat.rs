//! Re-exports the allocating primitives from `std` or `alloc`, so the rest
//! of the crate can stay oblivious to the `std` feature.

#[cfg(feature = "std")]
mod imp {
    pub use std::borrow::Cow;
    pub use std::format;
    pub use std::string::{String, ToString};
    pub use std::vec::Vec;
}

#[cfg(not(feature = "std"))]
mod imp {
    pub use alloc::borrow::Cow;
    pub use alloc::format;
    pub use alloc::string::{String, ToString};
    pub use alloc::vec::Vec;
}

pub use imp::{Cow, String, ToString, Vec, format};
