// Compatibility module for std/no_std builds
// The value type and command layer only need strings and vectors from alloc

#[cfg(target_os = "none")]
extern crate alloc;

#[cfg(not(target_os = "none"))]
pub use std::{
    fmt,
    string::{String, ToString},
    vec::Vec,
};

#[cfg(target_os = "none")]
pub use self::alloc::{
    string::{String, ToString},
    vec::Vec,
};

#[cfg(target_os = "none")]
pub use core::fmt;
