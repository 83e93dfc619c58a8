//! C entry point. Declared in `bindings/c/tree_sitter/auto.h`:
//!
//! ```c
//! const TSLanguage *tree_sitter_auto(void);
//! ```
//!
//! `TSLanguage` is opaque to C; the pointer is only ever handed back to Rust.

use crate::language::{Language, language};

/// Returns the grammar descriptor.
///
/// Never null, the same address on every call, valid for the lifetime of the
/// program. The descriptor is immutable, so any thread may call this and share
/// the result.
#[unsafe(no_mangle)]
pub extern "C" fn tree_sitter_auto() -> *const Language {
    language()
}
