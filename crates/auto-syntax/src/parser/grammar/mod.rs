//! Grammar productions for the Auto language.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//! Statements are separated by `;` or a line break, list items by `,` or a line break.

mod control;
mod expressions;
mod items;
mod lists;
mod strings;
