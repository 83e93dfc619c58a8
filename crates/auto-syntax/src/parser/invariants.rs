//! Parser bug detectors. Excluded from coverage: they only fire on grammar bugs.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::core::Parser;
use super::cst::SyntaxKind;

impl Parser<'_> {
    /// Panics when the grammar keeps looking ahead without consuming anything.
    #[inline]
    pub(super) fn guard_lookahead(&self) {
        let left = self.lookahead_left.get();
        assert!(left > 0, "parser made no progress within its lookahead budget");
        self.lookahead_left.set(left - 1);
    }

    /// Dispatchers call productions only on their first token.
    #[inline]
    pub(super) fn assert_current(&mut self, expected: SyntaxKind) {
        let found = self.current();
        assert!(
            found == expected,
            "production entered on {:?}, it starts with {:?}",
            found,
            expected
        );
    }
}
