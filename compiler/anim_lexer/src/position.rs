//! Line/column tracking over a source buffer.

use anim_ir::TokenPosition;

/// Walks the source forward, converting byte offsets into 1-based
/// positions. Columns count characters, not bytes.
///
/// Offsets must be requested in non-decreasing order; each byte is visited
/// once over the whole pass.
pub(crate) struct PositionTracker<'src> {
    source: &'src str,
    offset: usize,
    line: u32,
    column: u32,
}

impl<'src> PositionTracker<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        PositionTracker {
            source,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Advance to `target` and return the position of the character there.
    pub(crate) fn advance_to(&mut self, target: usize) -> TokenPosition {
        if target > self.offset {
            let skipped = self.source.get(self.offset..target).unwrap_or_default();
            for c in skipped.chars() {
                if c == '\n' {
                    self.line = self.line.saturating_add(1);
                    self.column = 1;
                } else {
                    self.column = self.column.saturating_add(1);
                }
            }
            self.offset = target;
        }
        TokenPosition::new(self.line, self.column)
    }
}
