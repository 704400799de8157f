use super::kinds::{CodeFence, FenceKind};

#[derive(Debug)]
enum LeafState<'a> {
    None,
    Text { lines: Vec<&'a str> },
    Fence { kind: FenceKind, lines: Vec<&'a str> },
}

/// Groups document lines into blocks.
///
/// Blank lines end a block, except inside a fenced code block, which runs
/// until its closing fence (or the end of input).
pub struct BlockBuilder<'a> {
    leaf: LeafState<'a>,
    out: Vec<String>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, line: &'a str) {
        if let LeafState::Fence { kind, lines } = &mut self.leaf {
            lines.push(line);
            if CodeFence::closes(*kind, line) {
                self.flush();
            }
            return;
        }

        if line.trim().is_empty() {
            self.flush();
            return;
        }

        if let Some(kind) = CodeFence::opens(line) {
            self.flush();
            self.leaf = LeafState::Fence {
                kind,
                lines: vec![line],
            };
            return;
        }

        match &mut self.leaf {
            LeafState::Text { lines } => lines.push(line),
            _ => self.leaf = LeafState::Text { lines: vec![line] },
        }
    }

    pub fn finish(mut self) -> Vec<String> {
        // EOF flush, unterminated fences included
        self.flush();
        self.out
    }

    fn flush(&mut self) {
        let lines = match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::None => return,
            LeafState::Text { lines } | LeafState::Fence { lines, .. } => lines,
        };
        let block = lines.join("\n");
        let block = block.trim();
        if !block.is_empty() {
            self.out.push(block.to_string());
        }
    }
}

impl Default for BlockBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits a Markdown document into trimmed, non-empty blocks.
pub fn markdown_to_blocks(markdown: &str) -> Vec<String> {
    let mut builder = BlockBuilder::new();
    for line in markdown.lines() {
        builder.push(line);
    }
    builder.finish()
}
