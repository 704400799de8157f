#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    pub fn delimiter(self) -> &'static str {
        match self {
            FenceKind::Backticks => CodeFence::BACKTICKS,
            FenceKind::Tildes => CodeFence::TILDES,
        }
    }

    fn marker(self) -> char {
        match self {
            FenceKind::Backticks => '`',
            FenceKind::Tildes => '~',
        }
    }
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    /// The fence a line starts with, if any.
    pub fn kind_of(line: &str) -> Option<FenceKind> {
        let t = line.trim_start();
        if t.starts_with(Self::BACKTICKS) {
            Some(FenceKind::Backticks)
        } else if t.starts_with(Self::TILDES) {
            Some(FenceKind::Tildes)
        } else {
            None
        }
    }

    /// The fence a line opens. A backtick fence's info string may not contain
    /// a backtick, so ```` ```ls``` ```` stays inline code.
    pub fn opens(line: &str) -> Option<FenceKind> {
        let kind = Self::kind_of(line)?;
        let info = Self::info_of(kind, line);
        (kind == FenceKind::Tildes || !info.contains('`')).then_some(kind)
    }

    /// A closing fence is a run of at least three fence characters with
    /// nothing else on the line.
    pub fn closes(kind: FenceKind, line: &str) -> bool {
        let t = line.trim();
        t.len() >= kind.delimiter().len() && t.chars().all(|c| c == kind.marker())
    }

    /// The fence a block opens with. The block may run to the end of input
    /// without a closer.
    pub fn fenced(block: &str) -> Option<FenceKind> {
        Self::opens(block.lines().next()?)
    }

    /// The info string after the opening fence (`rust` in ```` ```rust ````).
    pub fn info(block: &str) -> Option<&str> {
        let kind = Self::fenced(block)?;
        let info = Self::info_of(kind, block.lines().next()?);
        (!info.is_empty()).then_some(info)
    }

    /// Everything between the opener line and the closing fence, verbatim.
    /// Without a closer the body runs to the end of the block.
    pub fn body(block: &str) -> &str {
        let Some(kind) = Self::fenced(block) else {
            return block;
        };
        let rest = block.split_once('\n').map_or("", |(_opener, rest)| rest);
        match rest.lines().last() {
            Some(last) if Self::closes(kind, last) => rest.rfind('\n').map_or("", |i| &rest[..=i]),
            _ => rest,
        }
    }

    fn info_of(kind: FenceKind, opener: &str) -> &str {
        opener.trim_start().trim_start_matches(kind.marker()).trim()
    }
}
