/// Code span inline type with owned delimiter constant.
///
/// Code spans are split after emphasis, so a code span containing `*` is
/// only safe when the asterisks are balanced.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that opens and closes a code span.
    pub const TICK: &'static str = "`";
}
