/// Emphasis delimiters.
///
/// `BOLD` must be split before `ITALIC`: splitting on `*` first would read
/// `**bold**` as two empty italic runs.
pub struct Emphasis;

impl Emphasis {
    pub const BOLD: &'static str = "**";
    pub const ITALIC: &'static str = "*";
}
