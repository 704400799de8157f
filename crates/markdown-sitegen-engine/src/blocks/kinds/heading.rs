/// ATX heading (`# Title` … `###### Title`).
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Returns the level and the text after the marker, if `block` opens
    /// with 1–6 `#` followed by a space.
    pub fn parse(block: &str) -> Option<(u8, &str)> {
        let level = block.chars().take_while(|&c| c == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        let text = block[level..].strip_prefix(' ')?;
        Some((level as u8, text))
    }
}
