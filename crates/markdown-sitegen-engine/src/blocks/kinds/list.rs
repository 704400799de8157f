/// `* item` / `- item` lists.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKERS: [&'static str; 2] = ["* ", "- "];

    /// The item text of `line`, if it starts with a bullet marker.
    pub fn item(line: &str) -> Option<&str> {
        Self::MARKERS
            .iter()
            .find_map(|marker| line.strip_prefix(marker))
    }
}

/// `1. item` lists. Numbering starts at one and must not skip.
pub struct OrderedList;

impl OrderedList {
    pub const SEPARATOR: &'static str = ". ";

    /// The item text of `line` if it is item number `n`.
    pub fn item(line: &str, n: usize) -> Option<&str> {
        line.strip_prefix(n.to_string().as_str())?
            .strip_prefix(Self::SEPARATOR)
    }
}
