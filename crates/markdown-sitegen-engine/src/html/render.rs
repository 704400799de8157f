use super::{
    error::StructureError,
    node::{Attributes, HtmlNode, LeafNode, ParentNode},
};

/// Serializes `node` into an HTML fragment.
///
/// # Errors
/// [`StructureError`] for a tagged leaf without a value, or a parent without
/// a tag or children, anywhere in the tree.
pub fn render(node: &HtmlNode) -> Result<String, StructureError> {
    node.to_html()
}

impl HtmlNode {
    /// See [`render`].
    pub fn to_html(&self) -> Result<String, StructureError> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<(), StructureError> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.write_html(out),
            HtmlNode::Parent(parent) => parent.write_html(out),
        }
    }
}

impl LeafNode {
    fn write_html(&self, out: &mut String) -> Result<(), StructureError> {
        let value = self.value.as_deref().ok_or(StructureError::NoValue)?;
        match self.tag.as_deref() {
            None => out.push_str(value),
            Some(tag) => {
                open_tag(out, tag, &self.attributes);
                out.push_str(value);
                close_tag(out, tag);
            }
        }
        Ok(())
    }
}

impl ParentNode {
    fn write_html(&self, out: &mut String) -> Result<(), StructureError> {
        let tag = self.tag.as_deref().ok_or(StructureError::NoTag)?;
        let children = self.children.as_ref().ok_or(StructureError::NoChildren)?;

        open_tag(out, tag, &self.attributes);
        for child in children {
            child.write_html(out)?;
        }
        close_tag(out, tag);
        Ok(())
    }
}

/// ` key="value"` for each attribute, in insertion order.
pub fn attributes_to_html(attributes: &Attributes) -> String {
    let mut out = String::new();
    write_attributes(&mut out, attributes);
    out
}

fn write_attributes(out: &mut String, attributes: &Attributes) {
    for (key, value) in attributes {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}

fn open_tag(out: &mut String, tag: &str, attributes: &Attributes) {
    out.push('<');
    out.push_str(tag);
    write_attributes(out, attributes);
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
