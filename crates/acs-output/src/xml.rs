//! Tree-to-XML serialization.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use tempfile::NamedTempFile;
use tracing::debug;

use acs_model::{Family, TreeNode};

/// Default root element name.
pub const DEFAULT_ROOT_NAME: &str = "ACSProfile";

/// Options for XML output.
#[derive(Debug, Clone)]
pub struct XmlOptions {
    /// Name of the document's root element.
    pub root_name: String,
    /// Emit `FamilyLabel` and member `Label` text elements.
    pub include_labels: bool,
    /// Emit member `Attributes` lists.
    pub include_attributes: bool,
    /// Indent with two spaces. Whitespace only; the logical content is
    /// identical either way.
    pub pretty: bool,
}

impl Default for XmlOptions {
    fn default() -> Self {
        Self {
            root_name: DEFAULT_ROOT_NAME.to_string(),
            include_labels: true,
            include_attributes: true,
            pretty: true,
        }
    }
}

/// Serialize the tree to `output_path`, atomically.
///
/// The document is written to a temporary file in the destination directory
/// and renamed over the target, so concurrent dumps to the same path never
/// interleave and readers never observe a partial document. Failure aborts
/// this call only; the in-memory tree is unaffected.
pub fn write_tree_xml(output_path: &Path, root: &TreeNode, options: &XmlOptions) -> Result<()> {
    ensure_parent_dir(output_path)?;
    let dir = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("create temporary file in {}", dir.display()))?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        write_tree(&mut writer, root, options)?;
        writer.flush().context("flush XML document")?;
    }
    tmp.persist(output_path)
        .with_context(|| format!("persist {}", output_path.display()))?;
    debug!(path = %output_path.display(), "wrote tree XML");
    Ok(())
}

/// Serialize the tree to any writer.
pub fn write_tree<W: Write>(writer: W, root: &TreeNode, options: &XmlOptions) -> Result<()> {
    let mut xml = if options.pretty {
        Writer::new_with_indent(writer, b' ', 2)
    } else {
        Writer::new(writer)
    };

    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    xml.write_event(Event::Start(BytesStart::new(options.root_name.as_str())))?;
    write_node(&mut xml, root, options)?;
    xml.write_event(Event::End(BytesEnd::new(options.root_name.as_str())))?;
    Ok(())
}

/// Child nodes first, then this node's families. Both maps are ordered, so
/// emission is lexicographic by token and by base with no re-sorting.
fn write_node<W: Write>(xml: &mut Writer<W>, node: &TreeNode, options: &XmlOptions) -> Result<()> {
    for (token, child) in &node.children {
        let mut element = BytesStart::new("Node");
        element.push_attribute(("name", token.as_str()));
        xml.write_event(Event::Start(element))?;
        write_node(xml, child, options)?;
        xml.write_event(Event::End(BytesEnd::new("Node")))?;
    }

    for family in node.families.values() {
        write_family(xml, family, options)?;
    }
    Ok(())
}

fn write_family<W: Write>(
    xml: &mut Writer<W>,
    family: &Family,
    options: &XmlOptions,
) -> Result<()> {
    let meta = &family.meta;
    let mut element = BytesStart::new("Family");
    element.push_attribute(("base", meta.base.as_str()));
    element.push_attribute(("group", meta.group.as_deref().unwrap_or("")));
    element.push_attribute(("concept", meta.concept.as_deref().unwrap_or("")));
    xml.write_event(Event::Start(element))?;

    if options.include_labels {
        write_text_element(xml, "FamilyLabel", meta.label.as_deref().unwrap_or(""))?;
    }

    for (measure, member) in &family.members {
        let mut element = BytesStart::new("Member");
        element.push_attribute(("measure", measure.as_str()));
        element.push_attribute(("var", member.var.as_str()));
        element.push_attribute(("predicateType", member.predicate_type.as_deref().unwrap_or("")));

        let label = member
            .label
            .as_deref()
            .filter(|label| options.include_labels && !label.is_empty());
        let attributes = (options.include_attributes && !member.attribute_codes.is_empty())
            .then_some(&member.attribute_codes);

        if label.is_none() && attributes.is_none() {
            xml.write_event(Event::Empty(element))?;
            continue;
        }

        xml.write_event(Event::Start(element))?;
        if let Some(label) = label {
            write_text_element(xml, "Label", label)?;
        }
        if let Some(codes) = attributes {
            xml.write_event(Event::Start(BytesStart::new("Attributes")))?;
            for code in codes {
                write_text_element(xml, "Attr", code)?;
            }
            xml.write_event(Event::End(BytesEnd::new("Attributes")))?;
        }
        xml.write_event(Event::End(BytesEnd::new("Member")))?;
    }

    xml.write_event(Event::End(BytesEnd::new("Family")))?;
    Ok(())
}

fn write_text_element<W: Write>(xml: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new(name)))?;
    xml.write_event(Event::Text(BytesText::new(text)))?;
    xml.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    Ok(())
}
