//! Command implementations.

use std::time::Duration;

use anyhow::{Context, Result};

use acs_catalog::{FileCatalogSource, HttpCatalogConfig, HttpCatalogSource};
use acs_output::{XmlOptions, write_tree_xml};
use acs_tree::ProfileTree;

use crate::cli::{
    AttributeArgs, BranchArgs, DumpArgs, FamilyArgs, GroupArgs, PreviewArgs, SourceArgs,
};

/// Build the tree from the selected catalog source. A local file wins over
/// the network endpoint; the API key falls back to `CENSUS_API_KEY` here at
/// the process edge, never inside the libraries.
fn load_tree(source: &SourceArgs) -> Result<ProfileTree> {
    let tree = if let Some(path) = &source.catalog_file {
        ProfileTree::from_source(&FileCatalogSource::new(path))?
    } else {
        let api_key = source
            .api_key
            .clone()
            .or_else(|| std::env::var("CENSUS_API_KEY").ok())
            .filter(|key| !key.is_empty());
        let config = HttpCatalogConfig {
            url: source.url.clone(),
            timeout: Duration::from_secs(source.timeout_secs),
            api_key,
        };
        let http = HttpCatalogSource::new(config)?;
        ProfileTree::from_source(&http)?
    };
    Ok(tree)
}

pub fn run_dump(args: &DumpArgs) -> Result<()> {
    let tree = load_tree(&args.source)?;
    let options = XmlOptions {
        root_name: args.root_name.clone(),
        include_labels: !args.no_labels,
        include_attributes: !args.no_attributes,
        pretty: !args.compact,
    };
    write_tree_xml(&args.output, tree.root(), &options)?;
    println!(
        "wrote {} ({} families)",
        args.output.display(),
        tree.family_count()
    );
    Ok(())
}

pub fn run_family(args: &FamilyArgs) -> Result<()> {
    let tree = load_tree(&args.source)?;
    match tree.family_by_code(&args.code) {
        Some(family) => {
            let json = serde_json::to_string_pretty(&**family).context("render family")?;
            println!("{json}");
        }
        None => println!("no family for code {}", args.code),
    }
    Ok(())
}

pub fn run_branch(args: &BranchArgs) -> Result<()> {
    let tree = load_tree(&args.source)?;
    let Some(node) = tree.subtree(args.path.as_str()) else {
        println!("no node at path {}", args.path);
        return Ok(());
    };

    if !node.children.is_empty() {
        println!("children:");
        for token in node.children.keys() {
            println!("  - {token}");
        }
    }
    if node.has_families() {
        println!("families:");
        for (base, family) in &node.families {
            let measures: Vec<&str> = family.measures().map(|m| m.as_str()).collect();
            println!("  {base}: {}", measures.join(", "));
        }
    }
    if node.children.is_empty() && !node.has_families() {
        println!("(empty node)");
    }
    Ok(())
}

pub fn run_group(args: &GroupArgs) -> Result<()> {
    let tree = load_tree(&args.source)?;
    let families = tree.by_group(&args.group);
    if families.is_empty() {
        println!("no families for group {}", args.group);
        return Ok(());
    }
    for family in families {
        println!(
            "{}  {}",
            family.base(),
            family.meta.concept.as_deref().unwrap_or("")
        );
    }
    println!("{} families", families.len());
    Ok(())
}

pub fn run_attribute(args: &AttributeArgs) -> Result<()> {
    let tree = load_tree(&args.source)?;
    match tree.by_attribute(&args.code) {
        Some(family) => println!("{} owns {}", family.base(), args.code),
        None => println!("no family owns attribute {}", args.code),
    }
    Ok(())
}

pub fn run_preview(args: &PreviewArgs) -> Result<()> {
    let tree = load_tree(&args.source)?;
    print!("{}", tree.render_preview(args.max_children));
    Ok(())
}
