//! Describe the grammar: supertypes, node kinds with their fields, field ids.

use std::fmt::Write;
use std::num::NonZeroU16;

use auto_syntax::language;
use auto_syntax::language::{FieldInfo, NodeInfo};

use super::CommandError;

pub struct KindsArgs {
    pub json: bool,
}

pub fn run(args: KindsArgs) {
    match render(args.json) {
        Ok(out) => print!("{}", out),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

pub fn render(json: bool) -> Result<String, CommandError> {
    let node_types = language().node_types();
    if json {
        let mut out = serde_json::to_string_pretty(&node_types)?;
        out.push('\n');
        return Ok(out);
    }
    let mut out = String::new();
    write_text(&node_types, &mut out)?;
    Ok(out)
}

fn write_text(node_types: &[NodeInfo], out: &mut impl Write) -> std::fmt::Result {
    let lang = language();

    writeln!(out, "{} (.{})", lang.name(), lang.file_types().join(", ."))?;

    writeln!(out, "\nsupertypes")?;
    for info in node_types.iter().filter(|n| !n.subtypes.is_empty()) {
        let subtypes: Vec<_> = info.subtypes.iter().map(|t| t.kind).collect();
        writeln!(out, "  {} = {}", info.kind, subtypes.join(" | "))?;
    }

    writeln!(out, "\nnodes")?;
    for info in node_types
        .iter()
        .filter(|n| n.named && n.subtypes.is_empty())
    {
        writeln!(out, "  {}", info.kind)?;
        for (name, field) in &info.fields {
            let types: Vec<_> = field.types.iter().map(|t| t.kind).collect();
            writeln!(
                out,
                "    {}{}: {}",
                name,
                quantifier(field),
                types.join(" | ")
            )?;
        }
    }

    writeln!(out, "\nfields")?;
    for id in 1..=lang.field_count() as u16 {
        let name = NonZeroU16::new(id).and_then(|id| lang.field_name_for_id(id));
        if let Some(name) = name {
            writeln!(out, "  {:>2} {}", id, name)?;
        }
    }

    Ok(())
}

fn quantifier(field: &FieldInfo) -> &'static str {
    match (field.multiple, field.required) {
        (false, true) => "",
        (false, false) => "?",
        (true, true) => "+",
        (true, false) => "*",
    }
}
