//! Alloy text emission.
//!
//! [`block`] formats one named block the way every fragment is stored;
//! [`serialize`] assembles the accumulated fragments into the final module.

use std::fmt::Write as FmtWrite;

use crate::context::AlloyFragments;
use crate::grammar::INDENT;
use crate::options::TransformOptions;

/// Formats `header { ... }` with one indented line per entry.
///
/// An empty body is rendered inline as `header {}`.
#[must_use]
pub fn block(header: &str, lines: &[String]) -> String {
    if lines.is_empty() {
        return format!("{header} {{}}");
    }
    let mut out = format!("{header} {{\n");
    for line in lines {
        let _ = writeln!(out, "{INDENT}{line}");
    }
    out.push('}');
    out
}

/// Buffer for an Alloy module.
pub struct AlloyFile {
    /// Text emitted so far.
    pub buf: String,
}

impl AlloyFile {
    /// Starts a module with the given name.
    #[must_use]
    pub fn new(module: &str) -> Self {
        let mut f = Self {
            buf: String::with_capacity(16 * 1024),
        };
        let _ = writeln!(f.buf, "module {module}");
        f.blank();
        f
    }

    /// Emits a single line.
    pub fn line(&mut self, s: &str) {
        self.buf.push_str(s);
        self.buf.push('\n');
    }

    /// Emits a blank line.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Emits a multi-line fragment followed by a blank separator line.
    pub fn fragment(&mut self, s: &str) {
        self.line(s);
        self.blank();
    }

    /// Returns the finished text with exactly one trailing newline.
    #[must_use]
    pub fn finish(mut self) -> String {
        while self.buf.ends_with("\n\n") {
            self.buf.pop();
        }
        self.buf
    }
}

/// Assembles the final Alloy module from the accumulated fragments.
#[must_use]
pub fn serialize(fragments: &AlloyFragments, options: &TransformOptions) -> String {
    let mut f = AlloyFile::new("main");

    f.line("open world_structure[World]");
    f.line("open ontological_properties[World]");
    f.line("open util/relation");
    f.line("open util/sequniv");
    f.line("open util/ternary");
    f.line("open util/boolean");
    f.blank();

    f.fragment("abstract sig Endurant {}");
    f.fragment("sig Object extends Endurant {}");
    f.fragment("sig Aspect extends Endurant {}");
    f.fragment("abstract sig Datatype {}");

    for declaration in fragments.enums() {
        f.fragment(declaration);
    }

    for datatype in fragments.datatypes().iter().filter(|d| d.declared) {
        let header = format!("sig {} in Datatype", datatype.name);
        let fields = if datatype.fields.is_empty() {
            Vec::new()
        } else {
            vec![datatype.fields.join(&format!(",\n{INDENT}"))]
        };
        f.fragment(&block(&header, &fields));
    }

    f.line(&world_signature(fragments));
    f.blank();

    f.fragment(&block(
        "fact additionalFacts",
        &[
            "continuous_existence[exists]".to_string(),
            "elements_existence[Endurant,exists]".to_string(),
        ],
    ));

    for fact in fragments.facts() {
        f.fragment(fact);
    }

    if !fragments.relation_properties().is_empty() {
        f.fragment(&block(
            "fact relationProperties",
            fragments.relation_properties(),
        ));
    }

    for fun in fragments.funs() {
        f.fragment(fun);
    }

    let visible: Vec<&str> = std::iter::once("exists")
        .chain(fragments.visible().iter().map(String::as_str))
        .collect();
    f.fragment(&block("fun visible : World->univ", &[visible.join(" + ")]));

    let scope = options.scope;
    let bitwidth = options.int_bitwidth;
    let _ = writeln!(f.buf, "run singleWorld for {scope} but 1 World, {bitwidth} Int");
    let _ = writeln!(
        f.buf,
        "run linearWorlds for {scope} but 0 BranchingWorld, {bitwidth} Int"
    );
    let _ = writeln!(
        f.buf,
        "run multipleWorlds for {scope} but {} World, {bitwidth} Int",
        options.worlds
    );

    f.finish()
}

/// `abstract sig World { ... }` plus its appended fact block, if any.
fn world_signature(fragments: &AlloyFragments) -> String {
    let fields: Vec<&str> = std::iter::once("exists: some Endurant")
        .chain(fragments.world_fields().iter().map(String::as_str))
        .collect();
    let mut out = format!(
        "abstract sig World {{\n{INDENT}{}\n}}",
        fields.join(&format!(",\n{INDENT}"))
    );
    if !fragments.world_facts().is_empty() {
        out.push_str("{\n");
        for fact in fragments.world_facts() {
            let _ = writeln!(out, "{INDENT}{fact}");
        }
        out.push('}');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_layout() {
        assert_eq!(
            block("fact rigid", &["rigidity[Person,Object,exists]".to_string()]),
            "fact rigid {\n        rigidity[Person,Object,exists]\n}"
        );
        assert_eq!(block("sig Date in Datatype", &[]), "sig Date in Datatype {}");
    }

    #[test]
    fn empty_module_has_world_and_runs() {
        let text = serialize(&AlloyFragments::new(), &TransformOptions::default());
        assert!(text.starts_with("module main\n\nopen world_structure[World]\n"));
        assert!(text.contains("abstract sig World {\n        exists: some Endurant\n}\n"));
        assert!(text.contains("fun visible : World->univ {\n        exists\n}"));
        assert!(!text.contains("fact relationProperties"));
        assert!(text.ends_with("run multipleWorlds for 10 but 3 World, 7 Int\n"));
    }

    #[test]
    fn datatype_fields_are_comma_separated() {
        let mut fragments = AlloyFragments::new();
        fragments.datatype_fields("Date").push("day: one Int".to_string());
        fragments.datatype_fields("Date").push("month: one Int".to_string());
        fragments.add_datatype("String", false);
        let text = serialize(&fragments, &TransformOptions::default());
        assert!(text.contains(
            "sig Date in Datatype {\n        day: one Int,\n        month: one Int\n}"
        ));
        assert!(!text.contains("sig String"));
    }
}
