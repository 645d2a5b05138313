//! End-to-end scenarios: equivalence checks on code and API surface reports.

use linealign::prelude::*;
use linealign::DiffOp::{Delete, Insert, Match, Replace};

fn kinds(alignment: &Alignment<'_>) -> String {
    alignment
        .iter()
        .map(|op| match op {
            Match { .. } => '=',
            Insert { .. } => '+',
            Delete { .. } => '-',
            Replace { .. } => '~',
        })
        .collect()
}

// ── Equivalence mode ────────────────────────────────────────────────────

#[test]
fn test_empty_left_is_all_inserts() {
    let empty: [&str; 0] = [];
    let alignment = align(&empty, &["a", "b"], &AlignConfig::code());
    assert_eq!(kinds(&alignment), "++");
    assert_eq!(alignment.ops[0], Insert { right: Line::new(1, "a") });
    assert_eq!(alignment.ops[1], Insert { right: Line::new(2, "b") });
}

#[test]
fn test_empty_right_is_all_deletes() {
    let empty: [&str; 0] = [];
    let alignment = align(&["a", "b"], &empty, &AlignConfig::code());
    assert_eq!(kinds(&alignment), "--");
}

#[test]
fn test_blank_insert_is_ignorable() {
    let alignment = align(&["x"], &["x", "  "], &AlignConfig::code());
    assert_eq!(kinds(&alignment), "=+");
    let transcript = render_transcript(&alignment, &BlankAfterNormalize::default());
    assert!(transcript.equivalent);
}

#[test]
fn test_replace_breaks_equivalence() {
    let alignment = align(&["foo()"], &["bar()"], &AlignConfig::code());
    assert_eq!(kinds(&alignment), "~");
    let transcript = render_transcript(&alignment, &BlankAfterNormalize::default());
    assert!(!transcript.equivalent);
}

#[test]
fn test_trailing_comment_change_matches() {
    let alignment = align(&["x = 1 // old"], &["x = 1 // new"], &AlignConfig::code());
    assert_eq!(kinds(&alignment), "=");
}

#[test]
fn test_decompiled_method_transcript() {
    let expected = "\
class C
{
    void M()
    {
        int x = 0; // local
        Use(x);
    }
}
";
    let actual = "\
class C
{
#if DEBUG
    void M()
    {
        int x = 0; // zero

        Use(x);
    }
}
";
    let transcript = compare(expected, actual, &CompareOptions::default());
    assert!(transcript.equivalent, "{}", transcript.text);
    assert!(transcript.text.contains("        3     #if DEBUG\n"));
    assert!(transcript.text.contains("   5    6           int x = 0; // local\n"));

    let err = assert_equivalent(expected, &actual.replace("Use(x)", "Use(y)")).unwrap_err();
    assert!(matches!(err, DiffError::NotEquivalent { .. }));
    assert!(err.to_string().contains("(+)         Use(y);"));
}

// ── Summary mode ────────────────────────────────────────────────────────

fn api_dump(members: &[&str]) -> Vec<String> {
    let mut types: Vec<(&str, Vec<&str>)> = Vec::new();
    for &member in members {
        let (ty, name) = member.split_once("::").unwrap_or((member, ""));
        match types.iter_mut().find(|(t, _)| *t == ty) {
            Some((_, names)) if !name.is_empty() => names.push(name),
            Some(_) => {}
            None if name.is_empty() => types.push((ty, Vec::new())),
            None => types.push((ty, vec![name])),
        }
    }
    types.sort_by(|a, b| natural_cmp(a.0, b.0));

    let mut lines = Vec::new();
    for (ty, mut names) in types {
        lines.push(ty.to_string());
        sort_natural(&mut names);
        lines.extend(names.into_iter().map(|n| format!("\t{n}")));
    }
    lines
}

#[test]
fn test_api_dump_is_naturally_sorted() {
    let dump = api_dump(&["Item10::Get", "Item2::Get", "Item2::Add", "Item1"]);
    assert_eq!(dump, ["Item1", "Item2", "\tAdd", "\tGet", "Item10", "\tGet"]);
}

#[test]
fn test_api_report_full_and_changes_only() {
    let base = api_dump(&["A::Run", "A::Stop", "B::Get", "C::Set(int)"]);
    let other = api_dump(&["A::Run", "A::Stop", "B::Get", "C::Set(long)", "D"]);

    let report = ApiReport::new("Lib 1.0", "Lib 2.0");
    assert_eq!(
        report.render(&base, &other),
        "Base version:\tLib 1.0\n\
         Other version:\tLib 2.0\n\
         \n    A\n    \tRun\n    \tStop\n    B\n    \tGet\n    C\n\
         (-) \tSet(int)\n(+) \tSet(long)\n +  D\n"
    );

    let changes = report.clone().with_collapse(true);
    assert_eq!(
        changes.render(&base, &other),
        "Base version:\tLib 1.0\n\
         Other version:\tLib 2.0\n\
         \n    C\n(-) \tSet(int)\n(+) \tSet(long)\n +  D\n"
    );

    let swapped = changes.swapped();
    assert_eq!(
        swapped.render(&other, &base),
        "Base version:\tLib 2.0\n\
         Other version:\tLib 1.0\n\
         \n    C\n(-) \tSet(long)\n(+) \tSet(int)\n -  D\n"
    );
}

#[test]
fn test_api_report_without_changes() {
    let dump = api_dump(&["A::Run", "B"]);
    let out = ApiReport::new("x", "y").with_collapse(true).render(&dump, &dump);
    assert_eq!(out, "Base version:\tx\nOther version:\ty\n\n");
}
