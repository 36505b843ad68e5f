use pretty_assertions::assert_eq;
use wgsl_core::{DiagnosticSeverity, DocumentSnapshot};
use wgsl_core_lint::{LintConfig, Rule, analyze};

const VALID_SHADER: &str = "
struct VertexOutput {
    @builtin(position) position: vec4f,
    @location(0) color: vec4f
}

@vertex
fn vs_main(@builtin(vertex_index) vertexIndex: u32) -> VertexOutput {
    var output: VertexOutput;
    output.position = vec4f(0.0, 0.0, 0.0, 1.0);
    output.color = vec4f(1.0, 0.0, 0.0, 1.0);
    return output;
}

@fragment
fn fs_main(input: VertexOutput) -> @location(0) vec4f {
    return input.color;
}
";

fn lint(text: &str) -> Vec<(&'static str, DiagnosticSeverity, String, usize)> {
    let snapshot = DocumentSnapshot::new(text);
    analyze(&snapshot, &LintConfig::default())
        .into_iter()
        .map(|d| (d.code, d.severity, d.message, d.span.start()))
        .collect()
}

#[test]
fn test_valid_shader_is_clean() {
    assert!(lint(VALID_SHADER).is_empty());
}

#[test]
fn test_analysis_is_idempotent() {
    let snapshot = DocumentSnapshot::new("var x\n@invalid fn test(\n@workgroup_size(0)");
    let config = LintConfig::default();
    let first = analyze(&snapshot, &config);
    let second = analyze(&snapshot, &config);
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_multiple_errors() {
    let text = "
var x
@invalid fn test(
struct MyStruct
@binding(0) @group(0) var tex1: texture_2d<f32>;
@binding(0) @group(0) var tex2: texture_2d<f32>;
";
    let codes: Vec<_> = lint(text).into_iter().map(|(code, ..)| code).collect();
    assert_eq!(
        codes,
        vec![
            "missing-semicolon",
            "delimiters",
            "unknown-attribute",
            "duplicate-binding",
        ]
    );
}

#[test]
fn test_commented_code_is_clean() {
    let text = "
/*
var unclosed
@invalid
{{{
*/
var valid: i32;
// var also_unclosed
";
    assert!(lint(text).is_empty());
}

#[test]
fn test_missing_semicolon_position() {
    assert_eq!(
        lint("var x: i32"),
        vec![(
            "missing-semicolon",
            DiagnosticSeverity::Error,
            "Missing semicolon at end of statement".to_string(),
            9
        )]
    );
}

#[test]
fn test_unclosed_function_body() {
    assert_eq!(
        lint("fn test() {"),
        vec![(
            "delimiters",
            DiagnosticSeverity::Error,
            "Unclosed '{'".to_string(),
            10
        )]
    );
}

#[test]
fn test_binding_scenarios() {
    let duplicate = "@binding(0) @group(0) var<uniform> a: f32;\n\
                     @binding(0) @group(0) var<uniform> b: f32;";
    let found = lint(duplicate);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].2, "Duplicate binding: @binding(0) @group(0)");

    let other_binding = "@binding(0) @group(0) var<uniform> a: f32;\n\
                         @binding(1) @group(0) var<uniform> b: f32;";
    assert!(lint(other_binding).is_empty());

    let other_group = "@binding(0) @group(0) var<uniform> a: f32;\n\
                       @binding(0) @group(1) var<uniform> b: f32;";
    assert!(lint(other_group).is_empty());

    // The key is ordered: binding 1 / group 0 differs from binding 0 / group 1.
    let swapped = "@binding(1) @group(0) var<uniform> a: f32;\n\
                   @binding(0) @group(1) var<uniform> b: f32;";
    assert!(lint(swapped).is_empty());
}

#[test]
fn test_workgroup_scenarios() {
    let found = lint("@compute @workgroup_size(300)\nfn main() {}");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].1, DiagnosticSeverity::Error);
    assert!(found[0].2.contains("between 1 and 256"));

    let found = lint("@compute @workgroup_size(16, 16, 2)\nfn main() {}");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].1, DiagnosticSeverity::Warning);
    assert!(found[0].2.contains("exceeds recommended limit"));

    assert!(lint("@compute @workgroup_size(8, 8)\nfn main() {}").is_empty());
}

#[test]
fn test_disabled_rule_does_not_report() {
    let snapshot = DocumentSnapshot::new("@compute @workgroup_size(300)\nfn main() {}");
    let config = LintConfig::default().with_rule_disabled(Rule::WorkgroupSize);
    assert!(analyze(&snapshot, &config).is_empty());
}

#[test]
fn test_offsets_are_chars_across_rules() {
    // `é` is two bytes; every reported offset must still count it once.
    let found = lint("// é\nvar é_value: Nope");
    let starts: Vec<_> = found.iter().map(|(code, _, _, start)| (*code, *start)).collect();
    assert_eq!(
        starts,
        vec![("missing-semicolon", 21), ("undefined-type", 18)]
    );
}
