use criterion::{Criterion, black_box, criterion_group, criterion_main};
use wgsl_core::DocumentSnapshot;
use wgsl_core_lint::{LintConfig, analyze};

fn large_shader(function_count: usize) -> String {
    let mut out = String::with_capacity(function_count * 256);
    out.push_str("struct VertexOutput {\n    @builtin(position) position: vec4f,\n}\n\n");
    for i in 0..function_count {
        out.push_str(&format!(
            "// helper {i}\n\
             @binding({i}) @group(0) var<uniform> u{i}: vec4f;\n\
             fn helper_{i}(x: f32) -> f32 {{\n    \
                 let y: f32 = x * {i}.0;\n    \
                 /* keep {{ braces }} in comments */\n    \
                 return y + 1.0;\n\
             }}\n\n"
        ));
    }
    out
}

fn bench_analyze_large_shader(c: &mut Criterion) {
    let snapshot = DocumentSnapshot::new(&large_shader(500));
    let config = LintConfig::default();
    c.bench_function("analyze/500_functions", |b| {
        b.iter(|| {
            let diagnostics = analyze(black_box(&snapshot), &config);
            black_box(diagnostics.len());
        })
    });
}

fn bench_analyze_small_shader(c: &mut Criterion) {
    let snapshot = DocumentSnapshot::new(&large_shader(10));
    let config = LintConfig::default();
    c.bench_function("analyze/10_functions", |b| {
        b.iter(|| black_box(analyze(black_box(&snapshot), &config)))
    });
}

criterion_group!(benches, bench_analyze_large_shader, bench_analyze_small_shader);
criterion_main!(benches);
