//! Performance benchmarks for codebundle

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use codebundle::test_utils::TestProject;
use codebundle::{BundleConfig, EntryFilter, Exporter, PlainFormatter, TreeWalker};

fn js_config(project: &TestProject, char_limit: usize) -> BundleConfig {
    BundleConfig {
        root: project.path().to_path_buf(),
        char_limit,
        ..Default::default()
    }
}

fn bench_tree_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_walk");

    for count in [50, 500] {
        let project = TestProject::new();
        project.populate(count);
        let walker = TreeWalker::new(EntryFilter::default());

        group.bench_function(format!("{}_files", count), |b| {
            b.iter(|| {
                let mut formatter = PlainFormatter::new();
                walker
                    .walk(black_box(project.path()), &mut formatter)
                    .unwrap();
                formatter.into_string()
            })
        });
    }

    group.finish();
}

fn bench_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("export");

    let project = TestProject::new();
    project.populate(500);
    let out = TestProject::new();

    // Large budget: everything in one chunk
    let exporter = Exporter::new(js_config(&project, 10_000_000));
    group.bench_function("500_files_single_chunk", |b| {
        b.iter(|| exporter.run(black_box(out.path())).unwrap())
    });

    // Small budget: frequent rotation
    let exporter = Exporter::new(js_config(&project, 1_000));
    group.bench_function("500_files_rotating", |b| {
        b.iter(|| exporter.run(black_box(out.path())).unwrap())
    });

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let filter = EntryFilter::default();
    let mut group = c.benchmark_group("entry_filter");

    group.bench_function("included_file", |b| {
        b.iter(|| filter.is_included_file(black_box("UserController.php")))
    });

    group.bench_function("excluded_dir", |b| {
        b.iter(|| filter.is_excluded_dir(black_box("node_modules")))
    });

    group.finish();
}

criterion_group!(benches, bench_tree_walk, bench_export, bench_filter);
criterion_main!(benches);
