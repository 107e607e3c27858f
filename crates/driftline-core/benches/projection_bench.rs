use criterion::{black_box, criterion_group, criterion_main, Criterion};
use driftline_core::{
    project_rows, Categorical, CategoryColumn, ChartFrame, ColumnSource, DataPayload, DataView,
    Insets, Metadata, Primitive, Scales, TypeFlags, ValueColumn, Viewport,
};

fn gen_payload(n: usize) -> DataPayload {
    let base_ms = 1_700_000_000_000_f64;
    let mut dates = Vec::with_capacity(n);
    let mut values = Vec::with_capacity(n);
    for i in 0..n {
        dates.push(Primitive::Number(base_ms + i as f64 * 3_600_000.0));
        // simple waveform with drift
        values.push(Primitive::Number((i as f64 * 0.01).sin() * 10.0 + i as f64 * 0.0001));
    }
    DataPayload::with_view(DataView {
        categorical: Some(Categorical {
            categories: vec![CategoryColumn {
                source: ColumnSource {
                    display_name: "Date".to_string(),
                    kind: TypeFlags {
                        date_time: true,
                        ..Default::default()
                    },
                },
                values: dates,
            }],
            values: vec![ValueColumn {
                source: ColumnSource::default(),
                values,
            }],
        }),
        metadata: Some(Metadata::default()),
    })
}

fn bench_refresh_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("refresh");
    for &n in &[1_000usize, 10_000usize] {
        let payload = gen_payload(n);
        group.bench_function(format!("project_n{n}"), |b| {
            b.iter(|| {
                let _ = black_box(project_rows(&payload));
            });
        });

        let rows = project_rows(&payload).expect("payload is valid");
        let frame = ChartFrame::from_viewport(Viewport::new(640.0, 400.0), Insets::default());
        group.bench_function(format!("scales_n{n}"), |b| {
            b.iter(|| {
                let _ = black_box(Scales::from_rows(&rows, &frame));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_refresh_pipeline);
criterion_main!(benches);
