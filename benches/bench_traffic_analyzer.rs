use criterion::{
    black_box, criterion_group, criterion_main, AxisScale, BenchmarkId, Criterion,
    PlotConfiguration,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use traffic_agent::flow_analyzer::{
    calculate_confidence_level, combine_traffic_sources, SourceReadings,
};
use traffic_agent::traffic_sources::synthetic::{
    sample_crowd_sourced, sample_map_service, sample_sensor_feed,
};

/// Generates a batch of reading triples spread over the whole day.
fn generate_reading_batch(batch_size: usize) -> Vec<SourceReadings> {
    let mut rng = SmallRng::seed_from_u64(42);
    (0..batch_size)
        .map(|i| {
            let hour = (i % 24) as u8;
            SourceReadings {
                map_service: sample_map_service(hour, &mut rng),
                crowd_sourced: sample_crowd_sourced(hour, &mut rng),
                sensor_feed: sample_sensor_feed(hour, i % 7 >= 5),
            }
        })
        .collect()
}

/// Benchmarks combine_traffic_sources and calculate_confidence_level
/// for different batch sizes.
fn bench_batch_aggregation(c: &mut Criterion) {
    let batch_sizes = [50, 100, 200];

    let mut group = c.benchmark_group("Traffic_Aggregation_Batch_Benchmarks");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Linear));

    for &batch in batch_sizes.iter() {
        let readings = generate_reading_batch(batch);

        group.bench_with_input(
            BenchmarkId::new("combine_traffic_sources", batch),
            &batch,
            |b, &_batch| {
                b.iter(|| {
                    for triple in &readings {
                        let estimate = combine_traffic_sources(black_box(triple));
                        black_box(estimate.ok());
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("calculate_confidence_level", batch),
            &batch,
            |b, &_batch| {
                b.iter(|| {
                    for triple in &readings {
                        black_box(calculate_confidence_level(black_box(triple)));
                    }
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_batch_aggregation);
criterion_main!(benches);
