use criterion::{black_box, criterion_group, criterion_main, Criterion};
use linien_card::{collect_departures, CardConfig, SensorReading, StateSnapshot};
use linien_card_render::render_card;
use linien_card_types::DepartureListView;

fn full_snapshot() -> StateSnapshot {
    let mut snapshot = StateSnapshot::new();
    for n in 1..=7u8 {
        snapshot.insert(
            format!("sensor.transit_departure_{n}"),
            SensorReading::new(format!("{}", 8 - n))
                .with_attr("line", format!("{n}"))
                .with_attr("destination", "Jakominiplatz")
                .with_attr("is_delayed", n % 2 == 0),
        );
    }
    snapshot
}

fn bench_pipeline(c: &mut Criterion) {
    let store = full_snapshot();
    let config = CardConfig::stub();

    c.bench_function("collect_departures", |b| {
        b.iter(|| collect_departures(black_box(&store), black_box(&config)))
    });

    c.bench_function("render_card", |b| {
        let view = DepartureListView::from_departures(collect_departures(&store, &config));
        b.iter(|| render_card(black_box(&view)))
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
