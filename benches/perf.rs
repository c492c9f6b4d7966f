use criterion::{Criterion, criterion_group, criterion_main};
use rand::Rng;
use std::hint::black_box;

use league_ranker::config::RankerConfig;
use league_ranker::fixtures::parse_fixtures;
use league_ranker::points::{PointsPolicy, aggregate_points};
use league_ranker::ranking::rank;
use league_ranker::compute_standings;

const TEAMS: &[&str] = &[
    "Lions",
    "Snakes",
    "Tarantulas",
    "FC Awesome",
    "Grouches",
    "Red Kites",
    "Harbour Rovers",
    "Old Boys",
];

fn synthetic_league(rows: usize) -> String {
    let mut rng = rand::thread_rng();
    let mut out = String::new();
    for idx in 0..rows {
        let home = TEAMS[rng.gen_range(0..TEAMS.len())];
        let away = TEAMS[rng.gen_range(0..TEAMS.len())];
        // Every tenth line is noisy so the normalizer has work to do.
        if idx % 10 == 0 {
            out.push_str(&format!(
                "${home}_ {}, ({away}) {}\r\n",
                rng.gen_range(0..6),
                rng.gen_range(0..6)
            ));
        } else {
            out.push_str(&format!(
                "{home} {}, {away} {}\n",
                rng.gen_range(0..6),
                rng.gen_range(0..6)
            ));
        }
    }
    out
}

fn bench_parse(c: &mut Criterion) {
    let text = synthetic_league(5_000);
    c.bench_function("parse_fixtures_lenient", |b| {
        b.iter(|| {
            let out = parse_fixtures(black_box(&text), false);
            black_box(out.stats.parsed);
        })
    });
}

fn bench_aggregate_and_rank(c: &mut Criterion) {
    let parsed = parse_fixtures(&synthetic_league(5_000), false);
    c.bench_function("aggregate_and_rank", |b| {
        b.iter(|| {
            let standings = aggregate_points(black_box(&parsed.fixtures), PointsPolicy::default());
            black_box(rank(&standings).len());
        })
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let text = synthetic_league(5_000);
    let config = RankerConfig::default();
    c.bench_function("compute_standings", |b| {
        b.iter(|| {
            let table = compute_standings(black_box(&text), &config);
            black_box(table.standings.len());
        })
    });
}

criterion_group!(benches, bench_parse, bench_aggregate_and_rank, bench_pipeline);
criterion_main!(benches);
