use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use jamosim::{decompose, edit_distance, DistanceScratch};

const WARM_UP_TIME: u64 = 2;
const MEASUREMENT_TIME: u64 = 5;

/// 같은 문장을 n번 이어 붙이고 한 글자만 바꾼 쌍
fn make_pair(times: usize) -> (Vec<char>, Vec<char>) {
    let base = "다음 퀘스트를 진행하려면 마을 촌장에게 말을 거세요 ".repeat(times);
    let changed = base.replacen("촌장", "존장", 1);
    (decompose(&base).chars().collect(), decompose(&changed).chars().collect())
}

fn distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance");
    group.warm_up_time(std::time::Duration::from_secs(WARM_UP_TIME));
    group.measurement_time(std::time::Duration::from_secs(MEASUREMENT_TIME));

    for times in [1, 4, 16] {
        let (a, b) = make_pair(times);

        group.bench_with_input(BenchmarkId::new("fresh", times), &(&a, &b), |bench, data| {
            bench.iter(|| edit_distance(black_box(data.0), black_box(data.1)))
        });

        let mut scratch = DistanceScratch::with_capacity(a.len());
        group.bench_with_input(BenchmarkId::new("scratch", times), &(&a, &b), |bench, data| {
            bench.iter(|| scratch.distance(black_box(data.0), black_box(data.1)))
        });
    }

    group.finish();
}

criterion_group!(benches, distance);
criterion_main!(benches);
