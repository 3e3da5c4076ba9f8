// Criterion benchmarks for GeneraLink Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use generalink_match::core::{compute_view, similarity, Recommender};
use generalink_match::models::{Candidate, Gender, Member, Role};

const TAGS: &[&str] = &[
    "Cooking", "History", "Gardening", "Technology", "Gaming", "Art", "Walking",
    "Music", "Languages", "Travel", "Calligraphy", "Photography",
];

fn interests(seed: usize) -> Vec<String> {
    (0..4).map(|k| TAGS[(seed + k * 5) % TAGS.len()].to_string()).collect()
}

fn create_member(id: usize) -> Member {
    Member {
        id: format!("m{}", id),
        name: format!("Member {}", id),
        age: if id % 2 == 0 { 20 + (id % 10) as u8 } else { 65 + (id % 10) as u8 },
        role: if id % 2 == 0 { Role::Youth } else { Role::Senior },
        gender: if id % 3 == 0 { Gender::Female } else { Gender::Male },
        about: String::new(),
        interests: interests(id),
    }
}

fn bench_similarity(c: &mut Criterion) {
    let a = interests(0);
    let b = interests(3);

    c.bench_function("similarity", |bench| {
        bench.iter(|| similarity(black_box(&a), black_box(&b)));
    });
}

fn bench_recommend(c: &mut Criterion) {
    let recommender = Recommender::default();
    let mut group = c.benchmark_group("recommend");

    for member_count in [10, 100, 1000].iter() {
        let directory: Vec<Member> = (0..*member_count).map(create_member).collect();
        let viewer = create_member(1);

        group.bench_with_input(
            BenchmarkId::new("recommend", member_count),
            member_count,
            |b, _| {
                b.iter(|| recommender.recommend(black_box(&viewer), black_box(&directory)));
            },
        );
    }

    group.finish();
}

fn bench_compute_view(c: &mut Criterion) {
    let candidates: Vec<Candidate> = (0..50)
        .map(|i| Candidate::from_member(&create_member(i), 50))
        .collect();
    let viewer = interests(7);

    c.bench_function("compute_view", |b| {
        b.iter(|| compute_view(black_box(&candidates), black_box(&viewer), black_box(25)));
    });
}

criterion_group!(benches, bench_similarity, bench_recommend, bench_compute_view);

criterion_main!(benches);
