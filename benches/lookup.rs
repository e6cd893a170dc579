use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cert_lookup::{
    config::Columns,
    index::Index,
    lookup::{resolve, Query},
    sheet::parse_records,
};

const LAST_NAMES: &[&str] = &["Smith", "Jones", "Garcia", "Nguyen", "O'Brien", "van der Berg"];

/// Synthetic published sheet: `n` rows, every tenth cert number repeated.
fn sample_csv(n: usize) -> String {
    let mut out = String::from("Certification #,First,Last,Cert. Exp. Date\n");
    for i in 0..n {
        let num = if i % 10 == 0 { i / 10 } else { i };
        let last = LAST_NAMES[i % LAST_NAMES.len()];
        out.push_str(&format!("{num},First{i},{last},2027-01-{:02}\n", i % 28 + 1));
    }
    out
}

fn bench_lookup(c: &mut Criterion) {
    let primary = sample_csv(5_000);
    let secondary = sample_csv(2_000);
    let columns = Columns::default();

    c.bench_function("parse_5k_rows", |b| {
        b.iter(|| black_box(parse_records(black_box(&primary)).unwrap().len()))
    });

    c.bench_function("build_index_merged", |b| {
        b.iter(|| {
            let sets = vec![
                parse_records(&primary).unwrap(),
                parse_records(&secondary).unwrap(),
            ];
            black_box(Index::build(sets, &columns).key_count())
        })
    });

    let index = Index::build(
        vec![parse_records(&primary).unwrap(), parse_records(&secondary).unwrap()],
        &columns,
    );
    let hit = Query::new("4321", "jones").unwrap();
    let miss = Query::new("4321", "nobody").unwrap();

    c.bench_function("resolve_hit", |b| b.iter(|| black_box(resolve(&index, black_box(&hit), &columns))));
    c.bench_function("resolve_name_miss", |b| b.iter(|| black_box(resolve(&index, black_box(&miss), &columns))));
}

criterion_group!(benches, bench_lookup);
criterion_main!(benches);
