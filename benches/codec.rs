use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use opaque_id::{OpaqueId, ProfilesConfig};

fn get_codec(name: &str) -> OpaqueId {
    let config = ProfilesConfig::load_default().unwrap();
    config.get_profile(name).unwrap().build().unwrap()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for profile in ["base32", "base36", "base58", "base64"] {
        let codec = get_codec(profile);
        group.bench_with_input(BenchmarkId::from_parameter(profile), &codec, |b, codec| {
            let mut value = 0u64;
            b.iter(|| {
                value = value.wrapping_add(0x9E37_79B9_7F4A_7C15);
                codec.encode(black_box(value))
            });
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for profile in ["base32", "base36", "base58", "base64"] {
        let codec = get_codec(profile);
        let ids: Vec<String> = (0..1024u64).map(|v| codec.encode(v)).collect();
        group.bench_with_input(BenchmarkId::from_parameter(profile), &ids, |b, ids| {
            let mut i = 0usize;
            b.iter(|| {
                i = (i + 1) % ids.len();
                codec.decode(black_box(&ids[i])).unwrap()
            });
        });
    }
    group.finish();
}

fn bench_construction(c: &mut Criterion) {
    let config = ProfilesConfig::load_default().unwrap();
    let profile = config.get_profile("base58").unwrap();

    c.bench_function("new_base58", |b| {
        b.iter(|| {
            OpaqueId::new(
                black_box(&profile.alphabet),
                black_box(&profile.key),
                profile.min_length,
            )
            .unwrap()
        });
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_construction);
criterion_main!(benches);
