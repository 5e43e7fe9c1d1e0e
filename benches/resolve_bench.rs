use criterion::{Criterion, black_box, criterion_group, criterion_main};

use phone_resolver::backends::PhonenumberBackend;
use phone_resolver::{CountryDirectory, DialCodeResolver};
use std::sync::Arc;

/// A varied set of inputs: bare NANP, shared codes, area-code keys,
/// punctuation, and non-international strings.
fn setup_inputs() -> Vec<&'static str> {
    vec![
        "+12125551234",
        "+18765551234",
        "+442071838750",
        "+4414811234567",
        "+77011234567",
        "+1 (212) 555-1234",
        "555-1234",
        "+",
    ]
}

fn resolution_benchmark(c: &mut Criterion) {
    let directory = Arc::new(CountryDirectory::bundled().expect("bundled dataset"));
    let resolver = DialCodeResolver::new(directory, PhonenumberBackend);
    // Build the index up front so the bench measures resolution only.
    resolver.directory().dial_code_index();

    let inputs = setup_inputs();

    let mut group = c.benchmark_group("Dial Code Resolution");

    group.bench_function("dial_code_prefix", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = resolver.dial_code_prefix(black_box(input));
            }
        })
    });

    group.bench_function("resolve_country", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = resolver.resolve_country(black_box(input));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, resolution_benchmark);
criterion_main!(benches);
