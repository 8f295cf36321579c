use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_primitives(c: &mut Criterion) {
    c.bench_function("luhn_16_digits", |b| {
        b.iter(|| pruefziffer::algo::check_luhn(black_box("4111111111111111")))
    });

    c.bench_function("verhoeff_12_digits", |b| {
        b.iter(|| pruefziffer::algo::check_verhoeff(black_box("234567890124")))
    });

    c.bench_function("damm10_12_digits", |b| {
        b.iter(|| pruefziffer::algo::check_damm10(black_box("572457245724")))
    });

    c.bench_function("mod97_remainder_30_chars", |b| {
        b.iter(|| pruefziffer::algo::mod97_remainder(black_box(b"GB82WEST12345698765432GB82WEST")))
    });
}

fn bench_validators(c: &mut Criterion) {
    c.bench_function("isin", |b| {
        b.iter(|| pruefziffer::finance::check_isin(black_box("US0378331005")))
    });

    c.bench_function("iban_22_chars", |b| {
        b.iter(|| pruefziffer::finance::check_iban(black_box("GB82WEST12345698765432")))
    });

    c.bench_function("lei", |b| {
        b.iter(|| pruefziffer::finance::check_lei(black_box("HWUPKR0MPOU8FGXBT394")))
    });

    c.bench_function("euvatid", |b| {
        b.iter(|| pruefziffer::euvat::check_euvatid(black_box("DE136695976")))
    });
}

fn bench_scan(c: &mut Criterion) {
    c.bench_function("scan_all_schemes", |b| {
        b.iter(|| pruefziffer::registry::scan(black_box("4006381333931")))
    });
}

criterion_group!(benches, bench_primitives, bench_validators, bench_scan);
criterion_main!(benches);
