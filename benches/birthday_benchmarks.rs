//! Performance benchmarks for the upcoming birthday query.
//!
//! These benchmarks measure the query under different address book sizes,
//! with birthdays spread evenly across the year.

use chrono::{Days, NaiveDate};
use contact_assistant::{AddressBook, Record};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// Build an address book with `size` contacts, one birthday per day-of-year.
fn create_test_book(size: usize) -> AddressBook {
    let start = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
    let mut book = AddressBook::new();

    for i in 0..size {
        let mut record = Record::new(format!("Contact{}", i)).unwrap();
        record.add_phone(&format!("{:010}", i)).unwrap();
        let birthday = start + Days::new((i % 365) as u64);
        record
            .set_birthday(&birthday.format("%d.%m.%Y").to_string())
            .unwrap();
        book.add_record(record);
    }

    book
}

/// Benchmark the 7-day query across dataset sizes.
fn bench_upcoming_birthdays(c: &mut Criterion) {
    let reference = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
    let mut group = c.benchmark_group("upcoming_birthdays");

    for size in [10, 100, 1_000, 10_000] {
        let book = create_test_book(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &book, |b, book| {
            b.iter(|| black_box(book.upcoming_birthdays(black_box(reference))));
        });
    }

    group.finish();
}

/// Benchmark listing every record.
fn bench_show_all(c: &mut Criterion) {
    let book = create_test_book(1_000);
    c.bench_function("show_all_1000", |b| {
        b.iter(|| black_box(contact_assistant::handlers::show_all(&[], black_box(&book))));
    });
}

criterion_group!(benches, bench_upcoming_birthdays, bench_show_all);
criterion_main!(benches);
