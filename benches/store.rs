use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use contact_book::helper::{deserialize_contacts_from_txt_buffer, serialize_contacts};
use contact_book::prelude::{ContactStore, Contacts, MemStorage, Storage, TxtStorage};

const CONTACTS: usize = 5_000;

fn make_contacts(n: usize) -> Contacts {
    let store = make_store_with_n(n);
    store.contacts().map(|c| (c.name.clone(), c.clone())).collect()
}

// Store prepopulated with `n` contacts, kept in memory only
fn make_store_with_n(n: usize) -> ContactStore {
    let mut store = ContactStore::new(Box::new(MemStorage::new()));
    for i in 0..n {
        store
            .add_or_replace(
                &format!("User{i}"),
                &format!("0888{i:07}"),
                &format!("user{i}@yahoo.com"),
                "12 Long Road",
            )
            .expect("valid contact");
    }
    store
}

fn bench_add(c: &mut Criterion) {
    c.bench_function("adding to 5k contacts", |b| {
        b.iter_batched(
            || make_store_with_n(CONTACTS),
            |mut store| {
                store
                    .add_or_replace("Zoe", "08885499529", "zoe@gmail.com", "")
                    .expect("valid contact");
                black_box(store.len());
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_search(c: &mut Criterion) {
    let store = make_store_with_n(CONTACTS);

    c.bench_function("searching 5k contacts", |b| {
        b.iter(|| {
            let found = store.search(black_box("user49")).count();
            black_box(found);
        });
    });
}

fn bench_rename(c: &mut Criterion) {
    c.bench_function("renaming in 5k contacts", |b| {
        b.iter_batched(
            || make_store_with_n(CONTACTS),
            |mut store| {
                store
                    .rename_and_replace("User100", "User100-edited", "123", "", "")
                    .expect("rename");
                black_box(store.len());
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_serialize(c: &mut Criterion) {
    let contacts = make_contacts(CONTACTS);

    c.bench_function("serializing 5k contacts", |b| {
        b.iter(|| black_box(serialize_contacts(&contacts)));
    });

    let text = serialize_contacts(&contacts);
    c.bench_function("parsing 5k contacts", |b| {
        b.iter(|| {
            let parsed = deserialize_contacts_from_txt_buffer(text.as_bytes()).expect("parse");
            black_box(parsed);
        });
    });
}

fn bench_txt_round_trip(c: &mut Criterion) {
    let contacts = make_contacts(CONTACTS);
    let dir = tempfile::tempdir().expect("temp dir");
    let storage = TxtStorage::new(dir.path().join("contacts.txt"));

    c.bench_function("save_5k_txt_contacts", |b| {
        b.iter(|| storage.save(&contacts).expect("save"));
    });

    c.bench_function("read_5k_txt_contacts", |b| {
        b.iter(|| black_box(storage.load().expect("load")));
    });
}

criterion_group!(
    benches,
    bench_add,
    bench_search,
    bench_rename,
    bench_serialize,
    bench_txt_round_trip
);
criterion_main!(benches);
