use criterion::criterion_main;

mod benchmarks;

criterion_main!(benchmarks::call_waiting_list::benches);
