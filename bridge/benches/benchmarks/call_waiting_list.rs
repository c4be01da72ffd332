use std::sync::Arc;

use criterion::{BatchSize, Criterion, criterion_group};

use bridge::clock::clock::SystemClock;
use bridge::net::call_waiting_list::call_waiting_list::CallWaitingList;
use bridge::net::call_waiting_list::call_waiting_list_config::CallWaitingListConfig;
use bridge::net::call_waiting_list::response_callback::ResponseCallback;
use bridge::net::connect::call_id::CallId;
use bridge::net::connect::error::CallError;

const SIZE: usize = 64 * 1024;

struct NothingCallback {}

impl ResponseCallback<String> for NothingCallback {
    fn on_response(&self, _: Result<String, CallError>) {}
}

fn add(criterion: &mut Criterion) {
    let nothing_callback = Arc::new(NothingCallback {});

    let mut group = criterion.benchmark_group("call waiting list add");

    group.bench_function("add without capacity", |bencher| {
        let waiting_list: CallWaitingList<String> = CallWaitingList::new(
            Arc::new(SystemClock::new()),
            CallWaitingListConfig::without_expiry(),
        );

        bencher.iter_batched(
            || (0..SIZE).map(|index| index as CallId).collect::<Vec<_>>(),
            |call_ids| {
                for call_id in call_ids {
                    waiting_list.add(call_id, "getNum", nothing_callback.clone());
                }
            },
            BatchSize::SmallInput
        );
    });
    group.bench_function("add with capacity", |bencher| {
        let waiting_list: CallWaitingList<String> = CallWaitingList::new_with_capacity(
            SIZE,
            Arc::new(SystemClock::new()),
            CallWaitingListConfig::without_expiry(),
        );

        bencher.iter_batched(
            || (0..SIZE).map(|index| index as CallId).collect::<Vec<_>>(),
            |call_ids| {
                for call_id in call_ids {
                    waiting_list.add(call_id, "getNum", nothing_callback.clone());
                }
            },
            BatchSize::SmallInput
        );
    });
    group.finish();
}

fn add_and_handle_response(criterion: &mut Criterion) {
    let nothing_callback = Arc::new(NothingCallback {});

    criterion.bench_function("call waiting list add and handle response", |bencher| {
        let waiting_list: CallWaitingList<String> = CallWaitingList::new_with_capacity(
            SIZE,
            Arc::new(SystemClock::new()),
            CallWaitingListConfig::without_expiry(),
        );

        bencher.iter_batched(
            || (0..SIZE).map(|index| index as CallId).collect::<Vec<_>>(),
            |call_ids| {
                for call_id in call_ids {
                    waiting_list.add(call_id, "getNum", nothing_callback.clone());
                    waiting_list.handle_response(call_id, Ok(String::new()));
                }
            },
            BatchSize::SmallInput
        );
    });
}

criterion_group!(benches, add, add_and_handle_response);
