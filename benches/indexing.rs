#[macro_use]
extern crate bencher;

use bencher::Bencher;

use doc_lib::{Audio, Capabilities, DocList, Index, ListAdvancedIndexing, Slice, Value};
use ndarray::Array1;
use rand::{thread_rng, Rng};

const N: usize = 10_000;

fn random_mask(n: usize) -> Vec<bool> {
    let mut rng = thread_rng();
    (0..n).map(|_| rng.gen_bool(0.5)).collect()
}

fn bench_mask_select(bench: &mut Bencher) {
    let xs: ListAdvancedIndexing<u64> = (0..N as u64).collect();
    let mask = random_mask(N);
    bench.iter(|| xs.select(Index::Mask(mask.clone())).unwrap())
}

fn bench_list_select(bench: &mut Bencher) {
    let xs: ListAdvancedIndexing<u64> = (0..N as u64).collect();
    let mut rng = thread_rng();
    let ids: Vec<isize> = (0..N).map(|_| rng.gen_range(-(N as isize)..N as isize)).collect();
    bench.iter(|| xs.select(Index::List(ids.clone())).unwrap())
}

fn bench_slice_select(bench: &mut Bencher) {
    let xs: ListAdvancedIndexing<u64> = (0..N as u64).collect();
    bench.iter(|| xs.select(Slice::full().step_by(-3)).unwrap())
}

fn bench_mask_delete(bench: &mut Bencher) {
    let xs: ListAdvancedIndexing<u64> = (0..N as u64).collect();
    let mask = random_mask(N);
    bench.iter(|| {
        let mut ys = xs.clone();
        ys.delete(Index::Mask(mask.clone())).unwrap()
    })
}

fn bench_validate_audio(bench: &mut Bencher) {
    let caps = Capabilities::detect();
    let values: Vec<Value> = (0..256)
        .map(|i| {
            if i % 2 == 0 {
                Value::from(format!("clip_{i}.wav"))
            } else {
                Value::from(doc_lib::AnyTensor::from(Array1::<f32>::zeros(64)))
            }
        })
        .collect();
    bench.iter(|| DocList::<Audio>::validate(values.clone(), &caps).unwrap())
}

benchmark_group!(
    benches,
    bench_mask_select,
    bench_list_select,
    bench_slice_select,
    bench_mask_delete,
    bench_validate_audio
);
benchmark_main!(benches);
