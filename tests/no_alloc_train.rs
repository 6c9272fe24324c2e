use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};

use adaline::{Adaline, Dataset, TrainConfig};

struct CountingAlloc {
    allocs: AtomicUsize,
    reallocs: AtomicUsize,
    deallocs: AtomicUsize,
    bytes: AtomicUsize,
}

impl CountingAlloc {
    const fn new() -> Self {
        Self {
            allocs: AtomicUsize::new(0),
            reallocs: AtomicUsize::new(0),
            deallocs: AtomicUsize::new(0),
            bytes: AtomicUsize::new(0),
        }
    }

    fn reset(&self) {
        self.allocs.store(0, Ordering::Relaxed);
        self.reallocs.store(0, Ordering::Relaxed);
        self.deallocs.store(0, Ordering::Relaxed);
        self.bytes.store(0, Ordering::Relaxed);
    }

    fn snapshot(&self) -> AllocSnapshot {
        AllocSnapshot {
            allocs: self.allocs.load(Ordering::Relaxed),
            reallocs: self.reallocs.load(Ordering::Relaxed),
            deallocs: self.deallocs.load(Ordering::Relaxed),
            bytes: self.bytes.load(Ordering::Relaxed),
        }
    }

    fn alloc_events(&self) -> usize {
        self.allocs.load(Ordering::Relaxed) + self.reallocs.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AllocSnapshot {
    allocs: usize,
    reallocs: usize,
    deallocs: usize,
    bytes: usize,
}

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        self.allocs.fetch_add(1, Ordering::Relaxed);
        self.bytes.fetch_add(layout.size(), Ordering::Relaxed);
        unsafe { System.alloc(layout) }
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        self.allocs.fetch_add(1, Ordering::Relaxed);
        self.bytes.fetch_add(layout.size(), Ordering::Relaxed);
        unsafe { System.alloc_zeroed(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        self.deallocs.fetch_add(1, Ordering::Relaxed);
        unsafe { System.dealloc(ptr, layout) }
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        self.reallocs.fetch_add(1, Ordering::Relaxed);
        // Approximate accounting: record the new size.
        self.bytes.fetch_add(new_size, Ordering::Relaxed);
        unsafe { System.realloc(ptr, layout, new_size) }
    }
}

#[global_allocator]
static ALLOC: CountingAlloc = CountingAlloc::new();

fn make_dataset(len: usize, input_dim: usize) -> Dataset {
    let inputs = vec![1.0_f64; len * input_dim];
    let targets = vec![0.5_f64; len];
    Dataset::from_flat(inputs, targets, input_dim).unwrap()
}

#[test]
fn train_does_not_allocate_per_sample() {
    let input_dim = 8;

    let cfg = TrainConfig::new(0.01, 1e-9).with_max_epochs(1);
    let base = Adaline::with_weights(cfg, vec![0.0; input_dim], 0.0).unwrap();

    let train_small = make_dataset(16, input_dim);
    let train_large = make_dataset(16 * 64, input_dim);

    let mut small = base.clone();
    ALLOC.reset();
    let before_small = ALLOC.snapshot();
    small.train(&train_small).unwrap();
    let alloc_small = ALLOC.alloc_events();
    let after_small = ALLOC.snapshot();

    let mut large = base;
    ALLOC.reset();
    let before_large = ALLOC.snapshot();
    large.train(&train_large).unwrap();
    let alloc_large = ALLOC.alloc_events();
    let after_large = ALLOC.snapshot();

    assert_eq!(
        alloc_small, alloc_large,
        "expected allocation event count to be independent of dataset size.\n\
small: before={before_small:?} after={after_small:?}\n\
large: before={before_large:?} after={after_large:?}"
    );
}
