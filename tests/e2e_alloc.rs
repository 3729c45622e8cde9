//! Ownership tests under an allocation-counting allocator.
//!
//! Counters are thread-local, so tests running in parallel on other
//! threads do not disturb each other's numbers.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use cypher_value::{Value, ValueVector};

struct Counting;

thread_local! {
    static ALLOCS: Cell<usize> = const { Cell::new(0) };
    static FREES: Cell<usize> = const { Cell::new(0) };
}

unsafe impl GlobalAlloc for Counting {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let _ = ALLOCS.try_with(|c| c.set(c.get() + 1));
        unsafe { System.alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        let _ = FREES.try_with(|c| c.set(c.get() + 1));
        unsafe { System.dealloc(ptr, layout) }
    }
}

#[global_allocator]
static GLOBAL: Counting = Counting;

fn allocs() -> usize { ALLOCS.with(Cell::get) }
fn frees() -> usize { FREES.with(Cell::get) }

// ============================================================================
// Vector release
// ============================================================================

#[test]
fn test_vector_drop_releases_each_owned_string_once() {
    const OWNED: usize = 16;
    let borrowed = String::from("caller-owned");

    let mut v = ValueVector::with_capacity(OWNED * 3);
    for i in 0..OWNED {
        v.push(Value::string(format!("payload-{i}")));
        v.push(Value::const_string(&borrowed));
        v.push(Value::Int64(i as i64));
    }
    assert_eq!(v.len(), OWNED * 3);

    let (a, f) = (allocs(), frees());
    drop(v);

    assert_eq!(allocs(), a, "dropping must not allocate");
    // One free per owned payload plus the spilled backing buffer.
    assert_eq!(frees() - f, OWNED + 1);
    assert_eq!(borrowed, "caller-owned");
}

#[test]
fn test_vector_growth_frees_nothing_it_still_owns() {
    // Warm up once so lazily-initialized statics are not counted.
    drop((0..16).map(Value::Int32).collect::<ValueVector>());

    let mut v = ValueVector::with_capacity(1);
    let start_allocs = allocs();
    let start_frees = frees();
    for i in 0..64 {
        v.push(Value::string(i.to_string()));
    }
    drop(v);
    // Everything allocated inside the loop (payloads and every grown buffer)
    // has been returned, and nothing more.
    assert_eq!(allocs() - start_allocs, frees() - start_frees);
}

// ============================================================================
// Value release and clone
// ============================================================================

#[test]
fn test_clone_owns_a_new_buffer() {
    let original = Value::string("shared nothing");

    let a = allocs();
    let copy = original.clone();
    assert_eq!(allocs() - a, 1);

    let f = frees();
    drop(copy);
    assert_eq!(frees() - f, 1);
    assert_eq!(original.as_str(), Some("shared nothing"));
}

#[test]
fn test_non_owning_values_release_nothing() {
    let text = String::from("borrowed");
    let values = [
        Value::Null,
        Value::const_string(&text),
        Value::Int32(1),
        Value::Double(2.0),
        Value::Inf,
    ];

    let f = frees();
    let copies = values.clone();
    drop(copies);
    drop(values);
    assert_eq!(frees(), f);
}
