use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use twindeque::{ArrayDeque, Deque, LinkedDeque};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static ALLOC: jemallocator::Jemalloc = jemallocator::Jemalloc;

const N: u32 = 1 << 20;

/// One step of the workload: which end to touch, and whether to add or remove there.
#[derive(Clone, Copy)]
enum Step {
    AddFirst(u32),
    AddLast(u32),
    RemoveFirst,
    RemoveLast,
}

/// Fills up, churns at both ends, then drains, so that both growth and shrinking get timed.
fn workload() -> Vec<Step> {
    let mut rng = SmallRng::seed_from_u64(0x5eed);
    let mut steps = Vec::with_capacity(3 * N as usize);
    for i in 0..N {
        steps.push(if rng.gen() {
            Step::AddFirst(i)
        } else {
            Step::AddLast(i)
        });
    }
    for i in 0..N {
        steps.push(match rng.gen_range(0..4) {
            0 => Step::AddFirst(i),
            1 => Step::AddLast(i),
            2 => Step::RemoveFirst,
            _ => Step::RemoveLast,
        });
    }
    for _ in 0..(2 * N) {
        steps.push(if rng.gen() {
            Step::RemoveFirst
        } else {
            Step::RemoveLast
        });
    }
    steps
}

fn time<F: FnMut(Step)>(name: &str, steps: &[Step], mut apply: F) {
    let mut prevent_realloc = Vec::<Box<[u8; 16]>>::new();
    let mut mx = 0.0f64;
    let mut sum = Duration::new(0, 0);
    for &step in steps {
        let t = Instant::now();
        apply(step);
        let took = t.elapsed();
        mx = mx.max(took.as_secs_f64());
        sum += took;
        // keep allocating things to prevent in-place growth.
        // the new allocations need to be large enough so that they don't all fit in the old
        // memory that is now freed in case the allocator tries to be smart.
        prevent_realloc.push(Box::new([0; 16]));
    }
    eprintln!(
        "{} max: {:?}, mean: {:?}",
        name,
        Duration::from_secs_f64(mx),
        sum / steps.len() as u32
    );
}

fn time_deque<D: Deque<u32>>(name: &str, steps: &[Step], mut vs: D) {
    time(name, steps, |step| match step {
        Step::AddFirst(i) => vs.add_first(i),
        Step::AddLast(i) => vs.add_last(i),
        Step::RemoveFirst => {
            vs.remove_first();
        }
        Step::RemoveLast => {
            vs.remove_last();
        }
    });
    assert!(vs.is_empty());
}

fn main() {
    let steps = workload();

    {
        let mut vs = VecDeque::new();
        time("VecDeque", &steps, |step| match step {
            Step::AddFirst(i) => vs.push_front(i),
            Step::AddLast(i) => vs.push_back(i),
            Step::RemoveFirst => {
                vs.pop_front();
            }
            Step::RemoveLast => {
                vs.pop_back();
            }
        });
    }

    time_deque("ArrayDeque", &steps, ArrayDeque::new());
    time_deque("LinkedDeque", &steps, LinkedDeque::new());
}
