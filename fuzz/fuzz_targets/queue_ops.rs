#![no_main]

use libfuzzer_sys::fuzz_target;
use utilkit::{BoundedRingQueue, CircularCursorList};

// Each byte is an operation; the queue length must never pass capacity and
// the cursor must never panic.
fuzz_target!(|data: &[u8]| {
    let Some((&cap, ops)) = data.split_first() else {
        return;
    };
    let capacity = usize::from(cap % 16) + 1;
    let q = BoundedRingQueue::new(capacity).unwrap();
    let mut list = CircularCursorList::new();

    for &op in ops {
        match op % 8 {
            0 => q.enqueue(op),
            1 => {
                let _ = q.dequeue();
            }
            2 => q.clear(),
            3 => list.push(op),
            4 => {
                let _ = list.remove(usize::from(op) % 4);
            }
            5 => {
                let _ = list.get_next();
            }
            6 => {
                let _ = list.get_previous();
            }
            _ => list.set_circular(!list.is_circular()),
        }
        assert!(q.len() <= capacity);
    }
});
