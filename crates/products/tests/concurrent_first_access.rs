//! First access to the catalog from many threads at once.
//!
//! Lives in its own test binary so the process-wide table is still unpopulated
//! when the threads start.

use std::sync::Barrier;
use std::thread;

use dhlship_products::{ProductType, all_products, get_product};

const THREADS: usize = 16;

#[test]
fn concurrent_first_access_sees_a_complete_table() {
    let barrier = Barrier::new(THREADS);

    let observed: Vec<(usize, usize)> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|i| {
                let barrier = &barrier;
                scope.spawn(move || {
                    barrier.wait();
                    // Half the threads go through the map, half through single lookups.
                    if i % 2 == 0 {
                        let catalog = all_products();
                        (catalog.len(), catalog as *const _ as usize)
                    } else {
                        let found = ProductType::ALL
                            .iter()
                            .filter(|t| get_product(**t).is_some())
                            .count();
                        (found, all_products() as *const _ as usize)
                    }
                })
            })
            .collect();

        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let first_address = observed[0].1;
    for (count, address) in observed {
        assert_eq!(count, 11);
        assert_eq!(address, first_address);
    }
}
