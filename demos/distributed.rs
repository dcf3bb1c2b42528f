use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use rand::{rng, Rng};
use snowcodec::{SnowflakeCodec, ECRD_EPOCH};

fn main() {
    let codec = SnowflakeCodec::new(ECRD_EPOCH);
    let mut handles = vec![];

    // One generator per worker, shared by two threads each
    for worker in 0..4u32 {
        let generator = Arc::new(codec.default_generator(worker));
        for thread_id in 0..2 {
            let gen = Arc::clone(&generator);
            handles.push(thread::spawn(move || {
                let mut ids = HashSet::new();
                let mut rng = rng();

                for i in 0..5 {
                    let id = gen.produce();
                    let s = id.structure();
                    println!(
                        "Worker {} thread {} generated ID {} (ts={}, worker={}, process={}, inc={})",
                        worker, thread_id, i, s.timestamp, s.internal_worker_id, s.internal_process_id, s.increment
                    );

                    assert!(ids.insert(id.value()), "Duplicate ID generated!");

                    let delay = rng.random_range(0..=9);
                    thread::sleep(Duration::from_millis(delay));
                }
                ids
            }));
        }
    }

    let mut all_ids = HashSet::new();
    for handle in handles {
        all_ids.extend(handle.join().unwrap());
    }

    println!("\nTotal unique IDs generated: {}", all_ids.len());
    assert_eq!(all_ids.len(), 40, "IDs collided across workers!");
}
