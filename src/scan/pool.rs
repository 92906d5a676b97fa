//! Fixed-size worker pool with ordered fan-in.
//!
//! A feeder thread pushes `(job_id, item)` pairs through a zero-capacity
//! channel, so a send completes only when a worker is free to take the job:
//! at most `workers` jobs are ever in flight. Workers send `(job_id,
//! outcome)` pairs back; the caller's thread buffers completions and emits
//! them strictly in submission order, regardless of completion order.

use crossbeam_channel::{bounded, unbounded};
use std::collections::BTreeMap;
use std::thread;

/// Run `run` over every item on a pool of `workers` threads, emitting
/// outcomes in submission order. Returns once every item has reached a
/// terminal state and all workers have been joined.
pub fn run_ordered<I, O, F, E>(items: Vec<I>, workers: usize, run: F, mut emit: E)
where
    I: Send,
    O: Send,
    F: Fn(usize, I) -> O + Sync,
    E: FnMut(O),
{
    if items.is_empty() {
        return;
    }
    let workers = workers.clamp(1, items.len());

    let (job_tx, job_rx) = bounded::<(usize, I)>(0);
    let (out_tx, out_rx) = unbounded::<(usize, O)>();

    thread::scope(|scope| {
        for _ in 0..workers {
            let job_rx = job_rx.clone();
            let out_tx = out_tx.clone();
            let run = &run;
            scope.spawn(move || {
                for (id, item) in job_rx.iter() {
                    let outcome = run(id, item);
                    if out_tx.send((id, outcome)).is_err() {
                        break;
                    }
                }
            });
        }
        // Workers hold their own clones; dropping these lets the result
        // stream close once the last worker finishes.
        drop(job_rx);
        drop(out_tx);

        scope.spawn(move || {
            for job in items.into_iter().enumerate() {
                if job_tx.send(job).is_err() {
                    break;
                }
            }
        });

        let mut pending: BTreeMap<usize, O> = BTreeMap::new();
        let mut next = 0usize;
        for (id, outcome) in out_rx.iter() {
            pending.insert(id, outcome);
            while let Some(ready) = pending.remove(&next) {
                emit(ready);
                next += 1;
            }
        }
    });
}
