//! A fixed number of worker threads, each logging a counted sequence with a
//! pause between lines. The caller joins every worker before completion is
//! reported.

use std::thread;
use tracing::{error, info};

pub mod config;
pub mod error;

pub use config::WorkerConfig;
pub use error::{WorkerError, WorkerResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerReport {
    pub id: usize,
    pub completed: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub workers: Vec<WorkerReport>,
}

impl RunReport {
    pub fn total_iterations(&self) -> usize {
        self.workers.iter().map(|w| w.completed).sum()
    }
}

pub fn run(config: &WorkerConfig) -> WorkerResult<RunReport> {
    run_with(config, |_, _| {})
}

/// Like [`run`], calling `step(id, iteration)` on the worker's thread right
/// after each iteration is logged.
///
/// Every spawned worker is joined even when another one panics; the first
/// panicking worker (by id) is reported as [`WorkerError::Panicked`].
pub fn run_with<F>(config: &WorkerConfig, step: F) -> WorkerResult<RunReport>
where
    F: Fn(usize, usize) + Sync,
{
    info!(
        workers = config.workers,
        iterations = config.iterations,
        delay_ms = config.delay.as_millis() as u64,
        "starting workers"
    );
    let step = &step;

    let workers = thread::scope(|s| {
        let mut handles = Vec::with_capacity(config.workers);
        for id in 1..=config.workers {
            let handle = thread::Builder::new()
                .name(format!("worker-{id}"))
                .spawn_scoped(s, move || work(id, config, step))
                .map_err(WorkerError::Spawn)?;
            handles.push((id, handle));
        }

        let mut reports = Vec::with_capacity(handles.len());
        let mut panicked = None;
        for (id, handle) in handles {
            match handle.join() {
                Ok(report) => reports.push(report),
                Err(_) => {
                    error!(id, "worker panicked");
                    panicked.get_or_insert(id);
                }
            }
        }

        match panicked {
            Some(id) => Err(WorkerError::Panicked { id }),
            None => Ok(reports),
        }
    })?;

    info!("all workers finished");
    Ok(RunReport { workers })
}

fn work<F>(id: usize, config: &WorkerConfig, step: &F) -> WorkerReport
where
    F: Fn(usize, usize),
{
    for i in 0..config.iterations {
        info!("worker {id} running iteration {i}");
        step(id, i);
        thread::sleep(config.delay);
    }
    WorkerReport {
        id,
        completed: config.iterations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::{Duration, Instant};

    fn quick(workers: usize, iterations: usize) -> WorkerConfig {
        WorkerConfig {
            workers,
            iterations,
            delay: Duration::ZERO,
        }
    }

    #[test]
    fn every_worker_completes_its_iterations() {
        let report = run(&quick(2, 3)).unwrap();
        assert_eq!(
            report.workers,
            vec![
                WorkerReport { id: 1, completed: 3 },
                WorkerReport { id: 2, completed: 3 },
            ]
        );
        assert_eq!(report.total_iterations(), 6);
    }

    #[test]
    fn iterations_are_counted_in_order_per_worker() {
        let seen = Mutex::new(Vec::new());
        run_with(&quick(4, 5), |id, i| seen.lock().unwrap().push((id, i))).unwrap();

        let seen = seen.into_inner().unwrap();
        assert_eq!(seen.len(), 20);
        for id in 1..=4 {
            let mine: Vec<_> = seen.iter().filter(|(w, _)| *w == id).map(|(_, i)| *i).collect();
            assert_eq!(mine, (0..5).collect::<Vec<_>>());
        }
    }

    #[test]
    fn no_workers_is_an_empty_run() {
        let report = run(&quick(0, 3)).unwrap();
        assert!(report.workers.is_empty());
        assert_eq!(report.total_iterations(), 0);
    }

    #[test]
    fn workers_pause_between_iterations() {
        let config = WorkerConfig {
            workers: 2,
            iterations: 2,
            delay: Duration::from_millis(50),
        };
        let start = Instant::now();
        run(&config).unwrap();
        assert!(start.elapsed() >= Duration::from_millis(100));
    }

    #[test]
    fn panicking_worker_is_reported_after_the_rest_join() {
        let finished = Mutex::new(Vec::new());
        let err = run_with(&quick(3, 2), |id, i| {
            if id == 2 && i == 1 {
                panic!("worker 2 gave up");
            }
            if i == 1 {
                finished.lock().unwrap().push(id);
            }
        })
        .unwrap_err();

        assert!(matches!(err, WorkerError::Panicked { id: 2 }));
        assert_eq!(err.to_string(), "worker 2 panicked");
        let mut finished = finished.into_inner().unwrap();
        finished.sort();
        assert_eq!(finished, vec![1, 3]);
    }
}
