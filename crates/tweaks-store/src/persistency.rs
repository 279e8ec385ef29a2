//! Background persistence queue.
//!
//! All disk writes for a store are serialized through one writer thread fed
//! by a channel. `set_value` therefore returns before the write lands on
//! disk, and overlapping saves can never interleave or tear the backing
//! file. There is no cancellation: a queued write always eventually
//! completes, including during shutdown (dropping the handle drains the
//! queue before joining the thread).

use std::path::PathBuf;
use std::sync::mpsc;
use std::thread::JoinHandle;

use crate::snapshot::{self, Snapshot};

enum Job {
    Save(Snapshot),
    Flush(mpsc::Sender<()>),
}

/// Handle to the writer thread for one backing file.
///
/// The backing file is exclusive to this handle; two live stores with the
/// same name and container would race each other, which is out of contract
/// (callers must use distinct store names).
pub struct Persistency {
    path: PathBuf,
    sender: Option<mpsc::Sender<Job>>,
    worker: Option<JoinHandle<()>>,
}

impl Persistency {
    /// Spawn the writer thread for `path`.
    pub fn spawn(path: PathBuf) -> Self {
        let (sender, receiver) = mpsc::channel::<Job>();
        let worker_path = path.clone();

        let worker = std::thread::spawn(move || {
            while let Ok(job) = receiver.recv() {
                match job {
                    Job::Save(values) => {
                        if let Err(e) = snapshot::save(&worker_path, &values) {
                            tracing::warn!(
                                path = %worker_path.display(),
                                error = %e,
                                "tweak persistence write failed"
                            );
                        }
                    }
                    Job::Flush(done) => {
                        // Receiving the ack means every prior save in the
                        // FIFO has already hit disk.
                        let _ = done.send(());
                    }
                }
            }
        });

        Self {
            path,
            sender: Some(sender),
            worker: Some(worker),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Enqueue a save of the given snapshot and return immediately.
    pub fn schedule_save(&self, values: Snapshot) {
        if let Some(sender) = &self.sender
            && sender.send(Job::Save(values)).is_err()
        {
            tracing::warn!(path = %self.path.display(), "persistence worker gone, write dropped");
        }
    }

    /// Block until every previously scheduled save has completed.
    ///
    /// Used by shutdown paths and tests that want to observe the file.
    pub fn flush(&self) {
        let Some(sender) = &self.sender else { return };
        let (ack_tx, ack_rx) = mpsc::channel();
        if sender.send(Job::Flush(ack_tx)).is_ok() {
            let _ = ack_rx.recv();
        }
    }
}

impl Drop for Persistency {
    fn drop(&mut self) {
        // Disconnect the channel; the worker drains whatever is queued and
        // exits once the queue is empty.
        drop(self.sender.take());
        if let Some(worker) = self.worker.take()
            && worker.join().is_err()
        {
            tracing::warn!(path = %self.path.display(), "persistence worker panicked");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tweaks_core::TweakValue;

    fn snapshot_with(key: &str, value: i64) -> Snapshot {
        let mut s = Snapshot::new();
        s.insert(key.to_string(), TweakValue::Int(value));
        s
    }

    #[test]
    fn flush_makes_writes_observable() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("store.toml");
        let persistency = Persistency::spawn(path.clone());

        persistency.schedule_save(snapshot_with("A.B.C", 1));
        persistency.flush();

        assert_eq!(
            snapshot::load(&path).get("A.B.C"),
            Some(&TweakValue::Int(1))
        );
    }

    #[test]
    fn later_writes_win() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("store.toml");
        let persistency = Persistency::spawn(path.clone());

        for i in 0..50 {
            persistency.schedule_save(snapshot_with("A.B.C", i));
        }
        persistency.flush();

        assert_eq!(
            snapshot::load(&path).get("A.B.C"),
            Some(&TweakValue::Int(49))
        );
    }

    #[test]
    fn drop_drains_queued_writes() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("store.toml");

        {
            let persistency = Persistency::spawn(path.clone());
            persistency.schedule_save(snapshot_with("A.B.C", 7));
            // No flush: Drop must drain the queue before joining.
        }

        assert_eq!(
            snapshot::load(&path).get("A.B.C"),
            Some(&TweakValue::Int(7))
        );
    }

    #[test]
    fn flush_on_idle_queue_returns() {
        let tmp = TempDir::new().unwrap();
        let persistency = Persistency::spawn(tmp.path().join("store.toml"));
        persistency.flush();
        persistency.flush();
    }
}
