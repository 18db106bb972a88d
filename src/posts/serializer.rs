//! # Write Serializer
//!
//! FIFO gate admitting one store mutation at a time. Waiters are
//! admitted in arrival order (tokio's mutex queues fairly). The gate is
//! released when the permit drops, whether the mutation succeeded or not.
//!
//! There is no timeout: a stalled filesystem call holds the gate and
//! every queued mutation waits behind it.
//!
//! Clones share the same gate, so one serializer can be injected into
//! several stores that write to the same directory.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

/// Shared mutual-exclusion gate for store mutations
#[derive(Debug, Clone, Default)]
pub struct WriteSerializer {
    gate: Arc<Mutex<()>>,
}

/// Proof of holding the gate; dropping it admits the next waiter
#[derive(Debug)]
pub struct WritePermit<'a> {
    _guard: MutexGuard<'a, ()>,
}

impl WriteSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for this caller's turn
    pub async fn acquire(&self) -> WritePermit<'_> {
        WritePermit {
            _guard: self.gate.lock().await,
        }
    }

    /// Run `op` while holding the gate
    pub async fn run<T>(&self, op: impl FnOnce() -> T) -> T {
        let _permit = self.acquire().await;
        op()
    }

    /// Whether no mutation currently holds the gate
    #[cfg(test)]
    pub fn is_idle(&self) -> bool {
        self.gate.try_lock().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_admits_in_arrival_order() {
        let serializer = WriteSerializer::new();
        let order = Arc::new(std::sync::Mutex::new(Vec::new()));

        let permit = serializer.acquire().await;
        let mut handles = Vec::new();
        for i in 0..5 {
            let serializer = serializer.clone();
            let order = order.clone();
            handles.push(tokio::spawn(async move {
                serializer.run(|| order.lock().unwrap().push(i)).await;
            }));
            // Let the task reach the gate before spawning the next one
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert!(order.lock().unwrap().is_empty());
        drop(permit);

        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_idle_tracking() {
        let serializer = WriteSerializer::new();
        assert!(serializer.is_idle());
        {
            let _permit = serializer.acquire().await;
            assert!(!serializer.is_idle());
        }
        assert!(serializer.is_idle());
    }

    #[tokio::test]
    async fn test_independent_serializers_do_not_block_each_other() {
        let a = WriteSerializer::new();
        let b = WriteSerializer::new();
        let _held = a.acquire().await;
        assert!(b.is_idle());
        assert_eq!(b.run(|| 7).await, 7);
    }

    #[tokio::test]
    async fn test_released_after_failed_operation() {
        let serializer = WriteSerializer::new();
        let result: Result<(), &str> = serializer.run(|| Err("disk full")).await;
        assert!(result.is_err());
        assert!(serializer.is_idle());
    }
}
