//! Bounded delivery queue for sensor samples.
//!
//! Samples are produced by the platform's sensor callbacks, possibly from an
//! interrupt or another thread, and drained by the monitor on its own
//! schedule. Built on `critical-section` and `heapless::Deque`, so it works
//! without an allocator.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::router::SensorSample;

/// Error returned when the queue has no room for another sample.
///
/// Carries the rejected sample back so the delivery side can decide what to
/// do with it; the processing side never blocks to make room.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueFull(pub SensorSample);

/// Error returned when draining an empty queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueEmpty;

/// Fixed-capacity, interrupt-safe FIFO of sensor samples.
///
/// Synchronized with critical sections, so deliveries and drains may come
/// from different execution contexts.
pub struct SampleQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<SensorSample, SIZE>>>,
}

impl<const SIZE: usize> SampleQueue<SIZE> {
    /// Create a new empty queue.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a delivery handle for this queue.
    ///
    /// Multiple senders can coexist; they share the same backing storage.
    pub const fn sender(&self) -> SampleSender<'_, SIZE> {
        SampleSender { queue: self }
    }

    /// Get a drain handle for this queue.
    pub const fn receiver(&self) -> SampleReceiver<'_, SIZE> {
        SampleReceiver { queue: self }
    }

    /// Try to enqueue a sample.
    ///
    /// Returns `Err(QueueFull(sample))` when the queue is at capacity.
    pub fn try_send(&self, sample: SensorSample) -> Result<(), QueueFull> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(sample).map_err(QueueFull)
        })
    }

    /// Try to dequeue the oldest sample.
    ///
    /// Returns `Err(QueueEmpty)` when there is nothing to drain.
    pub fn try_receive(&self) -> Result<SensorSample, QueueEmpty> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(QueueEmpty)
        })
    }
}

impl<const SIZE: usize> Default for SampleQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Delivery handle for a [`SampleQueue`].
///
/// A lightweight reference that can be cloned and handed to the sensor side.
#[derive(Clone, Copy)]
pub struct SampleSender<'a, const SIZE: usize> {
    queue: &'a SampleQueue<SIZE>,
}

impl<const SIZE: usize> SampleSender<'_, SIZE> {
    /// Try to enqueue a sample.
    ///
    /// Returns `Err(QueueFull(sample))` when the queue is at capacity.
    pub fn try_send(&self, sample: SensorSample) -> Result<(), QueueFull> {
        self.queue.try_send(sample)
    }
}

/// Drain handle for a [`SampleQueue`].
#[derive(Clone, Copy)]
pub struct SampleReceiver<'a, const SIZE: usize> {
    queue: &'a SampleQueue<SIZE>,
}

impl<const SIZE: usize> SampleReceiver<'_, SIZE> {
    /// Try to dequeue the oldest sample.
    ///
    /// Returns `Err(QueueEmpty)` when there is nothing to drain.
    pub fn try_receive(&self) -> Result<SensorSample, QueueEmpty> {
        self.queue.try_receive()
    }
}
