//! Fixed-capacity FIFO queue
//!
//! A ring buffer over a boxed slice of `Option<T>`. The capacity is chosen at
//! construction and never grows; [`BoundedQueue::enqueue`] hands the value back
//! when the queue is full, the same contract as `heapless::Deque::push_back`.
//!
//! The level-order dump uses it as its breadth-first frontier, but nothing here
//! is heap-specific.

/// Bounded first-in first-out queue
///
/// # Example
///
/// ```rust
/// use binomial_queue::queue::BoundedQueue;
///
/// let mut queue = BoundedQueue::with_capacity(2);
/// assert_eq!(queue.enqueue('a'), Ok(()));
/// assert_eq!(queue.enqueue('b'), Ok(()));
/// assert_eq!(queue.enqueue('c'), Err('c'));
/// assert_eq!(queue.dequeue(), Some('a'));
/// ```
#[derive(Debug, Clone)]
pub struct BoundedQueue<T> {
    slots: Box<[Option<T>]>,
    /// Index of the front element
    head: usize,
    len: usize,
}

impl<T> BoundedQueue<T> {
    /// Creates an empty queue holding at most `capacity` values
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            head: 0,
            len: 0,
        }
    }

    /// Maximum number of values the queue can hold
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Appends a value at the back
    ///
    /// # Errors
    /// Returns the value unchanged if the queue is full.
    pub fn enqueue(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }
        let tail = (self.head + self.len) % self.capacity();
        self.slots[tail] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the front value
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.slots[self.head].take();
        self.head = (self.head + 1) % self.capacity();
        self.len -= 1;
        value
    }

    /// Returns the front value without removing it
    pub fn peek_front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.head].as_ref()
    }
}
