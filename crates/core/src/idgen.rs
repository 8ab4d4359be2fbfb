//! Serial allocation with separate mobile and item ranges

use crate::{Serial, ITEM_SERIAL_BASE};
use parking_lot::Mutex;
use std::sync::atomic::{self, AtomicU32};

/// Thread-safe serial allocator
///
/// Mobiles get serials from 1 up to `ITEM_SERIAL_BASE - 1`, items from
/// `ITEM_SERIAL_BASE` up. Released serials are handed out again before
/// the counters advance.
pub struct SerialGenerator {
    next_mobile: AtomicU32,
    next_item: AtomicU32,
    released_mobiles: Mutex<Vec<Serial>>,
    released_items: Mutex<Vec<Serial>>,
}

impl SerialGenerator {
    pub fn new() -> Self {
        Self {
            next_mobile: AtomicU32::new(1),
            next_item: AtomicU32::new(ITEM_SERIAL_BASE),
            released_mobiles: Mutex::new(Vec::new()),
            released_items: Mutex::new(Vec::new()),
        }
    }

    /// Get the next available mobile serial
    pub fn next_mobile(&self) -> Serial {
        if let Some(serial) = self.released_mobiles.lock().pop() {
            return serial;
        }
        Serial(self.next_mobile.fetch_add(1, atomic::Ordering::Relaxed))
    }

    /// Get the next available item serial
    pub fn next_item(&self) -> Serial {
        if let Some(serial) = self.released_items.lock().pop() {
            return serial;
        }
        Serial(self.next_item.fetch_add(1, atomic::Ordering::Relaxed))
    }

    /// Return a serial to its pool once the object is gone
    pub fn release(&self, serial: Serial) {
        if serial.is_item() {
            self.released_items.lock().push(serial);
        } else if serial.is_mobile() {
            self.released_mobiles.lock().push(serial);
        }
    }
}

impl Default for SerialGenerator {
    fn default() -> Self {
        Self::new()
    }
}
