use std::fmt;
use std::sync::atomic::{AtomicU32, AtomicU8, Ordering};
use std::sync::Arc;

/// Who is currently allowed to write a [`SharedValue`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Writer {
    /// Programmatic animations: enter/exit fades, spring-back
    Animation = 0,
    /// Live finger tracking during a captured swipe
    Gesture = 1,
}

impl Writer {
    fn from_u8(v: u8) -> Self {
        match v {
            1 => Writer::Gesture,
            _ => Writer::Animation,
        }
    }
}

struct SharedInner {
    bits: AtomicU32,
    writer: AtomicU8,
    name: &'static str,
}

/// An `f32` cell shared between the gesture handler, the animation driver
/// and whoever renders it.
///
/// Exactly one [`Writer`] owns the value at any time. Ownership moves only
/// through [`claim`](Self::claim), which the modal calls at its state
/// transitions; writes from the other side are dropped. Reads are always
/// allowed from any thread.
#[derive(Clone)]
pub struct SharedValue {
    inner: Arc<SharedInner>,
}

impl SharedValue {
    pub fn new(name: &'static str, value: f32) -> Self {
        Self {
            inner: Arc::new(SharedInner {
                bits: AtomicU32::new(value.to_bits()),
                writer: AtomicU8::new(Writer::Animation as u8),
                name,
            }),
        }
    }

    pub fn get(&self) -> f32 {
        f32::from_bits(self.inner.bits.load(Ordering::Acquire))
    }

    pub fn writer(&self) -> Writer {
        Writer::from_u8(self.inner.writer.load(Ordering::Acquire))
    }

    /// Hand the value over to `writer`.
    pub fn claim(&self, writer: Writer) {
        let previous = self.inner.writer.swap(writer as u8, Ordering::AcqRel);
        if previous != writer as u8 {
            log::trace!("{}: writer {:?} -> {:?}", self.inner.name, Writer::from_u8(previous), writer);
        }
    }

    /// Write `value` if `writer` currently owns the cell. Returns whether the
    /// write was applied.
    pub fn set(&self, writer: Writer, value: f32) -> bool {
        if self.writer() != writer {
            log::debug!(
                "{}: dropped write of {} from {:?}, owned by {:?}",
                self.inner.name,
                value,
                writer,
                self.writer()
            );
            return false;
        }
        self.inner.bits.store(value.to_bits(), Ordering::Release);
        true
    }
}

impl fmt::Debug for SharedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedValue")
            .field("name", &self.inner.name)
            .field("value", &self.get())
            .field("writer", &self.writer())
            .finish()
    }
}

/// The three live values that position and fade a modal.
#[derive(Clone, Debug)]
pub struct PresentationValues {
    pub pan_x: SharedValue,
    pub pan_y: SharedValue,
    pub backdrop_opacity: SharedValue,
}

impl PresentationValues {
    pub fn new() -> Self {
        Self {
            pan_x: SharedValue::new("pan_x", 0.0),
            pan_y: SharedValue::new("pan_y", 0.0),
            backdrop_opacity: SharedValue::new("backdrop_opacity", 0.0),
        }
    }

    pub fn claim_all(&self, writer: Writer) {
        self.pan_x.claim(writer);
        self.pan_y.claim(writer);
        self.backdrop_opacity.claim(writer);
    }

    pub fn pan(&self) -> (f32, f32) {
        (self.pan_x.get(), self.pan_y.get())
    }
}

impl Default for PresentationValues {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_owns_by_default() {
        let v = SharedValue::new("v", 1.5);
        assert_eq!(v.writer(), Writer::Animation);
        assert!(v.set(Writer::Animation, 2.0));
        assert_eq!(v.get(), 2.0);
    }

    #[test]
    fn test_write_from_non_owner_is_dropped() {
        let v = SharedValue::new("v", 0.0);
        assert!(!v.set(Writer::Gesture, 10.0));
        assert_eq!(v.get(), 0.0);

        v.claim(Writer::Gesture);
        assert!(v.set(Writer::Gesture, 10.0));
        assert!(!v.set(Writer::Animation, 0.0));
        assert_eq!(v.get(), 10.0);
    }

    #[test]
    fn test_clones_share_storage_across_threads() {
        let v = SharedValue::new("v", 0.0);
        let reader = v.clone();
        v.set(Writer::Animation, 0.42);
        let seen = std::thread::spawn(move || reader.get()).join().unwrap();
        assert_eq!(seen, 0.42);
    }
}
