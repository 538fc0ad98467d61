use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

type Listener = Box<dyn FnMut(f32) + Send>;
type Listeners = Mutex<Vec<(u64, Listener)>>;

/// Scroll container that fans its offset out to subscribed listeners.
/// Each container owns its own listener list.
#[derive(Clone, Default)]
pub struct ScrollSource {
    listeners: Arc<Listeners>,
    next_id: Arc<AtomicU64>,
}

impl ScrollSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl FnMut(f32) + Send + 'static) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.push((id, Box::new(listener)));
        }
        Subscription {
            id,
            listeners: Arc::downgrade(&self.listeners),
        }
    }

    /// Listeners must not subscribe or unsubscribe from inside the callback.
    pub fn emit(&self, offset: f32) {
        if let Ok(mut listeners) = self.listeners.lock() {
            for (_, listener) in listeners.iter_mut() {
                listener(offset);
            }
        }
    }

    #[allow(dead_code)]
    pub fn listener_count(&self) -> usize {
        self.listeners.lock().map(|l| l.len()).unwrap_or(0)
    }
}

/// Removes its listener when dropped.
pub struct Subscription {
    id: u64,
    listeners: Weak<Listeners>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            if let Ok(mut listeners) = listeners.lock() {
                listeners.retain(|(id, _)| *id != self.id);
            }
        }
    }
}

/// Maps the scroll offset onto `[0, 1]` across `distance` pixels after `start`.
pub fn progress(offset: f32, start: f32, distance: f32) -> f32 {
    if distance <= 0.0 {
        return if offset >= start { 1.0 } else { 0.0 };
    }
    ((offset - start) / distance).clamp(0.0, 1.0)
}

/// Scrubbed trigger: follows the scroll position directly, no smoothing.
pub struct ScrollTrigger {
    progress: Arc<Mutex<f32>>,
    _subscription: Subscription,
}

impl ScrollTrigger {
    pub fn attach(source: &ScrollSource, start: f32, distance: f32) -> Self {
        let shared = Arc::new(Mutex::new(0.0));
        let writer = shared.clone();
        let subscription = source.subscribe(move |offset| {
            if let Ok(mut p) = writer.lock() {
                *p = progress(offset, start, distance);
            }
        });

        Self {
            progress: shared,
            _subscription: subscription,
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress.lock().map(|p| *p).unwrap_or(0.0)
    }
}
