//! Scroll-reveal wiring for the browser
//!
//! The landing page owns a [`RevealTracker`] in a signal. Once the first
//! frame is painted, every section carrying the marker attribute is handed to
//! an `IntersectionObserver` whose entries are forwarded to the tracker. The
//! observer is disconnected when the page unmounts, including when that
//! happens before tracking started.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;
use voyage_core::{
    CoreError, CoreResult, PageSection, RegionId, RevealConfig, RevealTracker, Transition,
    VisibilityEvent, VisibilityWatcher, WatchGuard,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// [`VisibilityWatcher`] backed by the browser's `IntersectionObserver`
pub struct IntersectionWatcher {
    observer: IntersectionObserver,
    document: Document,
    config: RevealConfig,
    _callback: EntriesCallback,
}

impl IntersectionWatcher {
    pub fn connect<F>(config: &RevealConfig, mut on_event: F) -> CoreResult<Self>
    where
        F: FnMut(VisibilityEvent) + 'static,
    {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| CoreError::Host("no document to observe".to_string()))?;

        let callback: EntriesCallback =
            Closure::new(move |entries: js_sys::Array, _: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let id = entry.target().id();
                    if id.is_empty() {
                        continue;
                    }
                    on_event(VisibilityEvent::new(id, entry.is_intersecting()));
                }
            });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.threshold));
        options.set_root_margin(&config.root_margin());

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|err| {
                    CoreError::Host(format!("IntersectionObserver unavailable: {:?}", err))
                })?;

        Ok(Self {
            observer,
            document,
            config: config.clone(),
            _callback: callback,
        })
    }

    /// Ids of the rendered elements carrying the marker attribute
    pub fn marked_regions(&self) -> Vec<RegionId> {
        let Ok(nodes) = self
            .document
            .query_selector_all(&self.config.marker_selector())
        else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|index| nodes.get(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|element| element.id())
            .filter(|id| !id.is_empty())
            .map(RegionId::from)
            .collect()
    }
}

impl VisibilityWatcher for IntersectionWatcher {
    fn observe(&mut self, region: &RegionId) -> bool {
        match self.document.get_element_by_id(region.as_str()) {
            Some(element) if element.has_attribute(&self.config.marker_attribute) => {
                self.observer.observe(&element);
                true
            }
            _ => false,
        }
    }

    fn disconnect(&mut self) {
        self.observer.disconnect();
    }
}

/// Read side of the page's reveal state, shared through context
#[derive(Clone, Copy)]
pub struct RevealContext {
    tracker: RwSignal<RevealTracker>,
}

impl RevealContext {
    pub fn is_revealed(&self, section: PageSection) -> bool {
        self.tracker
            .with(|tracker| tracker.is_revealed(section.id()))
    }

    pub fn class(&self, section: PageSection, delay_ms: u32) -> String {
        reveal_class(section, self.is_revealed(section), delay_ms)
    }
}

pub fn use_reveal() -> RevealContext {
    expect_context::<RevealContext>()
}

type WatchSlot = Rc<RefCell<Option<WatchGuard<IntersectionWatcher>>>>;

/// Creates the page's tracker, starts watching after the first paint and
/// releases the watcher when the owning component is cleaned up.
pub fn provide_reveal_tracker(config: RevealConfig) -> RevealContext {
    let tracker = create_rw_signal(RevealTracker::new(PageSection::ALL));
    let context = RevealContext { tracker };
    provide_context(context);

    let slot: WatchSlot = Rc::default();
    let frame = request_animation_frame_with_handle({
        let slot = Rc::clone(&slot);
        move || begin_tracking(&config, tracker, &slot)
    });
    let frame = match frame {
        Ok(handle) => Some(handle),
        Err(err) => {
            tracing::warn!("Scroll reveal disabled, no animation frame: {:?}", err);
            None
        }
    };

    on_cleanup(move || {
        if let Some(frame) = frame {
            frame.cancel();
        }
        end_tracking(tracker, &slot);
    });

    context
}

fn tracking_active(tracker: RwSignal<RevealTracker>) -> bool {
    tracker
        .try_with_untracked(|tracker| !tracker.is_torn_down())
        .unwrap_or(false)
}

fn begin_tracking(config: &RevealConfig, tracker: RwSignal<RevealTracker>, slot: &WatchSlot) {
    if !tracking_active(tracker) {
        tracing::debug!("Page unmounted before reveal tracking started");
        return;
    }
    if slot.borrow().is_some() {
        return;
    }
    match start_watching(config, tracker) {
        Ok(acquired) => *slot.borrow_mut() = Some(acquired),
        Err(err) => tracing::warn!("Scroll reveal disabled, sections stay hidden: {}", err),
    }
}

/// Stops the tracker before releasing the watcher so a late entry is ignored
fn end_tracking(tracker: RwSignal<RevealTracker>, slot: &WatchSlot) {
    tracker.try_update_untracked(|tracker| tracker.teardown());
    if let Some(mut acquired) = slot.borrow_mut().take() {
        acquired.release();
    }
}

fn start_watching(
    config: &RevealConfig,
    tracker: RwSignal<RevealTracker>,
) -> CoreResult<WatchGuard<IntersectionWatcher>> {
    config.validate()?;

    let watcher = IntersectionWatcher::connect(config, move |event| deliver(tracker, event))?;
    let marked = watcher.marked_regions();
    tracker.update_untracked(|tracker| {
        for region in &marked {
            tracker.register(region.clone());
        }
    });

    Ok(WatchGuard::acquire(watcher, &marked))
}

fn deliver(tracker: RwSignal<RevealTracker>, event: VisibilityEvent) {
    // Only a real reveal notifies readers
    match tracker.try_with_untracked(|tracker| tracker.classify(&event)) {
        Some(Transition::Revealed) => {
            tracker.update(|tracker| {
                tracker.apply(&event);
            });
        }
        Some(transition) => {
            tracing::trace!("Visibility event for {}: {:?}", event.region, transition)
        }
        None => tracing::trace!("Visibility event for {} after page disposal", event.region),
    }
}

/// Classes for a section's content: hidden below its final position, or
/// fading in after `delay_ms`.
pub fn reveal_class(section: PageSection, revealed: bool, delay_ms: u32) -> String {
    match (revealed, delay_ms) {
        (true, 0) => "animate-fadeInUp".to_string(),
        (true, delay) => format!("animate-fadeInUp animation-delay-{}", delay),
        (false, _) => format!("opacity-0 {}", hidden_offset(section)),
    }
}

fn hidden_offset(section: PageSection) -> &'static str {
    match section {
        PageSection::Trust => "translate-y-5",
        _ => "translate-y-10",
    }
}
