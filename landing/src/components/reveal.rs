//! Reveal-on-view wrapper.
//!
//! Each mounted block owns one watch and one [`RevealLatch`]. The watch is
//! an `IntersectionObserver` where the browser has one, otherwise window
//! `scroll`/`resize` listeners that measure the block against the viewport.
//! The first intersecting sample flips the block to visible and the watch
//! is dropped; leaving the viewport afterwards changes nothing.

use leptos::prelude::*;
use shootsync::reveal::{
    Motion, Rect, RevealLatch, RevealTiming, Transition, Viewport, Visibility, stagger_delay,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry};

use crate::site::use_site;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;
type ListenerCallback = Closure<dyn FnMut()>;

/// Window events that can bring a block into view.
const GEOMETRY_EVENTS: [&str; 2] = ["scroll", "resize"];

/// Live watch on one block. Stops watching on drop.
enum Watch {
    Observer { _watch: ObserverWatch },
    Geometry { _watch: GeometryWatch },
}

impl Watch {
    fn start(
        element: &web_sys::HtmlDivElement,
        on_reveal: impl Fn() + Copy + 'static,
    ) -> Result<Self, JsValue> {
        match ObserverWatch::start(element, on_reveal) {
            Ok(watch) => Ok(Watch::Observer { _watch: watch }),
            Err(e) => {
                tracing::debug!("IntersectionObserver unavailable, polling geometry: {e:?}");
                GeometryWatch::start(element, on_reveal).map(|watch| Watch::Geometry { _watch: watch })
            }
        }
    }
}

struct ObserverWatch {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl ObserverWatch {
    fn start(
        element: &web_sys::HtmlDivElement,
        on_reveal: impl Fn() + 'static,
    ) -> Result<Self, JsValue> {
        let mut latch = RevealLatch::new();
        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let intersecting = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .any(|entry| entry.is_intersecting());
                if latch.observe(intersecting) == Transition::Revealed {
                    on_reveal();
                }
            },
        );
        let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
        observer.observe(element);
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ObserverWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

struct GeometryWatch {
    window: web_sys::Window,
    callback: ListenerCallback,
}

impl GeometryWatch {
    /// Listens for scroll and resize, and samples once right away so a block
    /// mounted inside the viewport does not wait for the first scroll.
    fn start(
        element: &web_sys::HtmlDivElement,
        on_reveal: impl Fn() + 'static,
    ) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let mut latch = RevealLatch::new();
        let target = element.clone();
        let view = window.clone();
        let callback: ListenerCallback = Closure::new(move || {
            let bounds = target.get_bounding_client_rect();
            let rect = Rect::new(bounds.top(), bounds.left(), bounds.width(), bounds.height());
            if sample(&mut latch, viewport_of(&view), &rect) == Transition::Revealed {
                on_reveal();
            }
        });

        let watch = Self { window, callback };
        for event in GEOMETRY_EVENTS {
            watch
                .window
                .add_event_listener_with_callback(event, watch.callback.as_ref().unchecked_ref())?;
        }
        let check: &js_sys::Function = watch.callback.as_ref().unchecked_ref();
        check.call0(&JsValue::NULL)?;
        Ok(watch)
    }
}

impl Drop for GeometryWatch {
    fn drop(&mut self) {
        for event in GEOMETRY_EVENTS {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref());
        }
    }
}

fn viewport_of(window: &web_sys::Window) -> Option<Viewport> {
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Viewport::new(width, height))
}

/// Feeds one geometry sample into the latch. With no measurable viewport
/// the block is shown rather than hidden forever.
fn sample(latch: &mut RevealLatch, viewport: Option<Viewport>, rect: &Rect) -> Transition {
    match viewport {
        Some(viewport) => latch.observe_box(&viewport, rect),
        None => latch.observe(true),
    }
}

#[component]
pub fn Reveal(
    /// Position inside a grid; delays the animation by `index * step`.
    #[prop(optional)]
    index: usize,
    /// Per-index delay, defaults to the configured stagger.
    #[prop(optional)]
    step_ms: Option<u32>,
    #[prop(optional_no_strip)]
    motion: Option<Motion>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let timing = timing_for(&use_site(), index, step_ms, motion);
    let (visibility, set_visibility) = signal(Visibility::Hidden);
    let node = NodeRef::<leptos::html::Div>::new();
    let watch = StoredValue::new_local(None::<Watch>);

    Effect::new(move || {
        let Some(element) = node.get() else {
            return;
        };
        if watch.with_value(Option::is_some) || visibility.get_untracked() == Visibility::Visible {
            return;
        }
        let on_reveal = move || {
            set_visibility.set(Visibility::Visible);
            // Drop on the next tick; the callback is still running.
            request_animation_frame(move || {
                let _ = watch.try_update_value(Option::take);
            });
        };
        match Watch::start(&element, on_reveal) {
            Ok(active) => watch.set_value(Some(active)),
            Err(e) => {
                tracing::warn!("cannot watch block, showing it: {e:?}");
                set_visibility.set(Visibility::Visible);
            }
        }
    });

    on_cleanup(move || {
        let _ = watch.try_update_value(Option::take);
    });

    let class = if class.is_empty() {
        "reveal".to_string()
    } else {
        format!("reveal {class}")
    };

    view! {
        <div node_ref=node class=class style=move || timing.style(visibility.get())>
            {children()}
        </div>
    }
}

fn timing_for(
    site: &shootsync::SiteConfig,
    index: usize,
    step_ms: Option<u32>,
    motion: Option<Motion>,
) -> RevealTiming {
    let mut timing = site.reveal.timing(index);
    if let Some(step) = step_ms {
        timing = timing.with_delay(stagger_delay(index, step));
    }
    if let Some(motion) = motion {
        timing = timing.with_motion(motion);
    }
    timing
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_step_overrides_configured_stagger() {
        let site = shootsync::SiteConfig::default();
        assert_eq!(timing_for(&site, 3, None, None).delay_ms, 300);
        assert_eq!(timing_for(&site, 3, Some(200), None).delay_ms, 600);
    }

    #[test]
    fn motion_override() {
        let site = shootsync::SiteConfig::default();
        let timing = timing_for(&site, 0, None, Some(Motion::Grow(0.8)));
        assert_eq!(timing.motion, Motion::Grow(0.8));
        assert_eq!(timing.duration_ms, 600);
    }

    #[test]
    fn polled_block_waits_for_the_viewport() {
        let viewport = Some(Viewport::new(390.0, 844.0));
        let mut latch = RevealLatch::new();
        let below_fold = Rect::new(1400.0, 0.0, 390.0, 260.0);
        assert_eq!(sample(&mut latch, viewport, &below_fold), Transition::Unchanged);
        assert!(!latch.is_visible());

        let scrolled_in = Rect::new(700.0, 0.0, 390.0, 260.0);
        assert_eq!(sample(&mut latch, viewport, &scrolled_in), Transition::Revealed);
        assert_eq!(sample(&mut latch, viewport, &below_fold), Transition::Unchanged);
        assert!(latch.is_visible());
    }

    #[test]
    fn unmeasurable_viewport_shows_the_block() {
        let mut latch = RevealLatch::new();
        let rect = Rect::new(5000.0, 0.0, 100.0, 100.0);
        assert_eq!(sample(&mut latch, None, &rect), Transition::Revealed);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen_futures::JsFuture;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const OFF_SCREEN: i32 = 100_000;

    fn block(top_px: i32) -> web_sys::HtmlDivElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let div: web_sys::HtmlDivElement = document.create_element("div").unwrap().dyn_into().unwrap();
        place(&div, top_px);
        document.body().unwrap().append_child(&div).unwrap();
        div
    }

    fn place(div: &web_sys::HtmlDivElement, top_px: i32) {
        div.set_attribute(
            "style",
            &format!("position:fixed;left:0;top:{top_px}px;width:10px;height:10px"),
        )
        .unwrap();
    }

    fn scroll() {
        let event = web_sys::Event::new("scroll").unwrap();
        web_sys::window().unwrap().dispatch_event(&event).unwrap();
    }

    fn counter() -> (Rc<Cell<u32>>, impl Fn() + Clone + 'static) {
        let hits = Rc::new(Cell::new(0));
        let bump = {
            let hits = Rc::clone(&hits);
            move || hits.set(hits.get() + 1)
        };
        (hits, bump)
    }

    async fn settle(ms: i32) {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            web_sys::window()
                .unwrap()
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
                .unwrap();
        });
        JsFuture::from(promise).await.unwrap();
    }

    #[wasm_bindgen_test]
    fn geometry_watch_reveals_once() {
        let div = block(OFF_SCREEN);
        let (hits, on_reveal) = counter();
        let _watch = GeometryWatch::start(&div, on_reveal).unwrap();
        scroll();
        assert_eq!(hits.get(), 0);

        place(&div, 0);
        scroll();
        assert_eq!(hits.get(), 1);

        place(&div, OFF_SCREEN);
        scroll();
        place(&div, 0);
        scroll();
        assert_eq!(hits.get(), 1);
        div.remove();
    }

    #[wasm_bindgen_test]
    fn geometry_watch_samples_on_start() {
        let div = block(0);
        let (hits, on_reveal) = counter();
        let _watch = GeometryWatch::start(&div, on_reveal).unwrap();
        assert_eq!(hits.get(), 1);
        div.remove();
    }

    #[wasm_bindgen_test]
    fn dropped_geometry_watch_stops_listening() {
        let div = block(OFF_SCREEN);
        let (hits, on_reveal) = counter();
        let watch = GeometryWatch::start(&div, on_reveal).unwrap();
        drop(watch);

        place(&div, 0);
        scroll();
        assert_eq!(hits.get(), 0);
        div.remove();
    }

    #[wasm_bindgen_test]
    async fn observer_watch_reveals_visible_block() {
        let div = block(0);
        let (hits, on_reveal) = counter();
        let _watch = ObserverWatch::start(&div, on_reveal).unwrap();
        settle(200).await;
        assert_eq!(hits.get(), 1);
        div.remove();
    }

    #[wasm_bindgen_test]
    async fn dropped_observer_watch_is_disconnected() {
        let div = block(0);
        let (hits, on_reveal) = counter();
        let watch = ObserverWatch::start(&div, on_reveal).unwrap();
        drop(watch);
        settle(200).await;
        assert_eq!(hits.get(), 0);
        div.remove();
    }
}
