//! The only place that touches `web_sys` listeners directly.

use log::error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, Node, Window};
use yew::{Callback, NodeRef};

use crate::error::DomError;
use crate::nav::outside_click::{classify, ListenerHost, PointerDown, Subscription};
use crate::nav::state::NavAction;

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn scroll_to_top() {
    if let Ok(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

pub struct Listener {
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl ListenerHost for EventTarget {
    type Token = Listener;

    fn detach(&self, listener: Listener) {
        if let Err(err) = self.remove_event_listener_with_callback(
            listener.event,
            listener.closure.as_ref().unchecked_ref(),
        ) {
            error!("Failed to remove {} listener: {:?}", listener.event, err);
        }
    }
}

pub type DomSubscription = Subscription<EventTarget>;

/// Attaches `handler` to `target`. The listener lives until the returned guard is dropped.
pub fn listen<F>(
    target: &EventTarget,
    event: &'static str,
    handler: F,
) -> Result<DomSubscription, DomError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|err| DomError::listener(event, err))?;
    Ok(Subscription::new(target.clone(), Listener { event, closure }))
}

/// Document-wide pointer-down watcher for the services dropdown.
///
/// `regions` are the trigger and the panel; presses inside either are ignored.
pub fn watch_outside_presses(
    regions: [NodeRef; 2],
    sink: Callback<NavAction>,
) -> Result<DomSubscription, DomError> {
    let document = document()?;
    listen(&document, "pointerdown", move |event: Event| {
        let Some(target) = event
            .target()
            .and_then(|target| target.dyn_into::<Node>().ok())
        else {
            return;
        };
        if classify(&target, &regions) == PointerDown::Outside {
            sink.emit(NavAction::PointerDownOutside);
        }
    })
}

/// Appends an async `<script>` once. Returns `false` if `id` is already on the page.
pub fn inject_script(src: &str, id: &str) -> Result<bool, DomError> {
    let document = document()?;
    if document.get_element_by_id(id).is_some() {
        return Ok(false);
    }

    let script = document
        .create_element("script")
        .map_err(|err| DomError::script(src, err))?;
    script.set_id(id);
    script
        .set_attribute("src", src)
        .map_err(|err| DomError::script(src, err))?;
    script
        .set_attribute("async", "")
        .map_err(|err| DomError::script(src, err))?;

    let body = document.body().ok_or_else(|| DomError::Script {
        src: src.to_string(),
        reason: "document has no body".to_string(),
    })?;
    body.append_child(&script)
        .map_err(|err| DomError::script(src, err))?;
    Ok(true)
}
