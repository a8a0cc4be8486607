//! Subtree mutation subscription.
use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{MutationObserver, MutationObserverInit, Node};

/// Calls back whenever nodes are added to or removed from anywhere under the
/// observed node. Disconnects when dropped.
pub struct ContentObserver {
    observer: MutationObserver,
    _callback: Closure<dyn FnMut(Array, MutationObserver)>,
}

impl ContentObserver {
    /// Start observing `target`. `on_change` runs once per batch of records.
    ///
    /// # Errors
    /// Returns an error if the browser refuses to create or attach the observer.
    pub fn observe(target: &Node, mut on_change: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Array, MutationObserver)>::new(
            move |_records: Array, _observer: MutationObserver| on_change(),
        );
        let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;
        let init = MutationObserverInit::new();
        init.set_child_list(true);
        init.set_subtree(true);
        observer.observe_with_options(target, &init)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    /// Stop delivering callbacks. Safe to call more than once.
    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl Drop for ContentObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}
