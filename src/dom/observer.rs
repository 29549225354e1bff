use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::motion::scope::Observation;
use crate::motion::visibility::{ObserverOptions, VisibilityEntry};

#[derive(Debug, Error)]
pub enum ObserverError {
    #[error("intersection observer unavailable: {0}")]
    Unsupported(String),
}

/// Browser IntersectionObserver feeding batches of [`VisibilityEntry`] to a
/// callback. Targets `key` cannot name are dropped from the batch. The
/// closure lives as long as the observer does.
pub struct DomObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl DomObserver {
    pub fn watch<K, F>(
        targets: &[Element],
        options: ObserverOptions,
        key: fn(&Element) -> Option<K>,
        mut on_batch: F,
    ) -> Result<Self, ObserverError>
    where
        K: 'static,
        F: FnMut(Vec<VisibilityEntry<K>>) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            let batch: Vec<VisibilityEntry<K>> = entries
                .iter()
                .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    let target = key(&entry.target())?;
                    Some(VisibilityEntry::new(
                        target,
                        entry.intersection_ratio(),
                        entry.is_intersecting(),
                    ))
                })
                .collect();
            on_batch(batch);
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        if let Some(margin) = options.root_margin {
            init.set_root_margin(margin);
        }

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|err| ObserverError::Unsupported(format!("{:?}", err)))?;

        for target in targets {
            observer.observe(target);
        }

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Observation for DomObserver {
    fn disconnect(&mut self) {
        self.observer.disconnect();
    }
}
