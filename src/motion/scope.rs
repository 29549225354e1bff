/// A live visibility subscription that can be torn down.
pub trait Observation {
    fn disconnect(&mut self);
}

/// Owns an [`Observation`] for the lifetime of a mounted component and
/// disconnects it exactly once, either through [`ObservationScope::release`]
/// or when dropped by the effect teardown.
pub struct ObservationScope<O: Observation> {
    observation: Option<O>,
}

impl<O: Observation> ObservationScope<O> {
    pub fn new(observation: O) -> Self {
        Self {
            observation: Some(observation),
        }
    }

    pub fn release(&mut self) {
        if let Some(mut observation) = self.observation.take() {
            observation.disconnect();
        }
    }
}

impl<O: Observation> Drop for ObservationScope<O> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Counter(Rc<Cell<u32>>);

    impl Observation for Counter {
        fn disconnect(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn explicit_release_then_drop_disconnects_once() {
        let count = Rc::new(Cell::new(0));
        let mut scope = ObservationScope::new(Counter(count.clone()));
        scope.release();
        scope.release();
        drop(scope);

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn unwinding_still_disconnects() {
        let count = Rc::new(Cell::new(0));
        let inner = count.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _scope = ObservationScope::new(Counter(inner));
            panic!("render failed");
        }));
        assert!(result.is_err());
        assert_eq!(count.get(), 1);
    }
}
