/// Cycles through a fixed list of labels, one step per timer tick.
#[derive(Clone, Debug, PartialEq)]
pub struct RotatingLabelTicker {
    labels: Vec<String>,
    index: usize,
    cancelled: bool,
}

impl RotatingLabelTicker {
    pub fn new(labels: Vec<String>) -> Self {
        Self {
            labels,
            index: 0,
            cancelled: false,
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.labels.get(self.index).map(String::as_str)
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn tick(&mut self) {
        if self.cancelled || self.labels.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.labels.len();
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles() -> Vec<String> {
        vec![
            "Creative Developer".to_string(),
            "UI/UX Designer".to_string(),
            "Frontend Engineer".to_string(),
        ]
    }

    #[test]
    fn label_after_k_ticks_wraps_modulo_length() {
        let labels = roles();
        let mut ticker = RotatingLabelTicker::new(labels.clone());
        assert_eq!(ticker.current(), Some("Creative Developer"));

        for k in 1..=10 {
            ticker.tick();
            assert_eq!(ticker.current(), Some(labels[k % 3].as_str()));
        }
    }

    #[test]
    fn cancelled_ticker_stops_changing() {
        let mut ticker = RotatingLabelTicker::new(roles());
        ticker.tick();
        ticker.cancel();
        ticker.tick();
        ticker.tick();
        assert!(ticker.is_cancelled());
        assert_eq!(ticker.current(), Some("UI/UX Designer"));
    }

    #[test]
    fn empty_label_list_is_inert() {
        let mut ticker = RotatingLabelTicker::new(Vec::new());
        ticker.tick();
        assert_eq!(ticker.current(), None);
    }
}
