//! In-memory agent list shared with the display layer.
//!
//! The engine does not render anything itself; an external collaborator
//! (typically a UI) owns agent editing and consumes solver outputs. The
//! contract between the two is deliberately small: the collaborator can
//! read the current buyer/seller values as plain numeric arrays and
//! register a recompute callback that fires whenever the data changes.
//! Serialized position formats (permalinks and the like) stay on the
//! collaborator's side of the seam.

/// Callback invoked with the fresh buyer and seller values after every
/// mutation.
pub type RecomputeFn = Box<dyn FnMut(&[f64], &[f64])>;

/// The editable set of market agents.
#[derive(Default)]
pub struct AgentList {
    buyers: Vec<f64>,
    sellers: Vec<f64>,
    callbacks: Vec<RecomputeFn>,
}

impl AgentList {
    pub fn new() -> Self {
        AgentList::default()
    }

    /// Current buyer valuations.
    pub fn buyers(&self) -> Vec<f64> {
        self.buyers.clone()
    }

    /// Current seller valuations.
    pub fn sellers(&self) -> Vec<f64> {
        self.sellers.clone()
    }

    /// Register a recompute callback. All registered callbacks run, in
    /// registration order, after every mutation.
    pub fn on_change(&mut self, callback: RecomputeFn) {
        self.callbacks.push(callback);
    }

    pub fn set_buyers(&mut self, values: Vec<f64>) {
        self.buyers = values;
        self.notify();
    }

    pub fn set_sellers(&mut self, values: Vec<f64>) {
        self.sellers = values;
        self.notify();
    }

    pub fn push_buyer(&mut self, value: f64) {
        self.buyers.push(value);
        self.notify();
    }

    pub fn push_seller(&mut self, value: f64) {
        self.sellers.push(value);
        self.notify();
    }

    pub fn clear(&mut self) {
        self.buyers.clear();
        self.sellers.clear();
        self.notify();
    }

    fn notify(&mut self) {
        let AgentList {
            buyers,
            sellers,
            callbacks,
        } = self;
        for callback in callbacks.iter_mut() {
            callback(buyers, sellers);
        }
    }
}
