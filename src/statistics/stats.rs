use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    distance_queries: usize,
    cache_hits: usize,
    searches: usize,
    nodes_settled: usize,
}

impl Stats {
    pub fn new() -> Self {
        Stats {
            distance_queries: 0,
            cache_hits: 0,
            searches: 0,
            nodes_settled: 0,
        }
    }

    /// Record that a distance between two nodes was asked for
    pub fn bump_distance_queries(&mut self) {
        self.distance_queries += 1
    }

    /// Record that a query was answered without running a search
    pub fn bump_cache_hits(&mut self) {
        self.cache_hits += 1
    }

    /// Record a shortest-path search that settled `settled` nodes before stopping
    pub fn bump_search(&mut self, settled: usize) {
        self.searches += 1;
        self.nodes_settled += settled
    }

    pub fn get_distance_queries(&self) -> usize {
        self.distance_queries
    }

    pub fn get_cache_hits(&self) -> usize {
        self.cache_hits
    }

    pub fn get_searches(&self) -> usize {
        self.searches
    }

    pub fn get_nodes_settled(&self) -> usize {
        self.nodes_settled
    }

    pub fn merge(&self, other: &Stats) -> Stats {
        Stats {
            distance_queries: self.distance_queries + other.distance_queries,
            cache_hits: self.cache_hits + other.cache_hits,
            searches: self.searches + other.searches,
            nodes_settled: self.nodes_settled + other.nodes_settled,
        }
    }

    /// Write all counters to the log at info level
    pub fn summary(&self) {
        let avg_settled = if self.searches > 0 {
            self.nodes_settled as f64 / self.searches as f64
        } else {
            0.0
        };
        info!(
            queries = self.distance_queries,
            cache_hits = self.cache_hits,
            searches = self.searches,
            nodes_settled = self.nodes_settled,
            "distance model stats: {avg_settled:.2} nodes settled per search"
        );
    }
}

impl Default for Stats {
    fn default() -> Self {
        Stats::new()
    }
}
