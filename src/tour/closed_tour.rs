use crate::graph::NodeId;

/// One leg of a tour as handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: NodeId,
    pub to: NodeId,
    pub distance: f64,
    /// `true` only for the leg returning from the last stop to the start.
    pub closing: bool,
}

/// A closed visiting order over a sample.
///
/// `stops[i]` is the `i`-th node visited and `sample_positions[i]` its position in the
/// sample the tour was built from. `forward[i]` is the length of the leg from
/// `stops[i]` to `stops[i + 1]`; the return leg to `stops[0]` is kept apart in
/// `closing` because it is drawn differently.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    stops: Vec<NodeId>,
    sample_positions: Vec<usize>,
    forward: Vec<f64>,
    closing: f64,
}

impl Tour {
    /// Assembles a tour from raw parts without checking them; [`evaluate`](crate::tour::evaluate)
    /// rejects inconsistent edge counts.
    pub fn from_parts(
        stops: Vec<NodeId>,
        sample_positions: Vec<usize>,
        forward: Vec<f64>,
        closing: f64,
    ) -> Self {
        Tour {
            stops,
            sample_positions,
            forward,
            closing,
        }
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn stops(&self) -> &[NodeId] {
        &self.stops
    }

    pub fn sample_positions(&self) -> &[usize] {
        &self.sample_positions
    }

    pub fn forward_distances(&self) -> &[f64] {
        &self.forward
    }

    pub fn closing_distance(&self) -> f64 {
        self.closing
    }

    pub fn start(&self) -> Option<NodeId> {
        self.stops.first().copied()
    }

    /// All legs in visiting order, the closing leg last. Empty for an empty tour.
    pub fn segments(&self) -> Vec<Segment> {
        let Some(start) = self.start() else {
            return Vec::new();
        };

        let mut legs: Vec<Segment> = self
            .stops
            .windows(2)
            .zip(&self.forward)
            .map(|(pair, &distance)| Segment {
                from: pair[0],
                to: pair[1],
                distance,
                closing: false,
            })
            .collect();

        let last = self.stops[self.stops.len() - 1];
        legs.push(Segment {
            from: last,
            to: start,
            distance: self.closing,
            closing: true,
        });
        legs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[usize]) -> Vec<NodeId> {
        raw.iter().map(|&i| NodeId::new(i)).collect()
    }

    #[test]
    fn test_segments_end_with_closing_leg() {
        let tour = Tour::from_parts(ids(&[4, 2, 7]), vec![0, 2, 1], vec![1.0, 2.0], 3.0);
        let legs = tour.segments();

        assert_eq!(legs.len(), 3);
        assert_eq!(legs[0].from, NodeId::new(4));
        assert_eq!(legs[0].to, NodeId::new(2));
        assert!(!legs[1].closing);
        assert_eq!(legs[2].from, NodeId::new(7));
        assert_eq!(legs[2].to, NodeId::new(4));
        assert_eq!(legs[2].distance, 3.0);
        assert!(legs[2].closing);
    }

    #[test]
    fn test_single_stop_has_self_loop() {
        let tour = Tour::from_parts(ids(&[9]), vec![0], vec![], 0.0);
        let legs = tour.segments();
        assert_eq!(legs.len(), 1);
        assert_eq!(legs[0].from, legs[0].to);
        assert!(legs[0].closing);
    }

    #[test]
    fn test_empty_tour_has_no_segments() {
        let tour = Tour::from_parts(vec![], vec![], vec![], 0.0);
        assert!(tour.is_empty());
        assert!(tour.segments().is_empty());
        assert_eq!(tour.start(), None);
    }
}
