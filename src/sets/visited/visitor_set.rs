pub trait VisitedSet {
    fn get(&self, i: usize) -> bool;
    fn set(&mut self, i: usize);
    fn count(&self) -> usize;
}
