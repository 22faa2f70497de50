/// The parts of a view hierarchy installation touches.
pub trait ViewHierarchy<V> {
    /// Whether `child` is a direct subview of `container`.
    fn contains(&self, container: &V, child: &V) -> bool;

    /// Make `child` a subview of `container`, detaching it from any previous parent.
    fn add_child(&mut self, container: &V, child: &V);

    /// Whether the view's frame is turned into implicit constraints.
    fn set_translates_autoresizing(&mut self, view: &V, enabled: bool);
}
