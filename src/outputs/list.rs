/// A sink for triangles given as triplets of vertices of type `V`, usually vertex indices
pub trait List<V> {
    /// Add a new triangle to the list
    fn push(&mut self, v0: V, v1: V, v2: V);

    /// The number of triangles in the list
    fn len(&self) -> usize;

    /// Remove newly added triangles until there are only `len` remaining
    fn truncate(&mut self, len: usize);

    /// Returns `true` if the list contains no triangles
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push_triangle(&mut self, [v0, v1, v2]: [V; 3]) {
        self.push(v0, v1, v2)
    }
}

/// Flat, three entries per triangle
impl<V> List<V> for Vec<V> {
    fn push(&mut self, v0: V, v1: V, v2: V) {
        self.extend([v0, v1, v2]);
    }

    fn len(&self) -> usize {
        Vec::len(self) / 3
    }

    fn truncate(&mut self, len: usize) {
        Vec::truncate(self, len * 3)
    }
}

impl<V> List<V> for Vec<[V; 3]> {
    fn push(&mut self, v0: V, v1: V, v2: V) {
        Vec::push(self, [v0, v1, v2]);
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn truncate(&mut self, len: usize) {
        Vec::truncate(self, len)
    }
}

impl<V> List<V> for Vec<(V, V, V)> {
    fn push(&mut self, v0: V, v1: V, v2: V) {
        Vec::push(self, (v0, v1, v2));
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn truncate(&mut self, len: usize) {
        Vec::truncate(self, len)
    }
}

impl<V, L: List<V> + ?Sized> List<V> for &mut L {
    fn push(&mut self, v0: V, v1: V, v2: V) {
        (**self).push(v0, v1, v2)
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn truncate(&mut self, len: usize) {
        (**self).truncate(len)
    }
}
