/// A key and its mapped value, stored inline in a tree node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Entry<K, V> {
    pub fn into_pair(self) -> (K, V) {
        let Entry { key, value } = self;
        (key, value)
    }

    pub fn as_pair(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }
}
