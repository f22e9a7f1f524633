use crate::compare::Compare;
use crate::red_black_tree::map::RedBlackMap;
use crate::red_black_tree::multiset::RedBlackMultiset;
use crate::red_black_tree::set::RedBlackSet;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::fmt;
use std::marker::PhantomData;

impl<K, V, C> Serialize for RedBlackMap<K, V, C>
where
    K: Serialize,
    V: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<T, C> Serialize for RedBlackSet<T, C>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for key in self {
            seq.serialize_element(key)?;
        }
        seq.end()
    }
}

impl<T, C> Serialize for RedBlackMultiset<T, C>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for key in self {
            seq.serialize_element(key)?;
        }
        seq.end()
    }
}

// Later entries with an equal key replace the value of earlier ones.
impl<'de, K, V, C> Deserialize<'de> for RedBlackMap<K, V, C>
where
    K: Deserialize<'de>,
    V: Deserialize<'de>,
    C: Compare<K> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RedBlackMapVisitor {
            phantom: PhantomData,
        })
    }
}

struct RedBlackMapVisitor<K, V, C> {
    phantom: PhantomData<(K, V, C)>,
}

impl<'de, K, V, C> Visitor<'de> for RedBlackMapVisitor<K, V, C>
where
    K: Deserialize<'de>,
    V: Deserialize<'de>,
    C: Compare<K> + Default,
{
    type Value = RedBlackMap<K, V, C>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = RedBlackMap::with_comparator(C::default());
        while let Some((key, value)) = access.next_entry()? {
            map.insert_or_assign(key, value).map_err(de::Error::custom)?;
        }
        Ok(map)
    }
}

impl<'de, T, C> Deserialize<'de> for RedBlackSet<T, C>
where
    T: Deserialize<'de>,
    C: Compare<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(RedBlackSetVisitor {
            phantom: PhantomData,
        })
    }
}

struct RedBlackSetVisitor<T, C> {
    phantom: PhantomData<(T, C)>,
}

impl<'de, T, C> Visitor<'de> for RedBlackSetVisitor<T, C>
where
    T: Deserialize<'de>,
    C: Compare<T> + Default,
{
    type Value = RedBlackSet<T, C>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut set = RedBlackSet::with_comparator(C::default());
        while let Some(key) = access.next_element()? {
            set.insert(key).map_err(de::Error::custom)?;
        }
        Ok(set)
    }
}

impl<'de, T, C> Deserialize<'de> for RedBlackMultiset<T, C>
where
    T: Deserialize<'de>,
    C: Compare<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(RedBlackMultisetVisitor {
            phantom: PhantomData,
        })
    }
}

struct RedBlackMultisetVisitor<T, C> {
    phantom: PhantomData<(T, C)>,
}

impl<'de, T, C> Visitor<'de> for RedBlackMultisetVisitor<T, C>
where
    T: Deserialize<'de>,
    C: Compare<T> + Default,
{
    type Value = RedBlackMultiset<T, C>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut multiset = RedBlackMultiset::with_comparator(C::default());
        while let Some(key) = access.next_element()? {
            multiset.insert(key).map_err(de::Error::custom)?;
        }
        Ok(multiset)
    }
}

#[cfg(test)]
mod tests {
    use crate::compare::{Natural, Reversed};
    use crate::red_black_tree::{RedBlackMap, RedBlackMultiset, RedBlackSet};
    use serde_test::{assert_de_tokens, assert_tokens, Token};

    #[test]
    fn test_map_tokens() {
        let mut map = RedBlackMap::new();
        map.insert(2u32, 'b').unwrap();
        map.insert(1u32, 'a').unwrap();
        assert_tokens(
            &map,
            &[
                Token::Map { len: Some(2) },
                Token::U32(1),
                Token::Char('a'),
                Token::U32(2),
                Token::Char('b'),
                Token::MapEnd,
            ],
        );
    }

    #[test]
    fn test_map_last_value_wins() {
        let mut map = RedBlackMap::new();
        map.insert(1u32, 3u32).unwrap();
        assert_de_tokens(
            &map,
            &[
                Token::Map { len: Some(2) },
                Token::U32(1),
                Token::U32(2),
                Token::U32(1),
                Token::U32(3),
                Token::MapEnd,
            ],
        );
    }

    #[test]
    fn test_set_tokens_with_comparator() {
        let mut set = RedBlackSet::with_comparator(Reversed(Natural));
        for key in 0..3u8 {
            set.insert(key).unwrap();
        }
        assert_tokens(
            &set,
            &[
                Token::Seq { len: Some(3) },
                Token::U8(2),
                Token::U8(1),
                Token::U8(0),
                Token::SeqEnd,
            ],
        );
    }

    #[test]
    fn test_multiset_tokens() {
        let multiset: RedBlackMultiset<u8> = vec![3, 1, 3].into_iter().collect();
        assert_tokens(
            &multiset,
            &[
                Token::Seq { len: Some(3) },
                Token::U8(1),
                Token::U8(3),
                Token::U8(3),
                Token::SeqEnd,
            ],
        );
    }
}
