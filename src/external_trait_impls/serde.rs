use core::fmt;
use core::marker::PhantomData;

use serde_::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde_::ser::{Serialize, Serializer};

use crate::{ArrayDeque, LinkedDeque};

// Both deques (de)serialize as a plain front-to-back sequence.
macro_rules! serde_seq {
    ($deque:ident, $visitor:ident) => {
        impl<T> Serialize for $deque<T>
        where
            T: Serialize,
        {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.collect_seq(self)
            }
        }

        impl<'de, T> Deserialize<'de> for $deque<T>
        where
            T: Deserialize<'de>,
        {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                struct $visitor<T> {
                    marker: PhantomData<T>,
                }
                impl<'de, T> Visitor<'de> for $visitor<T>
                where
                    T: Deserialize<'de>,
                {
                    type Value = $deque<T>;
                    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                        formatter.write_str("a sequence")
                    }
                    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
                    where
                        A: SeqAccess<'de>,
                    {
                        let mut values = $deque::new();
                        while let Some(value) = seq.next_element()? {
                            values.add_last(value);
                        }
                        Ok(values)
                    }
                }
                let visitor = $visitor {
                    marker: PhantomData,
                };
                deserializer.deserialize_seq(visitor)
            }
        }
    };
}

serde_seq!(ArrayDeque, ArrayDequeVisitor);
serde_seq!(LinkedDeque, LinkedDequeVisitor);
