use core::{fmt, marker::PhantomData};

use serde::de::{self, Deserialize, Deserializer, Error, SeqAccess};

use crate::FixedCapacityVector;

impl<'de, T, const N: usize> Deserialize<'de> for FixedCapacityVector<T, N>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor<'de, T, const N: usize>(PhantomData<(&'de (), T)>);

        impl<'de, T, const N: usize> de::Visitor<'de> for ValueVisitor<'de, T, N>
        where
            T: Deserialize<'de>,
        {
            type Value = FixedCapacityVector<T, N>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(formatter, "a sequence of at most {} elements", N)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut values = FixedCapacityVector::new();

                while let Some(value) = seq.next_element()? {
                    if values.push(value).is_err() {
                        return Err(A::Error::invalid_length(N + 1, &self));
                    }
                }

                Ok(values)
            }
        }

        deserializer.deserialize_seq(ValueVisitor(PhantomData))
    }
}
