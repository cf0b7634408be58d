use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::FixedCapacityVector;

impl<T, const N: usize> Serialize for FixedCapacityVector<T, N>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}
