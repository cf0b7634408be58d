use ufmt_write::uWrite;

use crate::{Error, FixedCapacityVector};

impl<const N: usize> uWrite for FixedCapacityVector<u8, N> {
    type Error = Error;
    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.extend_from_slice(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use ufmt::{derive::uDebug, uwrite};

    use crate::{Error, FixedCapacityVector};

    #[derive(uDebug)]
    struct Pair {
        x: u32,
        y: u32,
    }

    #[test]
    fn test_vec() {
        let a = 123;
        let b = Pair { x: 0, y: 1234 };

        let mut v = FixedCapacityVector::<u8, 32>::new();
        uwrite!(v, "{} -> {:?}", a, b).unwrap();

        assert_eq!(v, b"123 -> Pair { x: 0, y: 1234 }");
    }

    #[test]
    fn test_vec_err() {
        let p = Pair { x: 0, y: 1234 };
        let mut v = FixedCapacityVector::<u8, 4>::new();
        assert_eq!(
            uwrite!(v, "{:?}", p),
            Err(Error::CapacityExceeded { capacity: 4 })
        );
    }
}
