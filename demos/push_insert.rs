//! Builds a small vector with `push` and `insert_slice` and prints it.

use fixvec::{Error, FixedCapacityVector};

fn main() -> Result<(), Error> {
    let mut vec: FixedCapacityVector<i32, 10> = FixedCapacityVector::new();
    vec.push(5)?;
    vec.insert_slice(1, &[2, 3, 5, 4, 4, 2, 5])?;

    for x in &vec {
        println!("{x}");
    }

    Ok(())
}
