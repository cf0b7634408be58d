#![no_main]

use libfuzzer_sys::fuzz_target;

use fixvec::FixedCapacityVector;

const CAP: usize = 16;

/// Replays `data` as a sequence of operations on a vector and on a `std` model, checking after
/// every step that they agree.
fn replay(data: &[u8]) {
    let mut vec = FixedCapacityVector::<u8, CAP>::new();
    let mut model: Vec<u8> = Vec::new();

    for op in data.chunks_exact(3) {
        let (kind, a, b) = (op[0] % 8, op[1], op[2]);
        let len = model.len();
        match kind {
            0 => {
                let fits = len < CAP;
                assert_eq!(vec.push(a).is_ok(), fits);
                if fits {
                    model.push(a);
                }
            }
            1 => assert_eq!(vec.pop(), model.pop()),
            2 => {
                let index = usize::from(a) % (len + 1);
                let fits = len < CAP;
                assert_eq!(vec.insert(index, b).is_ok(), fits);
                if fits {
                    model.insert(index, b);
                }
            }
            3 if len > 0 => {
                let index = usize::from(a) % len;
                assert_eq!(vec.remove(index), model.remove(index));
            }
            4 => {
                let start = usize::from(a) % (len + 1);
                let end = start + usize::from(b) % (len - start + 1);
                assert_eq!(vec.erase(start..end), start);
                model.drain(start..end);
            }
            5 => {
                let index = usize::from(a) % (len + 1);
                let count = usize::from(b) % 8;
                let fits = len + count <= CAP;
                assert_eq!(vec.insert_n(index, count, &b).is_ok(), fits);
                if fits {
                    model.splice(index..index, core::iter::repeat(b).take(count));
                }
            }
            6 => {
                let index = usize::from(a) % (len + 1);
                let extra: Vec<u8> = (0..usize::from(b) % 8).map(|i| i as u8).collect();
                let fits = len + extra.len() <= CAP;
                assert_eq!(vec.insert_iter(index, extra.iter().copied()).is_ok(), fits);
                if fits {
                    model.splice(index..index, extra);
                }
            }
            7 => assert_eq!(vec.at(usize::from(a)).ok(), model.get(usize::from(a))),
            _ => {}
        }

        assert_eq!(vec.as_slice(), model.as_slice());
        assert!(vec.len() <= vec.max_size());
    }
}

fuzz_target!(|data: &[u8]| {
    replay(data);
});
