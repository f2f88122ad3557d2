#![no_main]

use libfuzzer_sys::fuzz_target;
use heapkit::ds::GrowableArray;
use heapkit::error::HeapError;

// Fuzz arbitrary operation sequences on GrowableArray
//
// Mirrors every operation on a Vec and checks bounds handling, growth and
// length bookkeeping.
fuzz_target!(|data: &[u8]| {
    let mut array: GrowableArray<u8> = GrowableArray::with_capacity(1);
    let mut model: Vec<u8> = Vec::new();

    for chunk in data.chunks(3) {
        if chunk.len() < 3 {
            break;
        }

        let op = chunk[0] % 5;
        let index = usize::from(chunk[1]);
        let value = chunk[2];

        match op {
            0 => {
                assert_eq!(array.push(value), model.len());
                model.push(value);
            }
            1 => {
                assert_eq!(array.pop().ok(), model.pop());
            }
            2 => match model.get(index) {
                Some(v) => assert_eq!(array.get(index), Ok(v)),
                None => assert_eq!(
                    array.get(index),
                    Err(HeapError::OutOfRange { index, len: model.len() })
                ),
            },
            3 => {
                let got = array.set(index, value);
                if index < model.len() {
                    assert_eq!(got, Ok(std::mem::replace(&mut model[index], value)));
                } else {
                    assert!(got.is_err());
                }
            }
            4 => {
                let other = usize::from(value);
                let got = array.swap(index, other);
                if index < model.len() && other < model.len() {
                    assert!(got.is_ok());
                    model.swap(index, other);
                } else {
                    assert!(got.is_err());
                }
            }
            _ => unreachable!(),
        }

        assert_eq!(array.len(), model.len());
        assert!(array.len() <= array.capacity());
        assert_eq!(array.as_slice(), model.as_slice());
    }
});
