//! AFL fuzz harness for SeqList
//!
//! Every decoded operation is applied to a `SeqList<u8>` and to a plain
//! `Vec<u8>` model. Results and contents must agree after each step.

use afl::fuzz;
use seqlist::{ListError, SeqList};

/// Operation types the fuzzer can generate
#[derive(Debug, Clone, Copy)]
enum FuzzOp {
    Insert { pos: u8, value: u8 },
    Delete { pos: u8 },
    Get { pos: u8 },
    Locate { value: u8 },
    Set { pos: u8, value: u8 },
    Clear,
}

impl FuzzOp {
    fn from_bytes(bytes: &[u8]) -> Option<(FuzzOp, &[u8])> {
        if bytes.is_empty() {
            return None;
        }

        // Clear is rare so lists get a chance to grow.
        let op_type = bytes[0] % 16;
        let rest = &bytes[1..];

        match op_type {
            0..=5 if rest.len() >= 2 => Some((FuzzOp::Insert { pos: rest[0], value: rest[1] }, &rest[2..])),
            6..=8 if !rest.is_empty() => Some((FuzzOp::Delete { pos: rest[0] }, &rest[1..])),
            9..=10 if !rest.is_empty() => Some((FuzzOp::Get { pos: rest[0] }, &rest[1..])),
            11..=12 if !rest.is_empty() => Some((FuzzOp::Locate { value: rest[0] }, &rest[1..])),
            13..=14 if rest.len() >= 2 => Some((FuzzOp::Set { pos: rest[0], value: rest[1] }, &rest[2..])),
            15 => Some((FuzzOp::Clear, rest)),
            _ => None,
        }
    }
}

fn main() {
    fuzz!(|data: &[u8]| {
        let mut list: SeqList<u8> = SeqList::new();
        let mut model: Vec<u8> = Vec::new();
        let mut remaining = data;

        while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
            remaining = rest;
            let len = model.len();

            match op {
                FuzzOp::Insert { pos, value } => {
                    let index = pos as usize;
                    let result = list.insert(index, value);
                    if index <= len {
                        assert_eq!(result, Ok(()));
                        model.insert(index, value);
                    } else {
                        assert_eq!(result, Err(ListError::OutOfRange { index, len }));
                    }
                }

                FuzzOp::Delete { pos } => {
                    let index = pos as usize;
                    let result = list.delete(index);
                    if len == 0 {
                        assert_eq!(result, Err(ListError::Empty));
                    } else if index < len {
                        assert_eq!(result, Ok(model.remove(index)));
                    } else {
                        assert_eq!(result, Err(ListError::OutOfRange { index, len }));
                    }
                }

                FuzzOp::Get { pos } => {
                    let index = pos as usize;
                    let expected = model.get(index).ok_or(ListError::OutOfRange { index, len });
                    assert_eq!(list.get(index), expected);
                }

                FuzzOp::Locate { value } => {
                    let expected = model.iter().position(|x| *x == value).ok_or(ListError::NotFound);
                    assert_eq!(list.locate(&value), expected);
                }

                FuzzOp::Set { pos, value } => {
                    let index = pos as usize;
                    let result = list.set(index, value);
                    match model.get_mut(index) {
                        Some(slot) => assert_eq!(result, Ok(std::mem::replace(slot, value))),
                        None => assert_eq!(result, Err(ListError::OutOfRange { index, len })),
                    }
                }

                FuzzOp::Clear => {
                    list.clear();
                    model.clear();
                    assert!(list.is_empty());
                }
            }

            assert_eq!(list.as_slice(), model.as_slice(), "list diverged after {:?}", op);
        }
    });
}
