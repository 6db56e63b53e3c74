use super::reference_encode;
use crate::picker::Picker;
use crate::sink::{Flow, Sink};
use crate::stage::Stage;
use crate::symbol::Symbol;
use proptest::prelude::*;

/// Pushes `input` and the end marker through a single stage.
fn encode(input: &[u8]) -> Vec<Symbol> {
    let mut stage = Stage::new();
    let mut out = Vec::new();
    for &b in input {
        stage.consume(Symbol::Digit(b), &mut out).unwrap();
    }
    stage.consume(Symbol::End, &mut out).unwrap();
    out
}

fn to_digits(input: &[u8]) -> Vec<u8> {
    input.iter().map(|b| b'0' + b % 10).collect()
}

/// Feeds `sequence` into a picker the way a pipeline would.
fn pick(sequence: &str, positions: &[u64]) -> String {
    let mut picker = Picker::new(Vec::new(), positions.iter().copied()).unwrap();
    let symbols = sequence.bytes().map(Symbol::Digit).chain([Symbol::End]);
    for symbol in symbols {
        if picker.consume(symbol).unwrap() == Flow::Halt {
            break;
        }
    }
    String::from_utf8(picker.into_inner()).unwrap()
}

proptest! {
    /// Property 1: Stage output is the run-length reading of its input
    #[test]
    fn prop_stage_matches_reference(input in prop::collection::vec(b'1'..=b'3', 0..200)) {
        let out = encode(&input);
        prop_assert_eq!(out.last(), Some(&Symbol::End));

        let text: String = out.iter().filter_map(Symbol::as_char).collect();
        let input = String::from_utf8(input).unwrap();
        prop_assert_eq!(text, reference_encode(&input));
    }

    /// Property 2: Exactly one end marker, always last
    #[test]
    fn prop_single_end_marker(input: Vec<u8>) {
        let out = encode(&to_digits(&input));
        let ends = out.iter().filter(|s| s.is_end()).count();
        prop_assert_eq!(ends, 1);
        prop_assert_eq!(out.last(), Some(&Symbol::End));
    }

    /// Property 3: Long runs are encoded with a multi-digit count
    #[test]
    fn prop_long_runs(len in 1usize..2000, digit in b'0'..=b'9') {
        let out = encode(&vec![digit; len]);
        let text: String = out.iter().filter_map(Symbol::as_char).collect();
        prop_assert_eq!(text, format!("{}{}", len, digit as char));
    }

    /// Property 4: Picker reports exactly the requested positions in ascending order
    #[test]
    fn prop_picker_matches_indexing(
        input in prop::collection::vec(b'1'..=b'3', 0..100),
        positions in prop::collection::vec(1u64..150, 0..10),
    ) {
        let sequence = String::from_utf8(input).unwrap();
        let mut expected_positions = positions.clone();
        expected_positions.sort_unstable();
        expected_positions.dedup();

        let mut expected = String::new();
        for position in expected_positions {
            match sequence.as_bytes().get(position as usize - 1) {
                Some(&b) => expected.push_str(&format!("{}: {}\n", position, b as char)),
                None => expected.push_str(&format!("{}: sequence too short\n", position)),
            }
        }

        prop_assert_eq!(pick(&sequence, &positions), expected);
    }
}

/// Bolero fuzz test: a stage never panics and always terminates its output
#[cfg(test)]
#[test]
fn fuzz_stage_any_digits() {
    bolero::check!().with_type::<Vec<u8>>().for_each(|input| {
        let digits = to_digits(input);
        let out = encode(&digits);

        assert_eq!(out.last(), Some(&Symbol::End));
        let text: String = out.iter().filter_map(Symbol::as_char).collect();
        let input = String::from_utf8(digits).unwrap();
        assert_eq!(text, reference_encode(&input));
    });
}

/// Bolero fuzz test: a picker never panics and never halts before reporting
#[cfg(test)]
#[test]
fn fuzz_picker() {
    bolero::check!()
        .with_type::<(Vec<u8>, Vec<u16>)>()
        .for_each(|(input, positions)| {
            let sequence = String::from_utf8(to_digits(input)).unwrap();
            let positions: Vec<u64> = positions.iter().map(|&p| p as u64 + 1).collect();
            let report = pick(&sequence, &positions);

            let mut unique = positions.clone();
            unique.sort_unstable();
            unique.dedup();
            assert_eq!(report.lines().count(), unique.len());
        });
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_twelve_ones() {
        let text: String = encode(b"111111111111")
            .iter()
            .filter_map(Symbol::as_char)
            .collect();
        assert_eq!(text, "121");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(encode(b""), vec![Symbol::End]);
    }
}
