mod properties;

/// Materialises term `n` the slow way, for comparison.
pub(crate) fn reference_term(n: usize) -> String {
    let mut term = String::from("1");
    for _ in 1..n {
        term = reference_encode(&term);
    }
    term
}

/// Run-length reads `input`: each run becomes its count followed by the digit.
pub(crate) fn reference_encode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = String::new();
    let mut i = 0;
    while i < bytes.len() {
        let mut j = i;
        while j < bytes.len() && bytes[j] == bytes[i] {
            j += 1;
        }
        out.push_str(&(j - i).to_string());
        out.push(bytes[i] as char);
        i = j;
    }
    out
}
