use crate::network::Sample;

/// Two-input truth tables, inputs ordered `(0,0) (0,1) (1,0) (1,1)`.
fn truth_table(outputs: [u32; 4]) -> Vec<Sample> {
    [[0, 0], [0, 1], [1, 0], [1, 1]]
        .into_iter()
        .zip(outputs)
        .map(|(inputs, expected)| Sample::new(inputs.to_vec(), expected))
        .collect()
}

pub fn nand() -> Vec<Sample> {
    truth_table([1, 1, 1, 0])
}

pub fn and() -> Vec<Sample> {
    truth_table([0, 0, 0, 1])
}

pub fn or() -> Vec<Sample> {
    truth_table([0, 1, 1, 1])
}

/// Not linearly separable: a single unit never converges on it.
pub fn xor() -> Vec<Sample> {
    truth_table([0, 1, 1, 0])
}

/// Names accepted by `by_name`.
pub const NAMES: [&str; 4] = ["nand", "and", "or", "xor"];

/// Looks up a built-in dataset, case-insensitively.
pub fn by_name(name: &str) -> Option<Vec<Sample>> {
    match name.to_ascii_lowercase().as_str() {
        "nand" => Some(nand()),
        "and" => Some(and()),
        "or" => Some(or()),
        "xor" => Some(xor()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nand_table() {
        let samples = nand();
        assert_eq!(samples.len(), 4);
        assert_eq!(samples[0], Sample::new(vec![0, 0], 1));
        assert_eq!(samples[3], Sample::new(vec![1, 1], 0));
    }

    #[test]
    fn every_name_resolves() {
        for name in NAMES {
            assert!(by_name(name).is_some(), "{} should resolve", name);
        }
        assert_eq!(by_name("NAND"), Some(nand()));
        assert!(by_name("nor").is_none());
    }
}
