use std::fmt;

use failure::Fail;

use crate::cipher;
use crate::crack;
use crate::freq;

#[derive(Debug, Fail, PartialEq)]
pub enum Error {
    #[fail(display = "ciphertext contains no alphabetic characters")]
    EmptyCiphertext,
}

#[derive(Debug)]
pub struct Evaluation {
    pub best_key: u8,
    pub decoded: String,
    pub alternatives: Vec<(u8, String)>,
}

pub fn evaluate(ciphertext: &str) -> Result<Evaluation, Error> {
    let counts = freq::counts(ciphertext);
    let keys = crack::shift_keys(&counts);

    let best_key = match keys.first() {
        Some(&key) => key,
        None => return Err(Error::EmptyCiphertext),
    };

    let alternatives = keys[1..]
        .iter()
        .map(|&key| (key, decode(ciphertext, key)))
        .collect();

    Ok(Evaluation {
        best_key: best_key,
        decoded: decode(ciphertext, best_key),
        alternatives: alternatives,
    })
}

// the ranker estimates the key the text was encoded with, so decoding
// rotates the opposite way
fn decode(ciphertext: &str, key: u8) -> String {
    cipher::shift(ciphertext, -(key as i32))
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Estimated shift key: {}", self.best_key)?;
        writeln!(f)?;
        write!(f, "{}", self.decoded)?;

        for (key, decoded) in &self.alternatives {
            writeln!(f)?;
            writeln!(f)?;
            writeln!(f, "If that looks wrong, key {} gives:", key)?;
            write!(f, "{}", decoded)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_evaluate() {
        let ciphertext = fs::read_to_string("data/shift7.txt").unwrap();
        let evaluation = evaluate(&ciphertext).unwrap();

        assert_eq!(evaluation.best_key, 7);
        assert!(evaluation.decoded.contains("remarkably stable"));

        let keys: Vec<u8> = evaluation
            .alternatives
            .iter()
            .map(|(key, _)| *key)
            .collect();
        assert_eq!(keys, vec![23, 22]);
    }

    #[test]
    fn test_evaluate_empty() {
        assert_eq!(evaluate("").unwrap_err(), Error::EmptyCiphertext);
        assert_eq!(evaluate("123 ,.!?").unwrap_err(), Error::EmptyCiphertext);
    }

    #[test]
    fn test_display() {
        let evaluation = Evaluation {
            best_key: 7,
            decoded: "attack at dawn".to_string(),
            alternatives: vec![(23, "leelvb le klhu".to_string())],
        };

        let rendered = format!("{}", evaluation);
        assert!(rendered.contains("Estimated shift key: 7"));
        assert!(rendered.contains("attack at dawn"));
        assert!(rendered.contains("key 23"));
    }
}
