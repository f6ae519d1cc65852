pub fn shift(text: &str, key: i32) -> String {
    let key = key.rem_euclid(26) as u8;

    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let base = if c.is_ascii_lowercase() { b'a' } else { b'A' };
                (base + (c as u8 - base + key) % 26) as char
            } else {
                c
            }
        })
        .collect()
}
