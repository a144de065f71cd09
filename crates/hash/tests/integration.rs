//! Integration tests for hash crate

#[cfg(test)]
mod tests {
    use crdprep_hash::*;

    #[test]
    fn test_chunked_input_matches_whole_body() {
        let body = vec![0x5a_u8; 200 * 1024];
        let mut hasher = Hasher::new();
        for chunk in body.chunks(8 * 1024) {
            hasher.update(chunk);
        }
        assert_eq!(hasher.bytes_hashed(), body.len() as u64);
        assert_eq!(hasher.finalize(), Hash::from_data(&body));
    }

    #[test]
    fn test_display_is_lowercase_hex() {
        let hash = Hash::from_data(b"https://example.com/crds.tar.gz");
        let shown = hash.to_string();
        assert_eq!(shown, hash.to_hex());
        assert_eq!(shown.len(), 64);
        assert!(shown
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_distinct_inputs_distinct_hashes() {
        assert_ne!(
            Hash::from_data(b"https://example.com/a.tar.gz"),
            Hash::from_data(b"https://example.com/b.tar.gz")
        );
    }
}
