use chrono::Utc;

const SUFFIX_LEN: usize = 9;
const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate an identifier of the form `<prefix>_<unix-millis>_<random>`
///
/// The random part is nine base-36 characters drawn from a v4 UUID, so two ids
/// minted in the same millisecond differ with overwhelming probability.
/// Uniqueness only holds within one process.
pub fn new_id(prefix: &str) -> String {
    format!(
        "{}_{}_{}",
        prefix,
        Utc::now().timestamp_millis(),
        random_suffix()
    )
}

fn random_suffix() -> String {
    let mut bits = uuid::Uuid::new_v4().as_u128();
    let mut suffix = String::with_capacity(SUFFIX_LEN);

    for _ in 0..SUFFIX_LEN {
        suffix.push(ALPHABET[(bits % 36) as usize] as char);
        bits /= 36;
    }

    suffix
}
