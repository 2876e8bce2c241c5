use rand::Rng;

/// Length of generated booking confirmation codes.
pub const CONFIRMATION_CODE_LENGTH: usize = 10;

/// Generates a random booking confirmation code.
///
/// Creates a 10-character string of uppercase letters and digits. Codes are generated
/// once per booking without a uniqueness pre-check; the unique index on
/// `booked_room.confirmation_code` rejects the rare collision at insert time.
///
/// # Returns
/// - `String` - A 10-character random alphanumeric code
pub fn generate_confirmation_code() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

    let mut rng = rand::rng();

    (0..CONFIRMATION_CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
